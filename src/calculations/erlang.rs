use crate::report::{ErlangParameters, ErlangResult};

/// The minimum-agents scan gives up at `ceil(traffic * SEARCH_BOUND_FACTOR)`.
pub const SEARCH_BOUND_FACTOR: f64 = 3.0;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Offered traffic in Erlangs. AHT arrives in seconds; the hour
/// conversion lives only in this formula.
pub fn traffic_intensity(call_volume: f64, aht_seconds: f64) -> f64 {
    call_volume * aht_seconds / SECONDS_PER_HOUR
}

/// Erlang B blocking probability, computed by the iterative recurrence
/// `b(n) = t*b(n-1) / (n + t*b(n-1))` to avoid factorial overflow.
/// Result is always in [0, 1].
pub fn erlang_b(traffic: f64, agents: u32) -> f64 {
    if agents == 0 {
        return 1.0;
    }
    let mut b = 1.0;
    for n in 1..=agents {
        b = traffic * b / (n as f64 + traffic * b);
    }
    b
}

/// Erlang C probability that an arriving contact must wait.
///
/// At or below capacity delay is certain, so a saturated system returns
/// 1.0. A non-positive denominator is a degenerate stability edge and
/// returns 0.0 rather than a negative probability.
pub fn erlang_c(traffic: f64, agents: u32) -> f64 {
    let agents_f = agents as f64;
    if agents_f <= traffic {
        return 1.0;
    }
    let b = erlang_b(traffic, agents);
    let denominator = agents_f - traffic * (1.0 - b);
    if denominator <= 0.0 {
        return 0.0;
    }
    agents_f * b / denominator
}

/// Probability a contact is answered within `target_time` seconds:
/// `1 - C * exp(-(agents - traffic) * target_time / aht)`. With no agent
/// surplus no target time can be guaranteed, so the level is 0.0.
pub fn service_level(traffic: f64, agents: u32, target_time: f64, aht_seconds: f64) -> f64 {
    let surplus = agents as f64 - traffic;
    if surplus <= 0.0 {
        return 0.0;
    }
    let waiting = erlang_c(traffic, agents);
    1.0 - waiting * (-(surplus * target_time) / aht_seconds).exp()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSearch {
    pub agents: u32,
    /// The scan hit the safety cap without meeting the target; `agents`
    /// is the cap, a best-effort answer rather than a failure.
    pub bound_exhausted: bool,
}

/// Smallest agent count at or above `ceil(traffic)` whose service level
/// meets `target` (a fraction in [0, 1]), found by linear increment.
/// Capped at `ceil(traffic * 3)`; exhausting the cap returns the cap.
pub fn required_agents(
    traffic: f64,
    target: f64,
    target_time: f64,
    aht_seconds: f64,
) -> AgentSearch {
    let mut agents = traffic.ceil().max(0.0) as u32;
    let max_agents = (traffic * SEARCH_BOUND_FACTOR).ceil().max(0.0) as u32;

    while agents <= max_agents {
        if service_level(traffic, agents, target_time, aht_seconds) >= target {
            return AgentSearch {
                agents,
                bound_exhausted: false,
            };
        }
        agents += 1;
    }

    AgentSearch {
        agents: max_agents,
        bound_exhausted: true,
    }
}

pub fn calculate(parameters: &ErlangParameters) -> ErlangResult {
    let traffic = traffic_intensity(parameters.call_volume, parameters.average_handling_time);
    let search = required_agents(
        traffic,
        parameters.service_level_target / 100.0,
        parameters.target_time,
        parameters.average_handling_time,
    );
    ErlangResult {
        agents_needed: search.agents,
        traffic_intensity: traffic,
        bound_exhausted: search.bound_exhausted,
    }
}
