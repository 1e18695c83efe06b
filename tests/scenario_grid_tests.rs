use staffing_tool::calculations::erlang;
use staffing_tool::{
    CalculationError, ErlangParameters, FteParameters, MULTIPLIERS, erlang_grid, fte_grid,
    service_level_target_for_row,
};

const EPSILON: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

fn fte_baseline() -> FteParameters {
    FteParameters {
        incoming_requests_per_hour: 100.0,
        average_resolution_time: 1.0,
        requests_per_employee_per_hour: 10.0,
    }
}

fn erlang_baseline() -> ErlangParameters {
    ErlangParameters {
        call_volume: 100.0,
        average_handling_time: 180.0,
        service_level_target: 80.0,
        target_time: 20.0,
    }
}

#[test]
fn grid_has_ten_rows_in_multiplier_order() {
    let rows = fte_grid(&fte_baseline()).unwrap();
    assert_eq!(rows.len(), MULTIPLIERS.len());
    for (row, &m) in rows.iter().zip(MULTIPLIERS.iter()) {
        assert_eq!(row.multiplier, m);
    }
}

#[test]
fn fte_multiplier_one_row_reproduces_the_baseline() {
    let rows = fte_grid(&fte_baseline()).unwrap();
    let baseline_row = &rows[1];
    assert_eq!(baseline_row.multiplier, 1.0);
    for value in [
        baseline_row.requests_only,
        baseline_row.resolution_only,
        baseline_row.productivity_only,
        baseline_row.requests_and_resolution,
        baseline_row.all_combined,
    ] {
        assert_eq!(value, 10.0);
    }
}

#[test]
fn fte_doubling_row_matches_reference_values() {
    let rows = fte_grid(&fte_baseline()).unwrap();
    let row = &rows[3];
    assert_eq!(row.multiplier, 2.0);
    assert_eq!(row.requests_only, 20.0);
    assert_eq!(row.resolution_only, 20.0);
    assert_eq!(row.productivity_only, 5.0);
    assert_eq!(row.requests_and_resolution, 40.0);
    assert_eq!(row.all_combined, 20.0);
}

#[test]
fn fte_single_input_columns_scale_linearly() {
    let rows = fte_grid(&fte_baseline()).unwrap();
    for row in &rows {
        let m = row.multiplier;
        assert!(approx(row.requests_only, 10.0 * m));
        assert!(approx(row.resolution_only, 10.0 * m));
        assert!(approx(row.productivity_only, 10.0 / m));
        assert!(approx(row.requests_and_resolution, 10.0 * m * m));
    }
}

#[test]
fn fte_all_combined_column_collapses_to_linear_scaling() {
    // Multiplying all three inputs cancels the productivity factor, so
    // this column tracks the resolution-only column exactly.
    let rows = fte_grid(&fte_baseline()).unwrap();
    for row in &rows {
        assert!(approx(row.all_combined, row.resolution_only));
    }
}

#[test]
fn fte_grid_propagates_degenerate_baselines() {
    let mut baseline = fte_baseline();
    baseline.requests_per_employee_per_hour = 0.0;
    let err = fte_grid(&baseline).unwrap_err();
    assert!(matches!(err, CalculationError::Degenerate(_)));
}

#[test]
fn erlang_multiplier_one_row_reproduces_the_baseline() {
    let baseline = erlang_baseline();
    let baseline_agents = erlang::calculate(&baseline).agents_needed;
    let rows = erlang_grid(&baseline);
    let row = &rows[1];
    assert_eq!(row.multiplier, 1.0);
    assert_eq!(row.call_volume_only, baseline_agents);
    assert_eq!(row.aht_only, baseline_agents);
    assert_eq!(row.service_level_only, baseline_agents);
    assert_eq!(row.target_time_only, baseline_agents);
    assert_eq!(row.all_combined, baseline_agents);
}

#[test]
fn erlang_load_columns_never_shrink_as_the_multiplier_grows() {
    let rows = erlang_grid(&erlang_baseline());
    for pair in rows.windows(2) {
        assert!(pair[1].call_volume_only >= pair[0].call_volume_only);
        assert!(pair[1].aht_only >= pair[0].aht_only);
    }
}

#[test]
fn service_level_sequence_interpolates_toward_one_hundred() {
    let expected = [
        75.0, 80.0, 82.5, 85.0, 87.5, 90.0, 92.5, 95.0, 97.5, 100.0,
    ];
    for (index, want) in expected.iter().enumerate() {
        let got = service_level_target_for_row(80.0, index);
        assert!(approx(got, *want), "row {index}: got {got}, want {want}");
    }
}

#[test]
fn service_level_sequence_floors_at_zero_and_caps_at_one_hundred() {
    assert_eq!(service_level_target_for_row(3.0, 0), 0.0);
    assert_eq!(service_level_target_for_row(100.0, 0), 95.0);
    for index in 1..MULTIPLIERS.len() {
        assert_eq!(service_level_target_for_row(100.0, index), 100.0);
    }
    assert_eq!(service_level_target_for_row(80.0, 9), 100.0);
}

#[test]
fn erlang_all_combined_column_scales_load_and_interpolates_the_target() {
    // The combined column multiplies volume, AHT, and target time by the
    // row multiplier but takes its service-level target from the same
    // interpolated sequence as the target-only column (for an 80%
    // baseline: 75 at row 0, 87.5 at row 4, 100 at row 9). Neither a
    // `target * m` reading nor the unmodified baseline target would
    // produce these agent counts.
    let baseline = erlang_baseline();
    let rows = erlang_grid(&baseline);
    let cases = [(0usize, 0.5, 75.0), (4, 2.5, 87.5), (9, 5.0, 100.0)];
    for (index, m, target) in cases {
        assert_eq!(rows[index].multiplier, m);
        let expected = erlang::calculate(&ErlangParameters {
            call_volume: baseline.call_volume * m,
            average_handling_time: baseline.average_handling_time * m,
            service_level_target: target,
            target_time: baseline.target_time * m,
        })
        .agents_needed;
        assert_eq!(rows[index].all_combined, expected, "row {index}");
    }
}

#[test]
fn erlang_service_level_column_uses_the_interpolated_sequence() {
    let baseline = erlang_baseline();
    let rows = erlang_grid(&baseline);
    for (index, row) in rows.iter().enumerate() {
        let target = service_level_target_for_row(baseline.service_level_target, index);
        let expected = erlang::calculate(&ErlangParameters {
            service_level_target: target,
            ..baseline
        })
        .agents_needed;
        assert_eq!(row.service_level_only, expected, "row {index}");
    }
}
