//! 브레이튼 사이클 코어 회귀 테스트. 설계점 값은 수식으로부터 독립 계산한 기준값이다.
use gas_cycle_analyzer::cycle::brayton::{evaluate, CycleError, CycleInput};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn design_point_reference() {
    // 압력비 12, 터빈 입구 1350 K, 대기 298 K, 공기 물성
    let res = evaluate(CycleInput::with_air_defaults(12.0, 1350.0, 298.0)).expect("design point");
    assert_close("t2", res.compressor_exit_temp_k, 606.113_228_918_740_4, 1e-9);
    assert_close("t4", res.turbine_exit_temp_k, 663.737_369_200_260_4, 1e-9);
    assert_close("w_c", res.compressor_work_kj_per_kg, 309.653_795_063_334_14, 1e-9);
    assert_close("w_t", res.turbine_work_kj_per_kg, 689.693_943_953_738_2, 1e-9);
    assert_close("w_net", res.net_work_kj_per_kg, 380.040_148_890_404_05, 1e-9);
    assert_close("q_in", res.heat_input_kj_per_kg, 747.606_204_936_665_8, 1e-9);
    assert_close("eff", res.thermal_efficiency_pct, 50.834_268_948_128_86, 1e-9);
    assert!(res.net_work_kj_per_kg > 0.0);
    assert!(res.thermal_efficiency_pct < 60.0);
    assert!(!res.is_degenerate());
}

#[test]
fn deterministic_bitwise() {
    let input = CycleInput::with_air_defaults(8.7, 1234.5, 291.3);
    let a = evaluate(input).expect("first");
    let b = evaluate(input).expect("second");
    assert_eq!(a, b, "identical inputs must yield bit-identical outputs");
}

#[test]
fn temperature_ordering_for_valid_inputs() {
    for (pr, t_max, t_amb) in [
        (1.5, 900.0, 250.0),
        (5.0, 1000.0, 288.0),
        (12.0, 1350.0, 298.0),
        (20.0, 1600.0, 320.0),
    ] {
        let res = evaluate(CycleInput::with_air_defaults(pr, t_max, t_amb)).expect("valid input");
        assert!(
            res.compressor_exit_temp_k > t_amb,
            "t2 must rise above ambient (pr={pr})"
        );
        assert!(
            res.turbine_exit_temp_k < t_max,
            "t4 must fall below turbine inlet (pr={pr})"
        );
    }
}

#[test]
fn degenerate_heat_input_forces_zero_efficiency() {
    // 압력비 200이면 t2가 1350 K를 넘어 열입력이 음수가 된다.
    let res = evaluate(CycleInput::with_air_defaults(200.0, 1350.0, 298.0)).expect("degenerate");
    assert!(res.is_degenerate());
    assert!(res.heat_input_kj_per_kg <= 0.0);
    assert!(res.net_work_kj_per_kg < 0.0);
    assert_eq!(res.thermal_efficiency_pct, 0.0, "efficiency sentinel must be exact");
}

#[test]
fn unity_pressure_ratio_boundary() {
    let res = evaluate(CycleInput::with_air_defaults(1.0, 1350.0, 298.0)).expect("boundary");
    assert_eq!(res.compressor_exit_temp_k, 298.0);
    assert_eq!(res.turbine_exit_temp_k, 1350.0);
    assert_eq!(res.compressor_work_kj_per_kg, 0.0);
    assert_eq!(res.net_work_kj_per_kg, res.turbine_work_kj_per_kg);
}

#[test]
fn out_of_domain_inputs_are_rejected() {
    let err = evaluate(CycleInput::with_air_defaults(-5.0, 1350.0, 298.0)).unwrap_err();
    assert!(matches!(err, CycleError::NonPositivePressureRatio(v) if v == -5.0));

    let err = evaluate(CycleInput::with_air_defaults(0.0, 1350.0, 298.0)).unwrap_err();
    assert!(matches!(err, CycleError::NonPositivePressureRatio(_)));

    let err = evaluate(CycleInput {
        specific_heat_ratio: 1.0,
        ..CycleInput::with_air_defaults(12.0, 1350.0, 298.0)
    })
    .unwrap_err();
    assert!(matches!(err, CycleError::HeatRatioNotAboveOne(_)));

    let err = evaluate(CycleInput {
        specific_heat_cp_kj_per_kgk: 0.0,
        ..CycleInput::with_air_defaults(12.0, 1350.0, 298.0)
    })
    .unwrap_err();
    assert!(matches!(err, CycleError::NonPositiveSpecificHeat(_)));

    let err = evaluate(CycleInput::with_air_defaults(12.0, 1350.0, -10.0)).unwrap_err();
    assert!(matches!(err, CycleError::NonPositiveTemperature(_, _)));
}

#[test]
fn nan_pressure_ratio_is_rejected() {
    // NaN은 어떤 비교도 통과하지 못하므로 정의역 오류로 처리되어야 한다.
    let err = evaluate(CycleInput::with_air_defaults(f64::NAN, 1350.0, 298.0)).unwrap_err();
    assert!(matches!(err, CycleError::NonPositivePressureRatio(_)));
}
