//! 표시용 합성 곡선의 형태 계약 테스트.
use gas_cycle_analyzer::cycle::charts::{
    combustion_line, expansion_line, CURVE_POINTS, ENTROPY_END, ENTROPY_START,
};

#[test]
fn expansion_line_endpoints_and_shape() {
    let line = expansion_line(350.0);
    assert_eq!(line.len(), CURVE_POINTS);

    let first = line[0];
    let last = line[CURVE_POINTS - 1];
    assert_eq!(first[0], ENTROPY_START);
    assert!((last[0] - ENTROPY_END).abs() < 1e-12);
    // h(5.5) = 2500 + 0.2*350, h(8.0) = 2500 + 375 - 250 + 70
    assert!((first[1] - 2570.0).abs() < 1e-9);
    assert!((last[1] - 2695.0).abs() < 1e-9);

    // 엔트로피 축은 단조 증가
    for pair in line.windows(2) {
        assert!(pair[1][0] > pair[0][0]);
    }
}

#[test]
fn expansion_line_shifts_uniformly_with_steam_temp() {
    let base = expansion_line(350.0);
    let hot = expansion_line(400.0);
    for (a, b) in base.iter().zip(hot.iter()) {
        assert_eq!(a[0], b[0]);
        assert!((b[1] - a[1] - 10.0).abs() < 1e-9, "0.2 * 50 = 10 kJ/kg shift");
    }
}

#[test]
fn combustion_line_is_linear_between_t2_and_turbine_inlet() {
    let t2 = 606.0;
    let t_max = 1350.0;
    let line = combustion_line(t2, t_max);
    assert_eq!(line.len(), CURVE_POINTS);
    assert_eq!(line[0], [0.0, t2]);
    let last = line[CURVE_POINTS - 1];
    assert!((last[0] - 100.0).abs() < 1e-12);
    assert!((last[1] - t_max).abs() < 1e-9);

    // 중간점은 선형 보간 값이어야 한다
    for [x, y] in &line {
        let expected = t2 + (t_max - t2) * (x / 100.0);
        assert!((y - expected).abs() < 1e-9);
    }
}
