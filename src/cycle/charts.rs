//! 대시보드 표시용 예시 곡선 생성.
//!
//! 두 곡선 모두 실제 물성 모델이 아니라 표시용 합성 곡선이다. 증기표 기반
//! 팽창선이 필요하면 별도 물성 라이브러리를 붙여야 한다.

/// 곡선당 표본 점 개수.
pub const CURVE_POINTS: usize = 100;

/// h-s 팽창선의 엔트로피 시작값 [kJ/(kg·K)].
pub const ENTROPY_START: f64 = 5.5;
/// h-s 팽창선의 엔트로피 끝값 [kJ/(kg·K)].
pub const ENTROPY_END: f64 = 8.0;

/// 증기 사이클 h-s 팽창선(합성)을 생성한다.
///
/// `h = 2500 + 150·Δs − 40·Δs² + 0.2·t_steam` (Δs = s − 5.5). 증기 온도는
/// 곡선 전체를 수직으로 평행이동시키는 역할만 한다.
pub fn expansion_line(steam_temp_c: f64) -> Vec<[f64; 2]> {
    let span = ENTROPY_END - ENTROPY_START;
    (0..CURVE_POINTS)
        .map(|i| {
            let s = ENTROPY_START + span * i as f64 / (CURVE_POINTS - 1) as f64;
            let ds = s - ENTROPY_START;
            let h = 2500.0 + 150.0 * ds - 40.0 * ds * ds + steam_temp_c * 0.2;
            [s, h]
        })
        .collect()
}

/// 가스 사이클 T-H 연소선(합성)을 생성한다.
///
/// 열유량 분율 0~100%에 대해 압축기 출구 온도 t2에서 터빈 입구 온도까지
/// 선형으로 승온한다.
pub fn combustion_line(compressor_exit_temp_k: f64, turbine_inlet_temp_k: f64) -> Vec<[f64; 2]> {
    (0..CURVE_POINTS)
        .map(|i| {
            let h_flow = 100.0 * i as f64 / (CURVE_POINTS - 1) as f64;
            let temp = compressor_exit_temp_k
                + (turbine_inlet_temp_k - compressor_exit_temp_k) * (h_flow / 100.0);
            [h_flow, temp]
        })
        .collect()
}
