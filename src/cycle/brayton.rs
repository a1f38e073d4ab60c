/// 공기의 비열비 기본값 (상온 이상기체 근사).
pub const AIR_SPECIFIC_HEAT_RATIO: f64 = 1.4;
/// 공기의 정압비열 기본값 [kJ/(kg·K)].
pub const AIR_SPECIFIC_HEAT_CP: f64 = 1.005;

/// 브레이튼 사이클 계산 입력. 온도는 절대온도[K] 기준이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleInput {
    /// 압축기 출구/입구 압력비 (통상 5~20)
    pub pressure_ratio: f64,
    /// 터빈 입구 온도 [K]
    pub turbine_inlet_temp_k: f64,
    /// 대기(압축기 입구) 온도 [K]
    pub ambient_temp_k: f64,
    /// 비열비 k (> 1)
    pub specific_heat_ratio: f64,
    /// 정압비열 cp [kJ/(kg·K)]
    pub specific_heat_cp_kj_per_kgk: f64,
}

impl CycleInput {
    /// 공기 물성 기본값(k=1.4, cp=1.005)으로 입력을 구성한다.
    pub fn with_air_defaults(
        pressure_ratio: f64,
        turbine_inlet_temp_k: f64,
        ambient_temp_k: f64,
    ) -> Self {
        Self {
            pressure_ratio,
            turbine_inlet_temp_k,
            ambient_temp_k,
            specific_heat_ratio: AIR_SPECIFIC_HEAT_RATIO,
            specific_heat_cp_kj_per_kgk: AIR_SPECIFIC_HEAT_CP,
        }
    }
}

/// 브레이튼 사이클 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleResult {
    /// 압축기 출구 온도 t2 [K]
    pub compressor_exit_temp_k: f64,
    /// 터빈 출구 온도 t4 [K]
    pub turbine_exit_temp_k: f64,
    /// 압축기 소요 일 [kJ/kg]
    pub compressor_work_kj_per_kg: f64,
    /// 터빈 발생 일 [kJ/kg]
    pub turbine_work_kj_per_kg: f64,
    /// 연소기 열입력 [kJ/kg]. t2가 터빈 입구 온도 이상이면 0 이하가 된다.
    pub heat_input_kj_per_kg: f64,
    /// 정미 비출력 [kJ/kg]. 물리적으로 일관되지 않은 입력이면 음수일 수 있다.
    pub net_work_kj_per_kg: f64,
    /// 열효율 [%]. 열입력이 0 이하인 퇴화 조건에서는 정확히 0으로 고정한다.
    pub thermal_efficiency_pct: f64,
}

impl CycleResult {
    /// 열입력이 0 이하라 효율을 0으로 고정한 퇴화 조건인지 여부.
    pub fn is_degenerate(&self) -> bool {
        self.heat_input_kj_per_kg <= 0.0
    }
}

/// 사이클 평가 시 발생 가능한 입력 정의역 오류.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CycleError {
    /// 압력비가 0 이하 (분수 지수 거듭제곱의 정의역 밖)
    NonPositivePressureRatio(f64),
    /// 비열비 k가 1 이하
    HeatRatioNotAboveOne(f64),
    /// 정압비열 cp가 0 이하
    NonPositiveSpecificHeat(f64),
    /// 절대온도가 0 이하
    NonPositiveTemperature(&'static str, f64),
}

impl std::fmt::Display for CycleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CycleError::NonPositivePressureRatio(v) => {
                write!(f, "압력비는 양수여야 합니다: {v}")
            }
            CycleError::HeatRatioNotAboveOne(v) => {
                write!(f, "비열비 k는 1보다 커야 합니다: {v}")
            }
            CycleError::NonPositiveSpecificHeat(v) => {
                write!(f, "정압비열 cp는 양수여야 합니다: {v}")
            }
            CycleError::NonPositiveTemperature(name, v) => {
                write!(f, "절대온도 {name}은(는) 양수여야 합니다: {v} K")
            }
        }
    }
}

impl std::error::Error for CycleError {}

/// 이상기체 등엔트로피 압축/팽창 가정으로 단순 브레이튼 사이클을 평가한다.
///
/// 같은 입력은 항상 비트 동일한 출력을 낸다. 정의역 밖 입력(압력비 0 이하,
/// k 1 이하 등)은 NaN을 돌려주는 대신 [`CycleError`]로 거부한다. 압력비가
/// 과도하게 커서 t2가 터빈 입구 온도에 도달하는 퇴화 조건은 오류가 아니며,
/// 표시 안정성을 위해 효율만 0으로 고정한다.
pub fn evaluate(input: CycleInput) -> Result<CycleResult, CycleError> {
    let CycleInput {
        pressure_ratio,
        turbine_inlet_temp_k,
        ambient_temp_k,
        specific_heat_ratio: k,
        specific_heat_cp_kj_per_kgk: cp,
    } = input;

    if !(pressure_ratio > 0.0) {
        return Err(CycleError::NonPositivePressureRatio(pressure_ratio));
    }
    if !(k > 1.0) {
        return Err(CycleError::HeatRatioNotAboveOne(k));
    }
    if !(cp > 0.0) {
        return Err(CycleError::NonPositiveSpecificHeat(cp));
    }
    if !(ambient_temp_k > 0.0) {
        return Err(CycleError::NonPositiveTemperature("대기 온도", ambient_temp_k));
    }
    if !(turbine_inlet_temp_k > 0.0) {
        return Err(CycleError::NonPositiveTemperature(
            "터빈 입구 온도",
            turbine_inlet_temp_k,
        ));
    }

    let exponent = (k - 1.0) / k;
    let temperature_ratio = pressure_ratio.powf(exponent);

    let t2 = ambient_temp_k * temperature_ratio;
    let compressor_work = cp * (t2 - ambient_temp_k);
    let t4 = turbine_inlet_temp_k / temperature_ratio;
    let turbine_work = cp * (turbine_inlet_temp_k - t4);
    let net_work = turbine_work - compressor_work;
    let heat_in = cp * (turbine_inlet_temp_k - t2);
    let efficiency_pct = if heat_in > 0.0 {
        net_work / heat_in * 100.0
    } else {
        0.0
    };

    Ok(CycleResult {
        compressor_exit_temp_k: t2,
        turbine_exit_temp_k: t4,
        compressor_work_kj_per_kg: compressor_work,
        turbine_work_kj_per_kg: turbine_work,
        heat_input_kj_per_kg: heat_in,
        net_work_kj_per_kg: net_work,
        thermal_efficiency_pct: efficiency_pct,
    })
}
