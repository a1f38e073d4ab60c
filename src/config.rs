use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cycle::brayton::{AIR_SPECIFIC_HEAT_CP, AIR_SPECIFIC_HEAT_RATIO};
use crate::units::{PressureUnit, TemperatureUnit};

/// 대시보드가 시작할 때 사용할 사이클 입력 기본값.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CycleDefaults {
    pub pressure_ratio: f64,
    pub turbine_inlet_temp_k: f64,
    pub ambient_temp_k: f64,
    pub specific_heat_ratio: f64,
    pub specific_heat_cp: f64,
}

impl Default for CycleDefaults {
    fn default() -> Self {
        Self {
            pressure_ratio: 12.0,
            turbine_inlet_temp_k: 1350.0,
            ambient_temp_k: 298.0,
            specific_heat_ratio: AIR_SPECIFIC_HEAT_RATIO,
            specific_heat_cp: AIR_SPECIFIC_HEAT_CP,
        }
    }
}

/// HTC 증기 사이클 측 기본값.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SteamDefaults {
    pub boiler_pressure_bar: f64,
    pub steam_temp_c: f64,
}

impl Default for SteamDefaults {
    fn default() -> Self {
        Self {
            boiler_pressure_bar: 50.0,
            steam_temp_c: 350.0,
        }
    }
}

/// 결과 표시에 사용할 기본 단위 설정.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub temperature: TemperatureUnit,
    pub pressure: PressureUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            temperature: TemperatureUnit::Kelvin,
            pressure: PressureUnit::Bar,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
///
/// 시작 시 한 번 읽기만 하며 다시 기록하지 않는다. 슬라이더 등 사용자
/// 조작 상태는 저장 대상이 아니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI 언어 코드 (auto/ko/en 등)
    pub language: String,
    /// 언어팩 디렉터리 경로 (없으면 내장 문자열 사용)
    pub language_pack_dir: Option<String>,
    pub default_units: DefaultUnits,
    pub cycle: CycleDefaults,
    pub steam: SteamDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            default_units: DefaultUnits::default(),
            cycle: CycleDefaults::default(),
            steam: SteamDefaults::default(),
        }
    }
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Parse(e) => write!(f, "설정 파싱 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parse(value)
    }
}

/// config.toml이 있으면 로드하고 없으면 기본 설정을 반환한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(Path::new("config.toml"))
}

/// 지정된 경로에서 설정을 로드한다. 파일이 없으면 기본값을 쓴다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        Ok(Config::default())
    }
}
