use serde::{Deserialize, Serialize};

/// 압력 단위를 정의한다. 내부 기준은 bar이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Bar,
    KiloPascal,
    MegaPascal,
    Psi,
    Atm,
}

impl PressureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Bar => "bar",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::Psi => "psi",
            PressureUnit::Atm => "atm",
        }
    }
}

const ATM_BAR: f64 = 1.01325;
const PSI_BAR: f64 = 0.0689476;

/// 주어진 값을 bar로 변환한다.
pub fn to_bar(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value,
        PressureUnit::KiloPascal => value / 100.0,
        PressureUnit::MegaPascal => value * 10.0,
        PressureUnit::Psi => value * PSI_BAR,
        PressureUnit::Atm => value * ATM_BAR,
    }
}

/// bar 값을 원하는 단위로 변환한다.
pub fn from_bar(value_bar: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value_bar,
        PressureUnit::KiloPascal => value_bar * 100.0,
        PressureUnit::MegaPascal => value_bar / 10.0,
        PressureUnit::Psi => value_bar / PSI_BAR,
        PressureUnit::Atm => value_bar / ATM_BAR,
    }
}

/// 압력을 서로 다른 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    from_bar(to_bar(value, from), to)
}
