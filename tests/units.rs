//! 표시 단위 변환 테스트.
use gas_cycle_analyzer::units::{
    convert_pressure, convert_temperature, PressureUnit, TemperatureUnit,
};

#[test]
fn temperature_reference_points() {
    let c = convert_temperature(298.15, TemperatureUnit::Kelvin, TemperatureUnit::Celsius);
    assert!((c - 25.0).abs() < 1e-9);
    let f = convert_temperature(25.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
    assert!((f - 77.0).abs() < 1e-9);
    let k = convert_temperature(77.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Kelvin);
    assert!((k - 298.15).abs() < 1e-9);
}

#[test]
fn temperature_round_trip() {
    for unit in [
        TemperatureUnit::Kelvin,
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
    ] {
        let out = convert_temperature(
            convert_temperature(1350.0, TemperatureUnit::Kelvin, unit),
            unit,
            TemperatureUnit::Kelvin,
        );
        assert!((out - 1350.0).abs() < 1e-9, "round trip via {unit:?}");
    }
}

#[test]
fn pressure_reference_points() {
    let kpa = convert_pressure(1.0, PressureUnit::Bar, PressureUnit::KiloPascal);
    assert!((kpa - 100.0).abs() < 1e-9);
    let bar = convert_pressure(1.0, PressureUnit::Atm, PressureUnit::Bar);
    assert!((bar - 1.01325).abs() < 1e-9);
    let mpa = convert_pressure(50.0, PressureUnit::Bar, PressureUnit::MegaPascal);
    assert!((mpa - 5.0).abs() < 1e-9);
    let psi = convert_pressure(1.0, PressureUnit::Psi, PressureUnit::Bar);
    assert!((psi - 0.0689476).abs() < 1e-9);
}
