//! End-to-end conversions through the public surface.

use mensura::{convert, convert_exact, units, Number, Unit, UnitError};

fn close_to(actual: f64, expected: f64, places: i32) {
    let tol = 10f64.powi(-places) / 2.0;
    assert!(
        (actual - expected).abs() < tol,
        "{actual} != {expected} to {places} places"
    );
}

#[test]
fn square_inches_to_square_millimeters() {
    close_to(convert(129.5674, "in²", "mm²").unwrap(), 83591.704, 3);
}

#[test]
fn gallons_to_liters() {
    close_to(convert(3.657, "gal", "l").unwrap(), 13.843, 3);
}

#[test]
fn grams_to_pounds() {
    close_to(convert(500.679, "g", "lb").unwrap(), 1.104, 3);
}

#[test]
fn miles_per_hour_to_kilometers_per_hour() {
    close_to(convert(132.7, "mi/h", "km/h").unwrap(), 213.560, 3);
}

#[test]
fn poise_to_pascal_seconds() {
    close_to(convert(1.0, "P", "Pa·s").unwrap(), 0.1, 9);
}

#[test]
fn inches_of_mercury_to_psi() {
    close_to(convert(50.34, "inHg", "psi").unwrap(), 24.725, 3);
}

#[test]
fn temperature_scales() {
    close_to(convert(0, "°C", "K").unwrap(), 273.15, 9);
    close_to(convert(32, "°F", "°C").unwrap(), 0.0, 9);
    close_to(convert(100, "°C", "°F").unwrap(), 212.0, 9);
}

#[test]
fn compound_algebra_speed_ratio() {
    let ratio = 60.0 * (units::mi() / units::h()) / (units::km() / units::h());
    assert!(ratio.is_dimensionless());
    close_to(ratio.to_f64().unwrap(), 96.56064, 4);
}

#[test]
fn exponent_spellings_reduce_identically() {
    let canonical = Unit::parse("in³").unwrap();
    for spelling in ["in^3", "in**3", "cu in"] {
        let u = Unit::parse(spelling).unwrap();
        assert_eq!(u.dimension, canonical.dimension, "{spelling}");
        assert_eq!(u.factor, canonical.factor, "{spelling}");
    }
}

#[test]
fn incompatible_error_names_both_sides() {
    let err = convert(1, "m", "kg").unwrap_err();
    let msg = err.to_string();
    assert!(matches!(err, UnitError::Incompatible { .. }));
    assert!(msg.contains('m') && msg.contains("kg"), "{msg}");
    assert!(msg.contains('L') && msg.contains('M'), "{msg}");
}

#[test]
fn round_trips_are_stable() {
    for (x, a, b) in [
        (3.657, "gal", "l"),
        (129.5674, "in²", "mm²"),
        (50.34, "inHg", "psi"),
        (1.75, "kg/m³", "lb/ft³"),
    ] {
        let there = convert(x, a, b).unwrap();
        let back = convert(there, b, a).unwrap();
        assert!(
            (back - x).abs() <= 4.0 * f64::EPSILON * x.abs(),
            "{a}→{b}: {x} came back as {back}"
        );
    }
}

#[test]
fn prefix_law_is_exact() {
    for (prefixed, bare, factor) in [
        ("km", "m", "1000"),
        ("mg", "g", "0.001"),
        ("daL", "L", "10"),
        ("µs", "s", "0.000001"),
        ("GW", "W", "1000000000"),
    ] {
        let exact = convert_exact(1, prefixed, bare).unwrap();
        assert_eq!(exact, Number::from_str(factor).unwrap(), "{prefixed}");
    }
}

#[test]
fn exponent_law() {
    // dimensionless u: uⁿ stays convertible to u
    close_to(convert(1, "rad²", "rad").unwrap(), 1.0, 9);
    // non-dimensionless u: uⁿ for n ≠ 1 changes the vector
    assert!(convert(1, "m²", "m").is_err());
    close_to(convert(1, "m^1", "m").unwrap(), 1.0, 9);
}

#[test]
fn affine_compositions_are_self_inverse() {
    for (x, a, b) in [(-40.0, "°C", "°F"), (373.15, "K", "°C"), (0.0, "°R", "K")] {
        let there = convert(x, a, b).unwrap();
        let back = convert(there, b, a).unwrap();
        close_to(back, x, 9);
    }
    // -40 is the °C/°F fixed point
    close_to(convert(-40, "°C", "°F").unwrap(), -40.0, 9);
}

#[test]
fn rankine_is_proportional_to_kelvin() {
    close_to(convert(100, "K", "°R").unwrap(), 180.0, 9);
    close_to(convert(0, "K", "°R").unwrap(), 0.0, 9);
}

#[test]
fn whitespace_and_dot_are_interchangeable() {
    for spelling in ["N·m", "N m", "N * m"] {
        let u = Unit::parse(spelling).unwrap();
        assert_eq!(u.dimension, Unit::parse("J").unwrap().dimension, "{spelling}");
    }
}

#[test]
fn column_pressures_compose_from_length_times_column() {
    close_to(convert(1.0, "mH₂O", "Pa").unwrap(), 9806.65, 6);
    close_to(convert(760.0, "mmHg", "atm").unwrap(), 1.0000001, 6);
    close_to(convert(1.0, "mO₂", "Pa").unwrap(), 11189.4, 6);
}

#[test]
fn measurement_arithmetic_converts_operands() {
    let total = (1.0 * units::km()).add(&(250.0 * units::m())).unwrap();
    assert_eq!(total.unit.symbol, "km");
    close_to(total.to_f64().unwrap(), 1.25, 9);

    let err = (1.0 * units::km()).add(&(1.0 * units::s())).unwrap_err();
    assert!(matches!(err, UnitError::Incompatible { .. }));
}

#[test]
fn pending_conversion_applies_on_multiply() {
    let pending = (units::mi() / units::km()).as_conversion().unwrap().clone();
    close_to(3.0 * pending, 4.828032, 9);
}

#[test]
fn data_units_share_the_zero_vector() {
    close_to(convert(1, "KiB", "B").unwrap(), 1024.0, 9);
    close_to(convert(8, "bit", "B").unwrap(), 1.0, 9);
}
