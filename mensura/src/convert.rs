//! One-shot conversion drivers
//!
//! The exact pipeline stays in `Number` the whole way: value·factor
//! (+offset) into base SI, then back out through the target's factor.
//! `f64` appears only at the final read-out.

use crate::measure::Measurement;
use crate::unit::Unit;
use crate::UnitError;
use mensura_core::{Number, NumberError};

/// Convert `value` between two unit expressions and read out as f64.
/// The value may be an integer, a float, an exact `Number`, or a
/// decimal string; a bad string surfaces as a numeric error.
pub fn convert<V>(value: V, from: &str, to: &str) -> Result<f64, UnitError>
where
    V: TryInto<Number>,
    NumberError: From<V::Error>,
{
    let exact = convert_exact(value, from, to)?;
    exact
        .to_f64()
        .ok_or_else(|| UnitError::Unsupported("result exceeds f64 range".into()))
}

/// Same pipeline without the f64 boundary; the result keeps the full
/// working precision.
pub fn convert_exact<V>(value: V, from: &str, to: &str) -> Result<Number, UnitError>
where
    V: TryInto<Number>,
    NumberError: From<V::Error>,
{
    let from = Unit::parse(from)?;
    let to = Unit::parse(to)?;
    let value: Number = value.try_into().map_err(NumberError::from)?;
    let result = from.convert_value(&value, &to)?;
    tracing::debug!(
        from = %from, to = %to, value = %value, result = %result,
        "converted"
    );
    Ok(result)
}

/// Temperature-only conversion; rejects both non-temperature inputs
/// and compound expressions that merely contain a temperature.
pub fn temperature_conversion<V>(value: V, from: &str, to: &str) -> Result<f64, UnitError>
where
    V: TryInto<Number>,
    NumberError: From<V::Error>,
{
    let from_unit = Unit::parse(from)?;
    let to_unit = Unit::parse(to)?;
    if !from_unit.is_temperature() || !to_unit.is_temperature() {
        return Err(UnitError::Unsupported(format!(
            "temperature conversion expects temperature units, got {from_unit} and {to_unit}"
        )));
    }
    let value: Number = value.try_into().map_err(NumberError::from)?;
    let result = from_unit.convert_value(&value, &to_unit)?;
    result
        .to_f64()
        .ok_or_else(|| UnitError::Unsupported("result exceeds f64 range".into()))
}

/// Reduce a measurement of `expr` to base SI.
pub fn to_base<V>(value: V, expr: &str) -> Result<Measurement, UnitError>
where
    V: TryInto<Number>,
    NumberError: From<V::Error>,
{
    let unit = Unit::parse(expr)?;
    let value: Number = value.try_into().map_err(NumberError::from)?;
    Ok(unit.measure(value).to_si())
}
