//! Measurements and pending conversions
//!
//! `Measurement` binds a value to a unit. `Conversion` is the typed
//! form of the "pending conversion" that dividing two same-dimension
//! units produces: it holds both sides and completes when a scalar is
//! multiplied in.

use crate::unit::{Unit, UnitExpr, UnitKind};
use crate::{Dimension, UnitError};
use mensura_core::Number;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Div, Mul};

/// A value bound to a unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    pub value: Number,
    pub unit: Unit,
}

impl Measurement {
    pub fn new(value: Number, unit: Unit) -> Self {
        Measurement { value, unit }
    }

    pub fn dimensionless(value: Number) -> Self {
        Measurement {
            value,
            unit: si_unit(Dimension::DIMENSIONLESS),
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension
    }

    pub fn is_dimensionless(&self) -> bool {
        self.unit.dimension.is_dimensionless()
    }

    pub fn is_compatible(&self, other: &Measurement) -> bool {
        self.unit.is_compatible(&other.unit)
    }

    /// Value reduced to base SI, affine offset honored.
    pub fn si_value(&self) -> Number {
        self.unit.to_base(&self.value)
    }

    /// The same measurement expressed in base SI units.
    pub fn to_si(&self) -> Measurement {
        Measurement {
            value: self.si_value(),
            unit: si_unit(self.unit.dimension),
        }
    }

    /// Re-express in `target`; vectors must match.
    pub fn convert_to(&self, target: &Unit) -> Result<Measurement, UnitError> {
        let value = self.unit.convert_value(&self.value, target)?;
        Ok(Measurement::new(value, target.clone()))
    }

    /// Sum, expressed in the left unit. Unequal vectors are an error.
    pub fn add(&self, other: &Measurement) -> Result<Measurement, UnitError> {
        let rhs = other.convert_to(&self.unit)?;
        Ok(Measurement::new(self.value.add(&rhs.value), self.unit.clone()))
    }

    /// Difference, expressed in the left unit.
    pub fn sub(&self, other: &Measurement) -> Result<Measurement, UnitError> {
        let rhs = other.convert_to(&self.unit)?;
        Ok(Measurement::new(self.value.sub(&rhs.value), self.unit.clone()))
    }

    /// Integer power.
    pub fn pow(&self, exp: i32) -> Measurement {
        Measurement::new(self.value.pow(exp), self.unit.pow(exp))
    }

    /// Boundary read-out.
    pub fn to_f64(&self) -> Option<f64> {
        self.value.to_f64()
    }
}

/// Anonymous base-SI unit for a dimension; symbol is the signature.
fn si_unit(dimension: Dimension) -> Unit {
    let symbol = if dimension.is_dimensionless() {
        String::new()
    } else {
        format!("{}", dimension)
    };
    let name = dimension
        .name()
        .map(str::to_string)
        .unwrap_or_else(|| symbol.clone());
    Unit::new(&symbol, &name, UnitKind::Other, dimension, Number::one())
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.symbol.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit.symbol)
        }
    }
}

impl PartialEq for Measurement {
    fn eq(&self, other: &Self) -> bool {
        self.is_compatible(other) && self.si_value() == other.si_value()
    }
}

/// A pending conversion: both sides of `u / v` with equal vectors.
/// It is inert until a value arrives via `apply` or scalar `*`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversion {
    pub from: Unit,
    pub to: Unit,
}

impl Conversion {
    /// Built by `Unit / Unit` once vector equality is established.
    pub(crate) fn new(from: Unit, to: Unit) -> Self {
        Conversion { from, to }
    }

    /// Complete the conversion for a value given in `from` units.
    /// Runs through base SI, so the affine temperature pairs work too.
    pub fn apply(&self, value: impl Into<Number>) -> Result<Number, UnitError> {
        let base = self.from.to_base(&value.into());
        self.to.from_base(&base)
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}→{}", self.from.symbol, self.to.symbol)
    }
}

// ---- scalar entry points ----

impl Mul<Unit> for f64 {
    type Output = Measurement;

    /// `60.0 * units::mi()` is a measurement of 60 miles.
    fn mul(self, unit: Unit) -> Measurement {
        Measurement::new(Number::from_f64(self), unit)
    }
}

impl Mul<Conversion> for f64 {
    type Output = f64;

    /// A scalar completes a pending conversion.
    fn mul(self, conv: Conversion) -> f64 {
        conv.apply(self)
            .ok()
            .and_then(|n| n.to_f64())
            .unwrap_or(f64::NAN)
    }
}

impl Mul<UnitExpr> for f64 {
    type Output = Measurement;

    fn mul(self, expr: UnitExpr) -> Measurement {
        match expr {
            UnitExpr::Unit(u) => self * u,
            UnitExpr::Conversion(c) => {
                let value = c
                    .apply(self)
                    .unwrap_or_else(|_| Number::from_f64(f64::NAN));
                Measurement::dimensionless(value)
            }
        }
    }
}

impl Mul<Measurement> for f64 {
    type Output = Measurement;

    fn mul(self, m: Measurement) -> Measurement {
        Measurement::new(Number::from_f64(self).mul(&m.value), m.unit)
    }
}

impl Mul<f64> for Measurement {
    type Output = Measurement;

    fn mul(self, scale: f64) -> Measurement {
        Measurement::new(self.value.mul(&Number::from_f64(scale)), self.unit)
    }
}

// ---- measurement algebra: values combine in base SI ----

impl Mul for Measurement {
    type Output = Measurement;

    fn mul(self, rhs: Measurement) -> Measurement {
        let dimension = self.unit.dimension.multiply(&rhs.unit.dimension);
        Measurement::new(self.si_value().mul(&rhs.si_value()), si_unit(dimension))
    }
}

/// Quotient in SI base units. A zero divisor surfaces as an error
/// rather than a silent zero.
impl Div for Measurement {
    type Output = Result<Measurement, UnitError>;

    fn div(self, rhs: Measurement) -> Self::Output {
        let dimension = self.unit.dimension.divide(&rhs.unit.dimension);
        let value = self.si_value().checked_div(&rhs.si_value())?;
        Ok(Measurement::new(value, si_unit(dimension)))
    }
}

impl Mul<Unit> for Measurement {
    type Output = Measurement;

    fn mul(self, rhs: Unit) -> Measurement {
        let dimension = self.unit.dimension.multiply(&rhs.dimension);
        Measurement::new(self.si_value().mul(&rhs.factor), si_unit(dimension))
    }
}

impl Div<Unit> for Measurement {
    type Output = Measurement;

    /// Dividing a measurement by a same-dimension unit re-expresses it
    /// as a dimensionless ratio; unequal dimensions compound.
    fn div(self, rhs: Unit) -> Measurement {
        let dimension = self.unit.dimension.divide(&rhs.dimension);
        let value = self
            .si_value()
            .checked_div(&rhs.factor)
            .unwrap_or_else(|_| Number::zero());
        Measurement::new(value, si_unit(dimension))
    }
}

impl Div<UnitExpr> for Measurement {
    type Output = Measurement;

    fn div(self, rhs: UnitExpr) -> Measurement {
        match rhs {
            UnitExpr::Unit(u) => self / u,
            UnitExpr::Conversion(c) => {
                // A conversion pair acts as its dimensionless ratio
                let ratio = c
                    .from
                    .factor
                    .checked_div(&c.to.factor)
                    .unwrap_or_else(|_| Number::one());
                let value = self
                    .value
                    .checked_div(&ratio)
                    .unwrap_or_else(|_| Number::zero());
                Measurement::new(value, self.unit)
            }
        }
    }
}

impl Mul<UnitExpr> for Measurement {
    type Output = Measurement;

    fn mul(self, rhs: UnitExpr) -> Measurement {
        match rhs {
            UnitExpr::Unit(u) => self * u,
            UnitExpr::Conversion(c) => {
                let ratio = c
                    .from
                    .factor
                    .checked_div(&c.to.factor)
                    .unwrap_or_else(|_| Number::one());
                Measurement::new(self.value.mul(&ratio), self.unit)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::UnitKind;

    fn meter() -> Unit {
        Unit::new("m", "meter", UnitKind::Base, Dimension::LENGTH, Number::one())
    }

    fn kilometer() -> Unit {
        Unit::new("km", "kilometer", UnitKind::Other, Dimension::LENGTH, Number::from_i64(1000))
    }

    fn second() -> Unit {
        Unit::new("s", "second", UnitKind::Base, Dimension::TIME, Number::one())
    }

    fn hour() -> Unit {
        Unit::new("h", "hour", UnitKind::Other, Dimension::TIME, Number::from_i64(3600))
    }

    fn mile() -> Unit {
        Unit::new(
            "mi",
            "mile",
            UnitKind::Other,
            Dimension::LENGTH,
            Number::from_str("1609.344").unwrap(),
        )
    }

    #[test]
    fn scalar_times_unit_is_measurement() {
        let m = 5.0 * meter();
        assert_eq!(m.value, Number::from_i64(5));
        assert_eq!(m.unit.symbol, "m");
    }

    #[test]
    fn pending_conversion_completes_on_scalar() {
        let expr = kilometer() / meter();
        let conv = expr.as_conversion().unwrap().clone();
        let out = 5.0 * conv;
        assert!((out - 5000.0).abs() < 1e-9);
    }

    #[test]
    fn si_value_and_to_si() {
        let m = 2.0 * kilometer();
        assert_eq!(m.si_value(), Number::from_i64(2000));
        let si = m.to_si();
        assert_eq!(si.unit.symbol, "L");
        assert_eq!(si.value, Number::from_i64(2000));
    }

    #[test]
    fn add_converts_to_left_unit() {
        let a = 1.0 * kilometer();
        let b = 500.0 * meter();
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.unit.symbol, "km");
        assert_eq!(sum.value, Number::from_str("1.5").unwrap());

        let t = 1.0 * second();
        assert!(a.add(&t).is_err());
    }

    #[test]
    fn measurement_product_combines_in_base() {
        let l = 5.0 * meter();
        let w = 3.0 * meter();
        let area = l * w;
        assert_eq!(area.dimension(), Dimension::AREA);
        assert_eq!(area.value, Number::from_i64(15));
    }

    #[test]
    fn speed_ratio_is_dimensionless() {
        // 60 mi/h expressed in km/h: the compound algebra of the engine
        let mph = (mile() / hour()).as_unit().unwrap().clone();
        let kph = (kilometer() / hour()).as_unit().unwrap().clone();
        let out = (60.0 * mph) / kph;
        assert!(out.is_dimensionless());
        let v = out.to_f64().unwrap();
        assert!((v - 96.56064).abs() < 1e-9);
    }

    #[test]
    fn measurement_quotient_checks_divisor() {
        let speed = ((100.0 * meter()) / (10.0 * second())).unwrap();
        assert_eq!(speed.dimension(), Dimension::VELOCITY);
        assert_eq!(speed.value, Number::from_i64(10));

        let zero = (100.0 * meter()) / (0.0 * second());
        assert!(zero.is_err());
    }

    #[test]
    fn measurement_equality_across_units() {
        let a = 1.0 * kilometer();
        let b = 1000.0 * meter();
        assert_eq!(a, b);
    }

    #[test]
    fn pow_scales_value_and_unit() {
        let m = 5.0 * meter();
        let vol = m.pow(3);
        assert_eq!(vol.dimension(), Dimension::VOLUME);
        assert_eq!(vol.value, Number::from_i64(125));
    }
}
