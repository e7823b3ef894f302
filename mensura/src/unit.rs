//! Unit representation and algebra
//!
//! A `Unit` is an unvalued symbol with an exact SI factor and a
//! dimension signature. The three modes the engine distinguishes are
//! separate types: `Unit` (pure symbol), `Measurement` (value bound to
//! a unit) and `Conversion` (a from→to pair awaiting a scalar).
//! `Unit / Unit` returns the `UnitExpr` sum of the last two unvalued
//! outcomes.

use crate::measure::{Conversion, Measurement};
use crate::parse::superscript;
use crate::{Dimension, UnitError};
use mensura_core::Number;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Div, Mul};

/// Which registry map a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitKind {
    /// One of the seven SI reference units: factor 1, basis vector
    Base,
    /// Factor 1, compound dimension (newton, pascal, watt, ...)
    NamedDerived,
    /// Arbitrary factor over some compound (mile, psi, poise, ...)
    Other,
}

/// A physical unit: symbol, exact factor to base SI, affine offset
/// (temperatures only) and dimension signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Symbol, possibly carrying a user-applied exponent ("m³")
    pub symbol: String,
    /// Spelled-out name ("meter", "pound-force")
    pub name: String,
    pub kind: UnitKind,
    /// Signature with any user exponent already folded in
    pub dimension: Dimension,
    /// Factor to base SI, exponent folded in
    pub factor: Number,
    /// Affine offset; nonzero only for °C and °F at exponent 1
    pub offset: Number,
    /// User-applied exponent, 1 on a fresh unit
    pub exponent: i32,
}

impl Unit {
    /// Proportional unit (no offset).
    pub fn new(symbol: &str, name: &str, kind: UnitKind, dimension: Dimension, factor: Number) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            kind,
            dimension,
            factor,
            offset: Number::zero(),
            exponent: 1,
        }
    }

    /// Affine unit: base = value·factor + offset. Temperatures only.
    pub fn with_offset(
        symbol: &str,
        name: &str,
        dimension: Dimension,
        factor: Number,
        offset: Number,
    ) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            kind: UnitKind::Other,
            dimension,
            factor,
            offset,
            exponent: 1,
        }
    }

    /// Parse a full unit expression; the grammar of the parser module.
    pub fn parse(expr: &str) -> Result<Self, UnitError> {
        crate::parse::parse_unit(expr)
    }

    pub fn is_affine(&self) -> bool {
        !self.offset.is_zero()
    }

    /// Lone temperature symbol at exponent 1 (the affine-eligible shape)
    pub fn is_temperature(&self) -> bool {
        self.dimension == Dimension::TEMPERATURE && self.exponent == 1
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }

    /// Dimensional compatibility: equal base vectors.
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Fresh copy with the factor multiplied by `scale`.
    pub fn scaled(&self, scale: Number) -> Unit {
        let mut u = self.clone();
        u.factor = u.factor.mul(&scale);
        u.offset = Number::zero();
        u
    }

    /// Fresh copy raised to an integer power. The offset does not
    /// survive: °C² behaves as K² (the Celsius factor is 1).
    pub fn pow(&self, exp: i32) -> Unit {
        if exp == 1 {
            return self.clone();
        }
        let total = self.exponent * exp;
        let symbol = if total == 1 {
            strip_superscript(&self.symbol)
        } else {
            format!("{}{}", strip_superscript(&self.symbol), superscript(total))
        };
        Unit {
            symbol,
            name: self.name.clone(),
            kind: self.kind,
            dimension: self.dimension.power(exp),
            factor: self.factor.pow(exp),
            offset: Number::zero(),
            exponent: total,
        }
    }

    /// Bind a value: the `call(value)` of the engine. A measurement in
    /// this unit, affine offset honored when read back out.
    pub fn measure(&self, value: impl Into<Number>) -> Measurement {
        Measurement::new(value.into(), self.clone())
    }

    /// Value in this unit → value in base SI.
    pub fn to_base(&self, value: &Number) -> Number {
        value.mul(&self.factor).add(&self.offset)
    }

    /// Value in base SI → value in this unit.
    pub fn from_base(&self, base: &Number) -> Result<Number, UnitError> {
        let shifted = base.sub(&self.offset);
        Ok(shifted.checked_div(&self.factor)?)
    }

    /// Exact conversion of a value into `target`. Fails on unequal
    /// vectors; the affine path is handled by the factor+offset math.
    pub fn convert_value(&self, value: &Number, target: &Unit) -> Result<Number, UnitError> {
        if !self.is_compatible(target) {
            return Err(UnitError::Incompatible {
                from: self.symbol.clone(),
                to: target.symbol.clone(),
                from_dim: self.dimension,
                to_dim: target.dimension,
            });
        }
        let base = self.to_base(value);
        target.from_base(&base)
    }
}

/// Remove a trailing superscript run so re-exponentiation does not
/// stack suffixes ("m³" squared is "m⁶", not "m³⁶").
fn strip_superscript(symbol: &str) -> String {
    symbol
        .trim_end_matches(['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹', '⁻'])
        .to_string()
}

/// Outcome of dividing two unvalued units: a pending conversion when
/// the vectors match, otherwise a compound unit `a/b`.
#[derive(Debug, Clone)]
pub enum UnitExpr {
    Unit(Unit),
    Conversion(Conversion),
}

impl UnitExpr {
    pub fn as_unit(&self) -> Option<&Unit> {
        match self {
            UnitExpr::Unit(u) => Some(u),
            UnitExpr::Conversion(_) => None,
        }
    }

    pub fn as_conversion(&self) -> Option<&Conversion> {
        match self {
            UnitExpr::Conversion(c) => Some(c),
            UnitExpr::Unit(_) => None,
        }
    }
}

impl Mul for Unit {
    type Output = Unit;

    /// Compound unit u·v; offsets are dropped.
    fn mul(self, rhs: Unit) -> Unit {
        Unit {
            symbol: format!("{}·{}", self.symbol, rhs.symbol),
            name: format!("{} {}", self.name, rhs.name),
            kind: UnitKind::Other,
            dimension: self.dimension.multiply(&rhs.dimension),
            factor: self.factor.mul(&rhs.factor),
            offset: Number::zero(),
            exponent: 1,
        }
    }
}

impl Div for Unit {
    type Output = UnitExpr;

    /// Equal vectors leave a pending conversion; unequal vectors make
    /// the compound unit u/v.
    fn div(self, rhs: Unit) -> UnitExpr {
        if self.dimension == rhs.dimension {
            return UnitExpr::Conversion(Conversion::new(self, rhs));
        }
        // rhs factor of zero cannot occur: the catalog has no zero factors
        let factor = self
            .factor
            .checked_div(&rhs.factor)
            .unwrap_or_else(|_| Number::zero());
        UnitExpr::Unit(Unit {
            symbol: format!("{}/{}", self.symbol, rhs.symbol),
            name: format!("{} per {}", self.name, rhs.name),
            kind: UnitKind::Other,
            dimension: self.dimension.divide(&rhs.dimension),
            factor,
            offset: Number::zero(),
            exponent: 1,
        })
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> Unit {
        Unit::new("m", "meter", UnitKind::Base, Dimension::LENGTH, Number::one())
    }

    fn kilometer() -> Unit {
        Unit::new("km", "kilometer", UnitKind::Other, Dimension::LENGTH, Number::from_i64(1000))
    }

    fn second() -> Unit {
        Unit::new("s", "second", UnitKind::Base, Dimension::TIME, Number::one())
    }

    #[test]
    fn compatibility() {
        assert!(meter().is_compatible(&kilometer()));
        assert!(!meter().is_compatible(&second()));
    }

    #[test]
    fn to_and_from_base() {
        let km = kilometer();
        let five = Number::from_i64(5);
        assert_eq!(km.to_base(&five), Number::from_i64(5000));
        assert_eq!(km.from_base(&Number::from_i64(5000)).unwrap(), five);
    }

    #[test]
    fn convert_value_checks_dimensions() {
        let m = meter();
        let converted = m.convert_value(&Number::from_i64(5000), &kilometer()).unwrap();
        assert_eq!(converted, Number::from_i64(5));

        let err = m.convert_value(&Number::one(), &second()).unwrap_err();
        assert!(matches!(err, UnitError::Incompatible { .. }));
    }

    #[test]
    fn pow_folds_exponent() {
        let m3 = meter().pow(3);
        assert_eq!(m3.symbol, "m³");
        assert_eq!(m3.dimension, Dimension::VOLUME);
        assert_eq!(m3.exponent, 3);

        let m6 = m3.pow(2);
        assert_eq!(m6.symbol, "m⁶");
        assert_eq!(m6.exponent, 6);
    }

    #[test]
    fn pow_drops_offset() {
        let celsius = Unit::with_offset(
            "°C",
            "celsius",
            Dimension::TEMPERATURE,
            Number::one(),
            Number::from_str("273.15").unwrap(),
        );
        assert!(celsius.is_affine());
        let squared = celsius.pow(2);
        assert!(!squared.is_affine());
    }

    #[test]
    fn mul_makes_compound() {
        let pa_s = meter() * second();
        assert_eq!(pa_s.symbol, "m·s");
        assert_eq!(
            pa_s.dimension,
            Dimension::LENGTH.multiply(&Dimension::TIME)
        );
    }

    #[test]
    fn div_same_dimension_is_pending_conversion() {
        let expr = kilometer() / meter();
        let conv = expr.as_conversion().expect("equal vectors pend");
        assert_eq!(conv.from.symbol, "km");
        assert_eq!(conv.to.symbol, "m");
    }

    #[test]
    fn div_unequal_dimension_is_compound() {
        let expr = meter() / second();
        let u = expr.as_unit().expect("unequal vectors compound");
        assert_eq!(u.symbol, "m/s");
        assert_eq!(u.dimension, Dimension::VELOCITY);
    }

    #[test]
    fn scaled_multiplies_factor() {
        let km = meter().scaled(Number::from_i64(1000));
        assert_eq!(km.factor, Number::from_i64(1000));
    }
}
