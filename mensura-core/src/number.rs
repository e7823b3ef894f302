//! Arbitrary precision decimals using dashu
//!
//! Conversion factors are composed exactly; rounding to f64 happens
//! only at the public boundary. dashu-float's DBig carries the value
//! as significand * 10^exponent, which keeps catalog factors such as
//! 0.45359237 or 1609.344 exact through long products.

use dashu_float::ops::{Abs, SquareRoot};
use dashu_float::DBig;
use dashu_int::ops::BitTest;
use dashu_int::IBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Domain error: {0}")]
    DomainError(String),
}

/// Working precision for factor composition (decimal digits).
/// The engine promises at least 20 significant figures internally;
/// 50 leaves generous headroom for chained products.
const WORK_PRECISION: usize = 50;

/// Exact decimal number with 50-digit working precision.
///
/// Operations never panic; fallible ones return `Result`.
#[derive(Debug, Clone)]
pub struct Number {
    inner: DBig,
}

impl Number {
    fn with_work_precision(val: DBig) -> DBig {
        val.with_precision(WORK_PRECISION).value()
    }

    /// Parse from a decimal string.
    /// Accepts "123", "3.14", "-0.5", "1/3" (exact ratio) and
    /// integer-mantissa scientific notation like "1602176634e-28".
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        let s = s.trim();

        // Rational form "a/b" is divided at working precision
        if s.contains('/') && !s.contains('.') && !s.contains(['e', 'E']) {
            if let Some((num_str, den_str)) = s.split_once('/') {
                let num: DBig = num_str
                    .trim()
                    .parse()
                    .map_err(|_| NumberError::ParseError(s.to_string()))?;
                let den: DBig = den_str
                    .trim()
                    .parse()
                    .map_err(|_| NumberError::ParseError(s.to_string()))?;
                if den == DBig::ZERO {
                    return Err(NumberError::DivisionByZero);
                }
                let quot = Self::with_work_precision(num) / Self::with_work_precision(den);
                return Ok(Self { inner: quot });
            }
        }

        // Integer-mantissa scientific notation stays exact
        if s.contains(['e', 'E']) && !s.contains('.') {
            let lower = s.to_lowercase();
            if let Some((mantissa_str, exp_str)) = lower.split_once('e') {
                let mantissa: IBig = mantissa_str
                    .parse()
                    .map_err(|_| NumberError::ParseError(s.to_string()))?;
                let exp: i32 = exp_str
                    .parse()
                    .map_err(|_| NumberError::ParseError(s.to_string()))?;
                let val = DBig::from_parts(mantissa, exp as isize);
                return Ok(Self {
                    inner: Self::with_work_precision(val),
                });
            }
        }

        let inner: DBig = s
            .parse()
            .map_err(|_| NumberError::ParseError(s.to_string()))?;
        Ok(Self {
            inner: Self::with_work_precision(inner),
        })
    }

    pub fn from_i64(n: i64) -> Self {
        Self {
            inner: Self::with_work_precision(DBig::from(n)),
        }
    }

    /// Exact ratio of two integers, divided at working precision.
    pub fn from_ratio(num: i64, den: i64) -> Self {
        if den == 0 {
            return Self { inner: DBig::ZERO };
        }
        let n = Self::with_work_precision(DBig::from(num));
        let d = Self::with_work_precision(DBig::from(den));
        Self { inner: n / d }
    }

    /// From f64 via its shortest decimal rendering. NaN and infinity
    /// collapse to zero; callers validate floats before crossing in.
    pub fn from_f64(f: f64) -> Self {
        if f.is_nan() || f.is_infinite() {
            return Self { inner: DBig::ZERO };
        }
        let s = format!("{}", f);
        Self::from_str(&s).unwrap_or(Self { inner: DBig::ZERO })
    }

    pub fn zero() -> Self {
        Self { inner: DBig::ZERO }
    }

    pub fn one() -> Self {
        Self::from_i64(1)
    }

    pub fn is_zero(&self) -> bool {
        self.inner == DBig::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.inner < DBig::ZERO
    }

    pub fn is_integer(&self) -> bool {
        self.inner == self.inner.clone().floor()
    }

    pub fn add(&self, other: &Self) -> Self {
        Self {
            inner: &self.inner + &other.inner,
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self {
            inner: &self.inner - &other.inner,
        }
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self {
            inner: &self.inner * &other.inner,
        }
    }

    pub fn neg(&self) -> Self {
        Self {
            inner: -self.inner.clone(),
        }
    }

    /// Division; zero divisor is an error, never a panic.
    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self {
                inner: &self.inner / &other.inner,
            })
        }
    }

    /// Integer power by repeated multiplication. Catalog exponents
    /// never exceed single digits, so no square-and-multiply needed.
    pub fn pow(&self, exp: i32) -> Self {
        if exp == 0 {
            return Self::one();
        }
        let mut result = Self::one();
        for _ in 0..exp.unsigned_abs() {
            result = result.mul(self);
        }
        if exp < 0 {
            Self::one().checked_div(&result).unwrap_or(Self::zero())
        } else {
            result
        }
    }

    /// Square root at working precision; negative input is a domain error.
    pub fn sqrt(&self) -> Result<Self, NumberError> {
        if self.is_negative() {
            return Err(NumberError::DomainError(
                "square root of negative number".to_string(),
            ));
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }
        let val = self.inner.clone().with_precision(WORK_PRECISION).value();
        Ok(Self { inner: val.sqrt() })
    }

    pub fn abs(&self) -> Self {
        Self {
            inner: Abs::abs(self.inner.clone()),
        }
    }

    /// Try exact conversion to i64 (integers only).
    pub fn to_i64(&self) -> Option<i64> {
        if !self.is_integer() {
            return None;
        }
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        let sig: i64 = significand.try_into().ok()?;
        if exponent == 0 {
            Some(sig)
        } else if exponent > 0 && exponent <= 18 {
            sig.checked_mul(10_i64.checked_pow(exponent as u32)?)
        } else if exponent < 0 && exponent >= -18 {
            let divisor = 10_i64.checked_pow((-exponent) as u32)?;
            if sig % divisor == 0 {
                Some(sig / divisor)
            } else {
                None
            }
        } else {
            None
        }
    }

    /// Lossy conversion to f64 for the public boundary.
    pub fn to_f64(&self) -> Option<f64> {
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();

        let sig_f64: f64 = if significand.bit_len() <= 53 {
            match TryInto::<i64>::try_into(significand.clone()) {
                Ok(i) => i as f64,
                Err(_) => return None,
            }
        } else {
            // Shift down to 53 bits, re-apply the shifted-out scale
            let extra_bits = significand.bit_len() - 53;
            let shifted = &significand >> extra_bits;
            let shifted_i64: i64 = shifted.try_into().ok()?;
            (shifted_i64 as f64) * 2_f64.powi(extra_bits as i32)
        };

        let result = if exponent == 0 {
            sig_f64
        } else if exponent > 0 && exponent <= 308 {
            sig_f64 * 10_f64.powi(exponent as i32)
        } else if exponent < 0 && exponent >= -308 {
            sig_f64 / 10_f64.powi((-exponent) as i32)
        } else {
            return None;
        };

        result.is_finite().then_some(result)
    }

    /// Decimal rendering with a fixed number of places.
    pub fn as_decimal(&self, places: u32) -> String {
        match self.to_f64() {
            Some(f) => format!("{:.prec$}", f, prec = places as usize),
            None => format!("{}", self.inner),
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::from_i64(n as i64)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Self::from_f64(f)
    }
}

/// Strings are fallible: a bad literal surfaces as a parse error
/// instead of coercing silently.
impl TryFrom<&str> for Number {
    type Error = NumberError;

    fn try_from(s: &str) -> Result<Self, NumberError> {
        Self::from_str(s)
    }
}

// Lets generic callers bound on `TryInto<Number>` accept the
// infallible `From` conversions above alongside `&str`.
impl From<std::convert::Infallible> for NumberError {
    fn from(x: std::convert::Infallible) -> Self {
        match x {}
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner
            .partial_cmp(&other.inner)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}
