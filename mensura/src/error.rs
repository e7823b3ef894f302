//! Error surface of the unit engine

use crate::Dimension;
use mensura_core::NumberError;
use thiserror::Error;

/// Errors surfaced by parsing, arithmetic and conversion.
///
/// Registration collisions are not represented here: the catalog is
/// static, so a duplicate symbol is a programmer error and panics
/// while the registry loads.
#[derive(Debug, Clone, Error)]
pub enum UnitError {
    /// The expression did not parse: unknown symbol (after prefix
    /// stripping), unbalanced grouping, non-integer exponent, stray
    /// operator.
    #[error("malformed unit '{symbol}': {reason}")]
    Malformed { symbol: String, reason: String },

    /// The two sides reduce to different base-dimension vectors.
    #[error("cannot convert {from} ({from_dim}) to {to} ({to_dim}): incompatible dimensions")]
    Incompatible {
        from: String,
        to: String,
        from_dim: Dimension,
        to_dim: Dimension,
    },

    /// Arithmetic that has no defined meaning, e.g. adding
    /// measurements of unrelated dimensions.
    #[error("operation not supported: {0}")]
    Unsupported(String),

    #[error("numeric error: {0}")]
    Number(#[from] NumberError),
}

impl UnitError {
    pub(crate) fn malformed(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        UnitError::Malformed {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }
}
