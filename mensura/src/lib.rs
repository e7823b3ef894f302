//! Dimensional unit conversion over exact decimal arithmetic.
//!
//! Every unit reduces to a 7-element base-SI dimension vector and an
//! exact factor (plus an offset for °C/°F). Conversion multiplies
//! through base SI in arbitrary-precision decimals; `f64` appears only
//! at the boundary.
//!
//! ```no_run
//! use mensura::{convert, units, Unit};
//!
//! // one-shot driver over free-form expressions
//! let psi = convert(24.0, "inHg", "psi").unwrap();
//!
//! // unit algebra: value * unit binds, unit / unit of equal
//! // dimension pends a conversion, and value * pending applies it
//! let speed = 60.0 * (units::mi() / units::h());
//! let kph = 60.0 * (units::mi() / units::km()).as_conversion().unwrap().clone();
//!
//! // free-form parsing: superscripts, ^N, **N, sq/cu, sqrt(), columns
//! let flow = Unit::parse("mmH₂O").unwrap();
//! # let _ = (psi, speed, kph, flow);
//! ```

mod catalog;
mod convert;
mod dimension;
mod error;
mod measure;
mod parse;
mod prefix;
mod quantity;
mod registry;
mod unit;
pub mod units;

pub use convert::{convert, convert_exact, temperature_conversion, to_base};
pub use dimension::Dimension;
pub use error::UnitError;
pub use measure::{Conversion, Measurement};
pub use parse::parse_unit;
pub use prefix::{Prefix, PREFIXES};
pub use quantity::{all as quantities, find as find_quantity, for_dimension, Quantity};
pub use registry::{registry, UnitRegistry};
pub use unit::{Unit, UnitExpr, UnitKind};

pub use mensura_core::{Number, NumberError};
