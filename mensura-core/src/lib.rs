//! Mensura Core - exact decimal arithmetic
//!
//! Provides the `Number` type the unit engine composes conversion
//! factors with. All intermediate arithmetic is arbitrary-precision
//! decimal; callers convert to f64 only when a value leaves the engine.

mod number;

pub use number::{Number, NumberError};
