//! Convenience accessors over the global registry
//!
//! `units::km() / units::h()` style entry points for the common
//! catalog, plus `get`/`parse` for everything else. Accessors return
//! fresh clones; the registry itself is never mutated after load.

use crate::unit::Unit;
use crate::UnitError;

/// Lookup a single symbol or alias, trying prefixes on a miss.
pub fn get(symbol: &str) -> Result<Unit, UnitError> {
    Unit::parse(symbol)
}

/// Parse a full unit expression. Alias for `Unit::parse`.
pub fn parse(expr: &str) -> Result<Unit, UnitError> {
    Unit::parse(expr)
}

// Catalog symbols below are fixed at compile time; a failure here is
// a broken catalog and panics on first use.
fn fetch(symbol: &str) -> Unit {
    Unit::parse(symbol).unwrap_or_else(|e| panic!("catalog accessor '{symbol}': {e}"))
}

pub fn m() -> Unit { fetch("m") }
pub fn km() -> Unit { fetch("km") }
pub fn cm() -> Unit { fetch("cm") }
pub fn mm() -> Unit { fetch("mm") }
pub fn inch() -> Unit { fetch("in") }
pub fn ft() -> Unit { fetch("ft") }
pub fn yd() -> Unit { fetch("yd") }
pub fn mi() -> Unit { fetch("mi") }
pub fn nmi() -> Unit { fetch("nmi") }

pub fn kg() -> Unit { fetch("kg") }
pub fn g() -> Unit { fetch("g") }
pub fn mg() -> Unit { fetch("mg") }
pub fn t() -> Unit { fetch("t") }
pub fn lb() -> Unit { fetch("lb") }
pub fn oz() -> Unit { fetch("oz") }

pub fn s() -> Unit { fetch("s") }
pub fn ms() -> Unit { fetch("ms") }
pub fn min() -> Unit { fetch("min") }
pub fn h() -> Unit { fetch("h") }
pub fn d() -> Unit { fetch("d") }

pub fn kelvin() -> Unit { fetch("K") }
pub fn celsius() -> Unit { fetch("°C") }
pub fn fahrenheit() -> Unit { fetch("°F") }
pub fn rankine() -> Unit { fetch("°R") }

pub fn liter() -> Unit { fetch("L") }
pub fn ml() -> Unit { fetch("mL") }
pub fn gal() -> Unit { fetch("gal") }

pub fn newton() -> Unit { fetch("N") }
pub fn pascal() -> Unit { fetch("Pa") }
pub fn joule() -> Unit { fetch("J") }
pub fn watt() -> Unit { fetch("W") }
pub fn bar() -> Unit { fetch("bar") }
pub fn atm() -> Unit { fetch("atm") }
pub fn psi() -> Unit { fetch("psi") }
