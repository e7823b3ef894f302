//! SI prefix ladder and on-the-fly prefix resolution
//!
//! Prefix resolution runs only after a direct registry lookup misses,
//! so registered symbols like "min" or "Pa" always win over a prefix
//! reading (m + in, P + a). Synthesized units are never stored back
//! into the registry.

use crate::registry::UnitRegistry;
use crate::unit::{Unit, UnitKind};
use mensura_core::Number;

/// One SI prefix: symbol, spelled-out name, exact decimal factor.
#[derive(Debug, Clone, Copy)]
pub struct Prefix {
    pub symbol: &'static str,
    pub name: &'static str,
    factor: &'static str,
}

impl Prefix {
    pub fn factor(&self) -> Number {
        // The table below holds only valid integer-mantissa literals
        Number::from_str(self.factor).expect("prefix factor literal")
    }
}

/// The full ladder. "da" leads so the two-character prefix is tried
/// before "d"; the rest are single characters in descending magnitude.
pub const PREFIXES: [Prefix; 20] = [
    Prefix { symbol: "da", name: "deka", factor: "1e1" },
    Prefix { symbol: "Y", name: "yotta", factor: "1e24" },
    Prefix { symbol: "Z", name: "zetta", factor: "1e21" },
    Prefix { symbol: "E", name: "exa", factor: "1e18" },
    Prefix { symbol: "P", name: "peta", factor: "1e15" },
    Prefix { symbol: "T", name: "tera", factor: "1e12" },
    Prefix { symbol: "G", name: "giga", factor: "1e9" },
    Prefix { symbol: "M", name: "mega", factor: "1e6" },
    Prefix { symbol: "k", name: "kilo", factor: "1e3" },
    Prefix { symbol: "h", name: "hecto", factor: "1e2" },
    Prefix { symbol: "d", name: "deci", factor: "1e-1" },
    Prefix { symbol: "c", name: "centi", factor: "1e-2" },
    Prefix { symbol: "m", name: "milli", factor: "1e-3" },
    Prefix { symbol: "µ", name: "micro", factor: "1e-6" },
    Prefix { symbol: "n", name: "nano", factor: "1e-9" },
    Prefix { symbol: "p", name: "pico", factor: "1e-12" },
    Prefix { symbol: "f", name: "femto", factor: "1e-15" },
    Prefix { symbol: "a", name: "atto", factor: "1e-18" },
    Prefix { symbol: "z", name: "zepto", factor: "1e-21" },
    Prefix { symbol: "y", name: "yocto", factor: "1e-24" },
];

/// Try to read `symbol` as prefix + registered unit. The Greek mu
/// (μ, U+03BC) is accepted as a spelling of the micro sign (µ, U+00B5).
pub fn resolve(symbol: &str, registry: &UnitRegistry) -> Option<Unit> {
    let normalized = symbol.replace('μ', "µ");

    for prefix in &PREFIXES {
        let Some(rest) = normalized.strip_prefix(prefix.symbol) else {
            continue;
        };
        if rest.is_empty() {
            continue;
        }
        let Some(base) = registry.get(rest) else {
            continue;
        };
        // Affine units do not scale: "m°C" has no coherent meaning,
        // so °C and °F never take a prefix.
        if base.is_affine() {
            continue;
        }
        tracing::trace!(symbol, prefix = prefix.symbol, unit = rest, "prefix resolved");

        let mut unit = base.scaled(prefix.factor());
        unit.symbol = symbol.to_string();
        unit.name = format!("{}{}", prefix.name, base.name);
        unit.kind = UnitKind::Other;
        return Some(unit);
    }
    None
}
