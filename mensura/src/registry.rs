//! Unit registry - three disjoint symbol maps plus aliases
//!
//! The registry is populated once, behind a `LazyLock`, and treated as
//! immutable afterwards. Lookups hand out references; callers clone
//! for fresh instances. A duplicate symbol at registration is a
//! programmer error in the catalog and refuses to load (panic).

use crate::catalog;
use crate::dimension::Dimension;
use crate::unit::{Unit, UnitKind};
use mensura_core::Number;
use std::collections::HashMap;
use std::sync::LazyLock;

static REGISTRY: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// The process-wide registry, initialized on first use.
pub fn registry() -> &'static UnitRegistry {
    &REGISTRY
}

/// Registry of all known units, split by kind per the data model:
/// base (factor 1, basis vector), named derived (factor 1, compound
/// vector), other (arbitrary factor).
pub struct UnitRegistry {
    base: HashMap<String, Unit>,
    derived: HashMap<String, Unit>,
    other: HashMap<String, Unit>,
    aliases: HashMap<String, String>,
}

impl UnitRegistry {
    pub(crate) fn new() -> Self {
        let mut registry = UnitRegistry {
            base: HashMap::new(),
            derived: HashMap::new(),
            other: HashMap::new(),
            aliases: HashMap::new(),
        };
        catalog::register_all(&mut registry);
        tracing::debug!(
            base = registry.base.len(),
            derived = registry.derived.len(),
            other = registry.other.len(),
            aliases = registry.aliases.len(),
            "unit registry initialized"
        );
        registry
    }

    /// Lookup by symbol or alias, in order base → derived → other.
    pub fn get(&self, symbol: &str) -> Option<&Unit> {
        if let Some(unit) = self.lookup(symbol) {
            return Some(unit);
        }
        let canonical = self.aliases.get(symbol)?;
        self.lookup(canonical)
    }

    fn lookup(&self, symbol: &str) -> Option<&Unit> {
        self.base
            .get(symbol)
            .or_else(|| self.derived.get(symbol))
            .or_else(|| self.other.get(symbol))
    }

    /// All registered units whose vector matches `dimension`.
    pub fn units_with_dimension(&self, dimension: Dimension) -> Vec<&Unit> {
        self.iter()
            .filter(|u| u.dimension == dimension)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.base
            .values()
            .chain(self.derived.values())
            .chain(self.other.values())
    }

    pub fn symbols(&self) -> Vec<&str> {
        self.iter().map(|u| u.symbol.as_str()).collect()
    }

    fn assert_free(&self, symbol: &str) {
        if self.lookup(symbol).is_some() || self.aliases.contains_key(symbol) {
            panic!("duplicate unit symbol in catalog: {symbol}");
        }
    }

    /// Register one of the seven SI reference units.
    pub(crate) fn register_base(&mut self, symbol: &str, name: &str, slot: usize) {
        self.assert_free(symbol);
        let unit = Unit::new(symbol, name, UnitKind::Base, Dimension::basis(slot), Number::one());
        self.base.insert(symbol.to_string(), unit);
    }

    /// Register an SI named derived unit: factor 1, compound vector.
    pub(crate) fn register_derived(&mut self, symbol: &str, name: &str, dimension: Dimension) {
        self.assert_free(symbol);
        let unit = Unit::new(symbol, name, UnitKind::NamedDerived, dimension, Number::one());
        self.derived.insert(symbol.to_string(), unit);
    }

    /// Register any other unit: arbitrary factor over some compound.
    pub(crate) fn register(&mut self, symbol: &str, name: &str, dimension: Dimension, factor: Number) {
        self.assert_free(symbol);
        let unit = Unit::new(symbol, name, UnitKind::Other, dimension, factor);
        self.other.insert(symbol.to_string(), unit);
    }

    /// Register an affine temperature unit.
    pub(crate) fn register_affine(
        &mut self,
        symbol: &str,
        name: &str,
        factor: Number,
        offset: Number,
    ) {
        self.assert_free(symbol);
        let unit = Unit::with_offset(symbol, name, Dimension::TEMPERATURE, factor, offset);
        self.other.insert(symbol.to_string(), unit);
    }

    pub(crate) fn alias(&mut self, alias: &str, symbol: &str) {
        self.assert_free(alias);
        debug_assert!(self.lookup(symbol).is_some(), "alias target missing: {symbol}");
        self.aliases.insert(alias.to_string(), symbol.to_string());
    }

    /// Flatten a recipe of already-registered atoms into a dimension
    /// and factor. Used by the catalog for units defined by
    /// composition, e.g. the poise over Pa·s.
    pub(crate) fn compose(&self, atoms: &[(&str, i32)]) -> (Dimension, Number) {
        let mut dimension = Dimension::DIMENSIONLESS;
        let mut factor = Number::one();
        for (symbol, exp) in atoms {
            let unit = self
                .get(symbol)
                .unwrap_or_else(|| panic!("catalog recipe references unknown unit: {symbol}"));
            dimension = dimension.multiply(&unit.dimension.power(*exp));
            factor = factor.mul(&unit.factor.pow(*exp));
        }
        (dimension, factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_symbol_and_alias() {
        let reg = registry();
        assert!(reg.get("m").is_some());
        assert!(reg.get("kg").is_some());
        assert!(reg.get("meter").is_some());
        assert!(reg.get("litre").is_some());
        assert!(reg.get("no_such_unit").is_none());
    }

    #[test]
    fn lookup_order_prefers_base() {
        // "m" is the meter, never milli-something
        let m = registry().get("m").unwrap();
        assert_eq!(m.kind, UnitKind::Base);
        assert_eq!(m.factor, Number::one());
    }

    #[test]
    fn derived_units_have_factor_one() {
        let reg = registry();
        for symbol in ["N", "Pa", "J", "W", "Hz"] {
            let u = reg.get(symbol).unwrap();
            assert_eq!(u.kind, UnitKind::NamedDerived, "{symbol}");
            assert_eq!(u.factor, Number::one(), "{symbol}");
        }
    }

    #[test]
    fn units_share_dimension_with_quantity() {
        let reg = registry();
        let lengths = reg.units_with_dimension(Dimension::LENGTH);
        assert!(lengths.len() > 10);
        for u in lengths {
            assert_eq!(u.dimension, Dimension::LENGTH);
        }
    }

    #[test]
    fn compose_flattens_recipes() {
        let reg = registry();
        let (dim, factor) = reg.compose(&[("Pa", 1), ("s", 1)]);
        assert_eq!(dim, Dimension::DYNAMIC_VISCOSITY);
        assert_eq!(factor, Number::one());
    }
}
