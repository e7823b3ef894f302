//! Physical quantity registry
//!
//! A quantity names a dimension signature and its canonical SI unit.
//! The table is the discovery surface: list quantities, find the one
//! a unit belongs to, enumerate the units that measure it.

use crate::registry::registry;
use crate::unit::Unit;
use crate::{Dimension, UnitError};

/// A named physical quantity: "Pressure" over [-1, 1, -2, ...] with
/// canonical unit Pa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub name: &'static str,
    /// Canonical SI unit expression, parseable by `Unit::parse`
    pub canonical: &'static str,
    pub description: &'static str,
    pub dimension: Dimension,
}

const QUANTITIES: &[Quantity] = &[
    Quantity { name: "Length", canonical: "m", description: "spatial extent", dimension: Dimension::LENGTH },
    Quantity { name: "Mass", canonical: "kg", description: "amount of matter", dimension: Dimension::MASS },
    Quantity { name: "Time", canonical: "s", description: "duration", dimension: Dimension::TIME },
    Quantity { name: "Current", canonical: "A", description: "electric current", dimension: Dimension::CURRENT },
    Quantity { name: "Temperature", canonical: "K", description: "thermodynamic temperature", dimension: Dimension::TEMPERATURE },
    Quantity { name: "Amount", canonical: "mol", description: "amount of substance", dimension: Dimension::AMOUNT },
    Quantity { name: "Luminosity", canonical: "cd", description: "luminous intensity", dimension: Dimension::LUMINOSITY },
    Quantity { name: "Area", canonical: "m²", description: "surface extent", dimension: Dimension::AREA },
    Quantity { name: "Volume", canonical: "m³", description: "spatial capacity", dimension: Dimension::VOLUME },
    Quantity { name: "Velocity", canonical: "m/s", description: "rate of displacement", dimension: Dimension::VELOCITY },
    Quantity { name: "Acceleration", canonical: "m/s²", description: "rate of velocity change", dimension: Dimension::ACCELERATION },
    Quantity { name: "Frequency", canonical: "Hz", description: "events per unit time", dimension: Dimension::FREQUENCY },
    Quantity { name: "Force", canonical: "N", description: "mass times acceleration", dimension: Dimension::FORCE },
    Quantity { name: "Energy", canonical: "J", description: "capacity to do work", dimension: Dimension::ENERGY },
    Quantity { name: "Torque", canonical: "N·m", description: "moment of force", dimension: Dimension::ENERGY },
    Quantity { name: "Power", canonical: "W", description: "energy per unit time", dimension: Dimension::POWER },
    Quantity { name: "Pressure", canonical: "Pa", description: "force per unit area", dimension: Dimension::PRESSURE },
    Quantity { name: "Dynamic viscosity", canonical: "Pa·s", description: "resistance to shear flow", dimension: Dimension::DYNAMIC_VISCOSITY },
    Quantity { name: "Kinematic viscosity", canonical: "m²/s", description: "viscosity over density", dimension: Dimension::KINEMATIC_VISCOSITY },
    Quantity { name: "Angular momentum", canonical: "J·s", description: "spin; also action", dimension: Dimension::SPIN },
    Quantity { name: "Density", canonical: "kg/m³", description: "mass per unit volume", dimension: Dimension::DENSITY },
    Quantity { name: "Charge", canonical: "C", description: "electric charge", dimension: Dimension::CHARGE },
    Quantity { name: "Voltage", canonical: "V", description: "electric potential", dimension: Dimension::VOLTAGE },
    Quantity { name: "Resistance", canonical: "Ω", description: "opposition to current", dimension: Dimension::RESISTANCE },
    Quantity { name: "Conductance", canonical: "S", description: "inverse resistance", dimension: Dimension::CONDUCTANCE },
    Quantity { name: "Capacitance", canonical: "F", description: "charge per unit voltage", dimension: Dimension::CAPACITANCE },
    Quantity { name: "Inductance", canonical: "H", description: "flux per unit current", dimension: Dimension::INDUCTANCE },
    Quantity { name: "Magnetic flux", canonical: "Wb", description: "field through a surface", dimension: Dimension::MAGNETIC_FLUX },
    Quantity { name: "Magnetic flux density", canonical: "T", description: "flux per unit area", dimension: Dimension::MAGNETIC_FLUX_DENSITY },
    Quantity { name: "Absorbed dose", canonical: "Gy", description: "radiation energy per mass", dimension: Dimension::DOSE },
    Quantity { name: "Dose equivalent", canonical: "Sv", description: "biologically weighted dose", dimension: Dimension::DOSE },
    Quantity { name: "Radioactivity", canonical: "Bq", description: "decays per unit time", dimension: Dimension::FREQUENCY },
    Quantity { name: "Catalytic activity", canonical: "kat", description: "conversion rate of substrate", dimension: Dimension::CATALYTIC_ACTIVITY },
    Quantity { name: "Luminance", canonical: "cd/m²", description: "intensity per unit area", dimension: Dimension::LUMINANCE },
    Quantity { name: "Illuminance", canonical: "lx", description: "luminous flux per unit area", dimension: Dimension::ILLUMINANCE },
    Quantity { name: "Luminous flux", canonical: "lm", description: "perceived light power", dimension: Dimension::LUMINOSITY },
    Quantity { name: "Molar flux", canonical: "mol/(m²·s)", description: "substance flow per area", dimension: Dimension::MOLAR_FLUX },
    Quantity { name: "Angle", canonical: "rad", description: "plane angle", dimension: Dimension::DIMENSIONLESS },
    Quantity { name: "Solid angle", canonical: "sr", description: "subtended spherical area", dimension: Dimension::DIMENSIONLESS },
    Quantity { name: "Data", canonical: "bit", description: "information size", dimension: Dimension::DIMENSIONLESS },
];

/// The full quantity table, in definition order.
pub fn all() -> &'static [Quantity] {
    QUANTITIES
}

/// Case-insensitive lookup by quantity name.
pub fn find(name: &str) -> Option<&'static Quantity> {
    QUANTITIES.iter().find(|q| q.name.eq_ignore_ascii_case(name))
}

/// First quantity whose signature matches `dimension`. Quantities
/// sharing a vector (energy/torque) resolve to the earlier entry.
pub fn for_dimension(dimension: Dimension) -> Option<&'static Quantity> {
    QUANTITIES.iter().find(|q| q.dimension == dimension)
}

impl Quantity {
    /// The canonical unit, parsed fresh.
    pub fn canonical_unit(&self) -> Result<Unit, UnitError> {
        Unit::parse(self.canonical)
    }

    /// Whether `unit` measures this quantity.
    pub fn is_unit_compatible(&self, unit: &Unit) -> bool {
        unit.dimension == self.dimension
    }

    /// All registered units with this quantity's signature.
    pub fn units(&self) -> Vec<&'static Unit> {
        registry().units_with_dimension(self.dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_units_parse_and_match() {
        for q in all() {
            let u = q.canonical_unit().unwrap_or_else(|e| panic!("{}: {e}", q.name));
            assert_eq!(u.dimension, q.dimension, "{}", q.name);
        }
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("pressure").unwrap().canonical, "Pa");
        assert_eq!(find("Pressure").unwrap().canonical, "Pa");
        assert!(find("flavor").is_none());
    }

    #[test]
    fn torque_resolves_to_energy() {
        let nm = Unit::parse("N·m").unwrap();
        let q = for_dimension(nm.dimension).unwrap();
        assert_eq!(q.name, "Energy");
        assert!(q.is_unit_compatible(&nm));
    }

    #[test]
    fn every_zero_vector_unit_has_a_quantity() {
        // rad, °, bit and dB interconvert by factor; the table must
        // name a quantity over the zero vector for that to be lawful
        for sym in ["rad", "sr", "°", "bit", "dB"] {
            let u = Unit::parse(sym).unwrap();
            let q = for_dimension(u.dimension);
            assert!(q.is_some(), "{sym} has no quantity");
        }
        assert_eq!(for_dimension(Dimension::DIMENSIONLESS).unwrap().name, "Angle");
    }

    #[test]
    fn supplementary_quantities_are_listed() {
        for name in [
            "Torque",
            "Angle",
            "Solid angle",
            "Illuminance",
            "Luminous flux",
            "Radioactivity",
            "Dose equivalent",
            "Data",
        ] {
            assert!(find(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn pressure_units_include_the_catalog() {
        let q = find("pressure").unwrap();
        let symbols: Vec<&str> = q.units().iter().map(|u| u.symbol.as_str()).collect();
        for s in ["Pa", "bar", "atm", "psi", "torr"] {
            assert!(symbols.contains(&s), "missing {s}");
        }
    }
}
