//! Dimensional analysis types
//!
//! Every unit reduces to a 7-element vector of integer exponents over
//! the SI base dimensions:
//! [length, mass, time, current, temperature, amount, luminosity]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Slot indices of the 7 SI base dimensions
pub const LENGTH: usize = 0;
pub const MASS: usize = 1;
pub const TIME: usize = 2;
pub const CURRENT: usize = 3;
pub const TEMPERATURE: usize = 4;
pub const AMOUNT: usize = 5;
pub const LUMINOSITY: usize = 6;

/// The dimension signature of a unit, as exponents of the 7 SI base
/// dimensions. Two units are convertible iff their signatures match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    /// [length, mass, time, current, temperature, amount, luminosity]
    pub exponents: [i32; 7],
}

impl Dimension {
    /// All exponents zero: pure numbers, angles, data sizes
    pub const DIMENSIONLESS: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 0, 0] };

    pub const LENGTH: Dimension = Dimension { exponents: [1, 0, 0, 0, 0, 0, 0] };
    pub const MASS: Dimension = Dimension { exponents: [0, 1, 0, 0, 0, 0, 0] };
    pub const TIME: Dimension = Dimension { exponents: [0, 0, 1, 0, 0, 0, 0] };
    pub const CURRENT: Dimension = Dimension { exponents: [0, 0, 0, 1, 0, 0, 0] };
    pub const TEMPERATURE: Dimension = Dimension { exponents: [0, 0, 0, 0, 1, 0, 0] };
    pub const AMOUNT: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 1, 0] };
    pub const LUMINOSITY: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 0, 1] };

    pub const AREA: Dimension = Dimension { exponents: [2, 0, 0, 0, 0, 0, 0] };
    pub const VOLUME: Dimension = Dimension { exponents: [3, 0, 0, 0, 0, 0, 0] };
    pub const VELOCITY: Dimension = Dimension { exponents: [1, 0, -1, 0, 0, 0, 0] };
    pub const ACCELERATION: Dimension = Dimension { exponents: [1, 0, -2, 0, 0, 0, 0] };
    pub const FREQUENCY: Dimension = Dimension { exponents: [0, 0, -1, 0, 0, 0, 0] };
    pub const FORCE: Dimension = Dimension { exponents: [1, 1, -2, 0, 0, 0, 0] };
    /// Torque shares the energy signature
    pub const ENERGY: Dimension = Dimension { exponents: [2, 1, -2, 0, 0, 0, 0] };
    pub const POWER: Dimension = Dimension { exponents: [2, 1, -3, 0, 0, 0, 0] };
    pub const PRESSURE: Dimension = Dimension { exponents: [-1, 1, -2, 0, 0, 0, 0] };
    /// Pressure per length: the H2O/Hg/O2 column bases
    pub const PRESSURE_GRADIENT: Dimension = Dimension { exponents: [-2, 1, -2, 0, 0, 0, 0] };
    pub const DYNAMIC_VISCOSITY: Dimension = Dimension { exponents: [-1, 1, -1, 0, 0, 0, 0] };
    pub const KINEMATIC_VISCOSITY: Dimension = Dimension { exponents: [2, 0, -1, 0, 0, 0, 0] };
    /// Angular momentum
    pub const SPIN: Dimension = Dimension { exponents: [2, 1, -1, 0, 0, 0, 0] };
    pub const DENSITY: Dimension = Dimension { exponents: [-3, 1, 0, 0, 0, 0, 0] };

    pub const CHARGE: Dimension = Dimension { exponents: [0, 0, 1, 1, 0, 0, 0] };
    pub const VOLTAGE: Dimension = Dimension { exponents: [2, 1, -3, -1, 0, 0, 0] };
    pub const RESISTANCE: Dimension = Dimension { exponents: [2, 1, -3, -2, 0, 0, 0] };
    pub const CONDUCTANCE: Dimension = Dimension { exponents: [-2, -1, 3, 2, 0, 0, 0] };
    pub const CAPACITANCE: Dimension = Dimension { exponents: [-2, -1, 4, 2, 0, 0, 0] };
    pub const INDUCTANCE: Dimension = Dimension { exponents: [2, 1, -2, -2, 0, 0, 0] };
    pub const MAGNETIC_FLUX: Dimension = Dimension { exponents: [2, 1, -2, -1, 0, 0, 0] };
    pub const MAGNETIC_FLUX_DENSITY: Dimension = Dimension { exponents: [0, 1, -2, -1, 0, 0, 0] };

    /// Absorbed dose and dose equivalent (Gy, Sv)
    pub const DOSE: Dimension = Dimension { exponents: [2, 0, -2, 0, 0, 0, 0] };
    pub const CATALYTIC_ACTIVITY: Dimension = Dimension { exponents: [0, 0, -1, 0, 0, 1, 0] };
    pub const LUMINANCE: Dimension = Dimension { exponents: [-2, 0, 0, 0, 0, 0, 1] };
    /// Illuminance and luminous flux collapse onto luminosity slots
    pub const ILLUMINANCE: Dimension = Dimension { exponents: [-2, 0, 0, 0, 0, 0, 1] };
    pub const MOLAR_FLUX: Dimension = Dimension { exponents: [-2, 0, -1, 0, 0, 1, 0] };

    pub fn new(exponents: [i32; 7]) -> Self {
        Dimension { exponents }
    }

    /// Basis vector for one of the 7 slots
    pub fn basis(slot: usize) -> Self {
        let mut exponents = [0i32; 7];
        exponents[slot] = 1;
        Dimension { exponents }
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Unit multiplication adds exponents componentwise
    pub fn multiply(&self, other: &Dimension) -> Dimension {
        let mut result = [0i32; 7];
        for i in 0..7 {
            result[i] = self.exponents[i] + other.exponents[i];
        }
        Dimension { exponents: result }
    }

    /// Unit division subtracts exponents componentwise
    pub fn divide(&self, other: &Dimension) -> Dimension {
        let mut result = [0i32; 7];
        for i in 0..7 {
            result[i] = self.exponents[i] - other.exponents[i];
        }
        Dimension { exponents: result }
    }

    /// Integer power scales every exponent
    pub fn power(&self, exp: i32) -> Dimension {
        let mut result = [0i32; 7];
        for i in 0..7 {
            result[i] = self.exponents[i] * exp;
        }
        Dimension { exponents: result }
    }

    pub fn invert(&self) -> Dimension {
        self.power(-1)
    }

    /// True when every exponent is even (sqrt is well defined)
    pub fn is_even(&self) -> bool {
        self.exponents.iter().all(|&e| e % 2 == 0)
    }

    /// Halve every exponent; only meaningful after `is_even`
    pub fn halve(&self) -> Dimension {
        let mut result = [0i32; 7];
        for i in 0..7 {
            result[i] = self.exponents[i] / 2;
        }
        Dimension { exponents: result }
    }

    /// Name of the signature when it matches a common quantity
    pub fn name(&self) -> Option<&'static str> {
        match self.exponents {
            [0, 0, 0, 0, 0, 0, 0] => Some("dimensionless"),
            [1, 0, 0, 0, 0, 0, 0] => Some("length"),
            [0, 1, 0, 0, 0, 0, 0] => Some("mass"),
            [0, 0, 1, 0, 0, 0, 0] => Some("time"),
            [0, 0, 0, 1, 0, 0, 0] => Some("current"),
            [0, 0, 0, 0, 1, 0, 0] => Some("temperature"),
            [0, 0, 0, 0, 0, 1, 0] => Some("amount"),
            [0, 0, 0, 0, 0, 0, 1] => Some("luminosity"),
            [2, 0, 0, 0, 0, 0, 0] => Some("area"),
            [3, 0, 0, 0, 0, 0, 0] => Some("volume"),
            [1, 0, -1, 0, 0, 0, 0] => Some("velocity"),
            [1, 0, -2, 0, 0, 0, 0] => Some("acceleration"),
            [0, 0, -1, 0, 0, 0, 0] => Some("frequency"),
            [1, 1, -2, 0, 0, 0, 0] => Some("force"),
            [2, 1, -2, 0, 0, 0, 0] => Some("energy"),
            [2, 1, -3, 0, 0, 0, 0] => Some("power"),
            [-1, 1, -2, 0, 0, 0, 0] => Some("pressure"),
            [-1, 1, -1, 0, 0, 0, 0] => Some("dynamic viscosity"),
            [2, 0, -1, 0, 0, 0, 0] => Some("kinematic viscosity"),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = ["L", "M", "T", "I", "Θ", "N", "J"];
        let mut parts = Vec::new();

        for (i, &exp) in self.exponents.iter().enumerate() {
            if exp != 0 {
                if exp == 1 {
                    parts.push(names[i].to_string());
                } else {
                    parts.push(format!("{}^{}", names[i], exp));
                }
            }
        }

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensionless() {
        assert!(Dimension::DIMENSIONLESS.is_dimensionless());
        assert!(!Dimension::LENGTH.is_dimensionless());
    }

    #[test]
    fn basis_vectors() {
        assert_eq!(Dimension::basis(LENGTH), Dimension::LENGTH);
        assert_eq!(Dimension::basis(LUMINOSITY), Dimension::LUMINOSITY);
    }

    #[test]
    fn multiply_and_divide() {
        let velocity = Dimension::LENGTH.divide(&Dimension::TIME);
        assert_eq!(velocity, Dimension::VELOCITY);

        let force = Dimension::MASS.multiply(&Dimension::ACCELERATION);
        assert_eq!(force, Dimension::FORCE);
    }

    #[test]
    fn power_and_invert() {
        assert_eq!(Dimension::LENGTH.power(2), Dimension::AREA);
        assert_eq!(Dimension::TIME.invert(), Dimension::FREQUENCY);
        assert_eq!(Dimension::AREA.power(0), Dimension::DIMENSIONLESS);
    }

    #[test]
    fn halving() {
        assert!(Dimension::AREA.is_even());
        assert_eq!(Dimension::AREA.halve(), Dimension::LENGTH);
        assert!(!Dimension::VOLUME.is_even());
    }

    #[test]
    fn column_base_composes_to_pressure() {
        let pressure = Dimension::PRESSURE_GRADIENT.multiply(&Dimension::LENGTH);
        assert_eq!(pressure, Dimension::PRESSURE);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Dimension::DIMENSIONLESS), "1");
        assert_eq!(format!("{}", Dimension::LENGTH), "L");
        assert_eq!(format!("{}", Dimension::VELOCITY), "L T^-1");
        assert_eq!(format!("{}", Dimension::FORCE), "L M T^-2");
    }
}
