//! Load impedance/admittance and tagged element immittances.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Complex load `ZL = RL + jXL`, in ohms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Load {
    pub resistance_ohm: f64,
    pub reactance_ohm: f64,
}

impl Load {
    pub fn new(resistance_ohm: f64, reactance_ohm: f64) -> Self {
        Self {
            resistance_ohm,
            reactance_ohm,
        }
    }

    /// Load whose impedance is the given complex value.
    pub fn from_impedance(z: Complex64) -> Self {
        Self::new(z.re, z.im)
    }

    pub fn impedance(&self) -> Complex64 {
        Complex64::new(self.resistance_ohm, self.reactance_ohm)
    }

    /// `YL = GL + jBL` with `GL = R/(R²+X²)` and `BL = −X/(R²+X²)`.
    pub fn admittance(&self) -> Complex64 {
        let (r, x) = (self.resistance_ohm, self.reactance_ohm);
        let mag2 = r * r + x * x;
        Complex64::new(r / mag2, -x / mag2)
    }

    pub fn conductance(&self) -> f64 {
        self.admittance().re
    }

    pub fn susceptance(&self) -> f64 {
        self.admittance().im
    }
}

/// Value of a matching element as it comes out of the synthesis formulas.
///
/// Series elements of topology 2 (and the bypass of topology 3) are carried as
/// the susceptance `−1/X` of the series reactance, so the conversion has to
/// remember which side of the immittance pair a number lives on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Immittance {
    /// Ohms; positive is inductive.
    Reactance(f64),
    /// Siemens; positive is capacitive.
    Susceptance(f64),
}

impl Immittance {
    pub fn value(&self) -> f64 {
        match *self {
            Immittance::Reactance(x) => x,
            Immittance::Susceptance(b) => b,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.value() == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mn_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn admittance_matches_reciprocal() {
        let load = Load::new(30.0, -40.0);
        let y = load.admittance();
        let expected = Complex64::new(1.0, 0.0) / load.impedance();
        let tol = Tolerances::default();
        assert!(nearly_equal(y.re, expected.re, tol));
        assert!(nearly_equal(y.im, expected.im, tol));
        assert!(nearly_equal(load.conductance(), 30.0 / 2500.0, tol));
        assert!(nearly_equal(load.susceptance(), 40.0 / 2500.0, tol));
    }

    #[test]
    fn purely_resistive_load_has_no_susceptance() {
        let load = Load::new(25.0, 0.0);
        assert_eq!(load.conductance(), 0.04);
        assert_eq!(load.susceptance(), 0.0);
    }

    #[test]
    fn immittance_value_and_zero() {
        assert_eq!(Immittance::Reactance(-3.0).value(), -3.0);
        assert_eq!(Immittance::Susceptance(0.5).value(), 0.5);
        assert!(Immittance::Reactance(0.0).is_zero());
        assert!(!Immittance::Susceptance(1e-30).is_zero());
    }
}
