//! Conversion of reactances and susceptances into lumped components.

use crate::immittance::Immittance;
use mn_core::units::{Capacitance, Inductance, farad, henry};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Inductor,
    Capacitor,
    /// No component: a plain wire in series, nothing in shunt.
    None,
}

impl ElementKind {
    /// Single-letter schematic prefix.
    pub fn symbol(&self) -> Option<char> {
        match self {
            ElementKind::Inductor => Some('L'),
            ElementKind::Capacitor => Some('C'),
            ElementKind::None => None,
        }
    }

    /// SI unit symbol of the element value.
    pub fn unit(&self) -> &'static str {
        match self {
            ElementKind::Inductor => "H",
            ElementKind::Capacitor => "F",
            ElementKind::None => "",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Inductor => write!(f, "inductor"),
            ElementKind::Capacitor => write!(f, "capacitor"),
            ElementKind::None => write!(f, "none"),
        }
    }
}

/// A lumped element: kind plus value in henries or farads (0 for `None`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    pub value: f64,
}

impl Element {
    pub const NONE: Element = Element {
        kind: ElementKind::None,
        value: 0.0,
    };

    pub fn inductor(henries: f64) -> Self {
        Self {
            kind: ElementKind::Inductor,
            value: henries,
        }
    }

    pub fn capacitor(farads: f64) -> Self {
        Self {
            kind: ElementKind::Capacitor,
            value: farads,
        }
    }

    /// `X > 0` → `L = X/ω`, `X < 0` → `C = −1/(ωX)`, `X = 0` → none.
    pub fn from_reactance(x: f64, omega: f64) -> Self {
        if x > 0.0 {
            Self::inductor(x / omega)
        } else if x < 0.0 {
            Self::capacitor(-1.0 / (omega * x))
        } else {
            Self::NONE
        }
    }

    /// `B > 0` → `C = B/ω`, `B < 0` → `L = −1/(ωB)`, `B = 0` → none.
    pub fn from_susceptance(b: f64, omega: f64) -> Self {
        if b > 0.0 {
            Self::capacitor(b / omega)
        } else if b < 0.0 {
            Self::inductor(-1.0 / (omega * b))
        } else {
            Self::NONE
        }
    }

    pub fn from_immittance(imm: Immittance, omega: f64) -> Self {
        match imm {
            Immittance::Reactance(x) => Self::from_reactance(x, omega),
            Immittance::Susceptance(b) => Self::from_susceptance(b, omega),
        }
    }

    pub fn is_none(&self) -> bool {
        self.kind == ElementKind::None
    }

    /// Reactance at `omega` (`ωL` or `−1/(ωC)`); `None` reads as a wire.
    pub fn reactance(&self, omega: f64) -> f64 {
        match self.kind {
            ElementKind::Inductor => omega * self.value,
            ElementKind::Capacitor => -1.0 / (omega * self.value),
            ElementKind::None => 0.0,
        }
    }

    /// Susceptance at `omega` (`ωC` or `−1/(ωL)`); `None` reads as an open.
    pub fn susceptance(&self, omega: f64) -> f64 {
        match self.kind {
            ElementKind::Inductor => -1.0 / (omega * self.value),
            ElementKind::Capacitor => omega * self.value,
            ElementKind::None => 0.0,
        }
    }

    pub fn inductance(&self) -> Option<Inductance> {
        (self.kind == ElementKind::Inductor).then(|| henry(self.value))
    }

    pub fn capacitance(&self) -> Option<Capacitance> {
        (self.kind == ElementKind::Capacitor).then(|| farad(self.value))
    }

    /// Schematic designator such as `L1` or `C2`.
    pub fn designator(&self, position: u8) -> Option<String> {
        self.kind.symbol().map(|c| format!("{c}{position}"))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use mn_core::numeric::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn conversion_is_invertible(
            x in prop_oneof![-1e4_f64..-1e-3, 1e-3_f64..1e4],
            f in 1e3_f64..1e11,
        ) {
            let omega = 2.0 * std::f64::consts::PI * f;
            let tol = Tolerances { abs: 0.0, rel: 1e-12 };

            let from_x = Element::from_reactance(x, omega);
            prop_assert!(from_x.value > 0.0);
            prop_assert!(nearly_equal(from_x.reactance(omega), x, tol));

            let b = x * 1e-4;
            let from_b = Element::from_susceptance(b, omega);
            prop_assert!(from_b.value > 0.0);
            prop_assert!(nearly_equal(from_b.susceptance(omega), b, tol));
        }
    }
}
