//! Rebuild a synthesized network and measure what the source sees.
//!
//! Works from the component values, not the formula outputs, so it checks the
//! unit conversion as well as the synthesis.

use crate::immittance::Load;
use crate::solver::NetworkSolution;
use crate::topology::Layout;
use num_complex::Complex64;

fn series_impedance(x: f64) -> Complex64 {
    Complex64::new(0.0, x)
}

fn shunt_admittance(b: f64) -> Complex64 {
    Complex64::new(0.0, b)
}

/// Impedance at the source port of `solution` terminated in `load`.
pub fn input_impedance(load: &Load, solution: &NetworkSolution, omega: f64) -> Complex64 {
    let zl = load.impedance();
    let (e1, e2) = (solution.element1, solution.element2);
    match solution.layout {
        Layout::SeriesAtLoad => {
            let z = zl + series_impedance(e1.reactance(omega));
            (z.inv() + shunt_admittance(e2.susceptance(omega))).inv()
        }
        Layout::ShuntAtLoad => {
            let y = zl.inv() + shunt_admittance(e1.susceptance(omega));
            y.inv() + series_impedance(e2.reactance(omega))
        }
        Layout::SeriesOnly => zl + series_impedance(e1.reactance(omega)),
        Layout::ShuntOnly => (zl.inv() + shunt_admittance(e1.susceptance(omega))).inv(),
    }
}

/// `|Γ| = |(Zin − Z0)/(Zin + Z0)|`.
pub fn reflection_magnitude(z_in: Complex64, z0: f64) -> f64 {
    let z0 = Complex64::new(z0, 0.0);
    ((z_in - z0) / (z_in + z0)).norm()
}

/// Return loss in dB (positive number; infinite for a perfect match).
pub fn return_loss_db(z_in: Complex64, z0: f64) -> f64 {
    -20.0 * reflection_magnitude(z_in, z0).log10()
}
