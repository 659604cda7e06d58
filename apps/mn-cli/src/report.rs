//! Text rendering of match reports.

use mn_core::units::{angular, hz};
use mn_network::schematic::{self, SEPARATOR};
use mn_network::verify::{input_impedance, reflection_magnitude};
use mn_network::{Element, MatchReport, NetworkSolution};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
    pub schematic: bool,
    pub verify: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            schematic: true,
            verify: false,
        }
    }
}

/// C-style `%11.5e`: five mantissa digits, signed two-digit exponent.
pub fn sci(v: f64) -> String {
    let raw = format!("{v:.5e}");
    let formatted = match raw.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(e) => format!(
                "{mantissa}e{}{:02}",
                if e < 0 { '-' } else { '+' },
                e.abs()
            ),
            Err(_) => raw.clone(),
        },
        None => raw.clone(),
    };
    format!("{formatted:>11}")
}

/// `L1 = 1.65786e-09 H`, or `None` when there is no component.
pub fn element_line(element: &Element, position: u8) -> Option<String> {
    element
        .designator(position)
        .map(|name| format!("{name} = {} {}", sci(element.value), element.kind.unit()))
}

pub fn write_solution<W: Write>(
    out: &mut W,
    solution: &NetworkSolution,
    opts: PrintOptions,
) -> io::Result<()> {
    for (position, element) in [(1, &solution.element1), (2, &solution.element2)] {
        if let Some(line) = element_line(element, position) {
            writeln!(out, "{line}")?;
        }
    }
    if opts.schematic {
        writeln!(out, "{}", schematic::render(solution))?;
    }
    writeln!(out, "\n{SEPARATOR}")
}

pub fn write_report<W: Write>(out: &mut W, report: &MatchReport, opts: PrintOptions) -> io::Result<()> {
    if report.already_matched {
        writeln!(out, "No matching network required.")?;
        return Ok(());
    }
    let omega = angular(hz(report.frequency_hz));
    for (i, solution) in report.solutions.iter().enumerate() {
        writeln!(out, "Solution {}: {}", i + 1, solution.topology)?;
        write_solution(out, solution, opts)?;
        if opts.verify {
            let z_in = input_impedance(&report.load, solution, omega);
            writeln!(
                out,
                "Zin = {:.6} {:+.6}j ohm, |Gamma| = {:.3e}",
                z_in.re,
                z_in.im,
                reflection_magnitude(z_in, report.reference_ohm)
            )?;
        }
    }
    Ok(())
}
