//! Closed-form L-section synthesis.
//!
//! Four independent branch tests select the topologies that apply to a load.
//! Each branch that fires contributes two solutions; nothing is chained, so a
//! load that satisfies both the series-at-load and the shunt-at-load guards
//! gets both families back.

use crate::element::Element;
use crate::error::{MatchError, MatchResult};
use crate::immittance::{Immittance, Load};
use crate::topology::{Layout, Topology};
use mn_core::numeric::{DISPATCH_ZERO, checked_sqrt, ensure_finite, ensure_positive};
use mn_core::units::{Frequency, Resistance, angular, hz, ohm};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use uom::si::electrical_resistance::ohm as ohm_unit;
use uom::si::frequency::hertz;

/// Inputs for one synthesis run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchRequest {
    pub load: Load,
    /// Real reference (source) impedance `Z0`.
    pub reference: Resistance,
    pub frequency: Frequency,
}

impl MatchRequest {
    pub fn new(load: Load, reference: Resistance, frequency: Frequency) -> Self {
        Self {
            load,
            reference,
            frequency,
        }
    }

    /// Build from plain SI numbers: ohms and hertz.
    pub fn from_si(rl: f64, xl: f64, z0: f64, f: f64) -> Self {
        Self::new(Load::new(rl, xl), ohm(z0), hz(f))
    }
}

/// One matching network.
///
/// `element1` is the element nearest the load, `element2` the one nearest the
/// source. Single-element solutions report `element2` as [`Element::NONE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkSolution {
    pub topology: Topology,
    pub layout: Layout,
    /// Raw formula outputs the elements were converted from.
    pub immittances: [Immittance; 2],
    pub element1: Element,
    pub element2: Element,
}

impl NetworkSolution {
    fn new(
        topology: Topology,
        layout: Layout,
        first: Immittance,
        second: Immittance,
        omega: f64,
    ) -> Self {
        let solution = Self {
            topology,
            layout,
            immittances: [first, second],
            element1: Element::from_immittance(first, omega),
            element2: Element::from_immittance(second, omega),
        };
        trace!(
            topology = topology.number(),
            ?layout,
            element1 = %solution.element1.kind,
            element2 = %solution.element2.kind,
            "solution"
        );
        solution
    }

    pub fn elements(&self) -> [Element; 2] {
        [self.element1, self.element2]
    }

    pub fn is_single_element(&self) -> bool {
        self.layout.element_count() == 1
    }
}

/// Everything a solve produces for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub load: Load,
    pub reference_ohm: f64,
    pub frequency_hz: f64,
    /// The load already equals the reference; no network is needed.
    pub already_matched: bool,
    pub solutions: Vec<NetworkSolution>,
}

impl MatchReport {
    pub fn by_topology(&self, topology: Topology) -> impl Iterator<Item = &NetworkSolution> {
        self.solutions
            .iter()
            .filter(move |s| s.topology == topology)
    }

    pub fn topologies(&self) -> Vec<Topology> {
        let mut out: Vec<Topology> = self.solutions.iter().map(|s| s.topology).collect();
        out.dedup();
        out
    }
}

/// Synthesize every L-section that matches `request.load` to `request.reference`.
pub fn solve(request: &MatchRequest) -> MatchResult<MatchReport> {
    let rl = ensure_positive(request.load.resistance_ohm, "load resistance")?;
    let xl = ensure_finite(request.load.reactance_ohm, "load reactance")?;
    let z0 = ensure_positive(request.reference.get::<ohm_unit>(), "reference impedance")?;
    let f = ensure_positive(request.frequency.get::<hertz>(), "frequency")?;
    if rl / z0 <= DISPATCH_ZERO {
        return Err(MatchError::InvalidInput {
            what: "load resistance relative to reference",
            value: rl,
        });
    }

    let omega = angular(request.frequency);
    let zero = DISPATCH_ZERO;
    let y0 = 1.0 / z0;
    let gl = request.load.conductance();
    let bl = request.load.susceptance();

    let mut solutions = Vec::with_capacity(4);

    if (rl - z0) / z0 < -zero && rl / z0 > zero && (gl - y0).abs() * z0 > zero {
        debug!(rl, xl, z0, "series-at-load branch");
        solutions.extend(series_at_load(rl, xl, z0, omega)?);
    }
    if (gl - y0) * z0 < -zero && gl * z0 > zero && (rl - z0).abs() / z0 > zero {
        debug!(gl, bl, y0, "shunt-at-load branch");
        solutions.extend(shunt_at_load(gl, bl, y0, omega)?);
    }
    if (rl - z0).abs() / z0 <= zero && (xl / z0).abs() > zero {
        debug!(rl, xl, z0, "matched-resistance branch");
        solutions.extend(matched_resistance(xl, gl, bl, y0, omega));
    }
    if (gl - y0).abs() * z0 <= zero && (bl * z0).abs() > zero {
        debug!(gl, bl, y0, "matched-conductance branch");
        solutions.extend(matched_conductance(rl, xl, bl, z0, omega));
    }

    let already_matched = (rl - z0).abs() / z0 <= zero && (xl / z0).abs() <= zero;
    if already_matched {
        debug!(rl, xl, z0, "load already matched");
    }

    Ok(MatchReport {
        load: request.load,
        reference_ohm: z0,
        frequency_hz: f,
        already_matched,
        solutions,
    })
}

/// Plain-number entry point: ohms in, henries/farads out.
pub fn solve_matching_network(
    rl: f64,
    xl: f64,
    z0: f64,
    f: f64,
) -> MatchResult<Vec<NetworkSolution>> {
    solve(&MatchRequest::from_si(rl, xl, z0, f)).map(|report| report.solutions)
}

/// Topology 1: `X1 = −XL ± sqrt(RL(Z0−RL))`, `X2 = −Z0·RL/(XL+X1)`.
fn series_at_load(rl: f64, xl: f64, z0: f64, omega: f64) -> MatchResult<[NetworkSolution; 2]> {
    let root = checked_sqrt(rl * (z0 - rl), "RL(Z0-RL) must be non-negative")?;
    Ok([root, -root].map(|r| {
        let x1 = -xl + r;
        let x2 = -(z0 * rl) / (xl + x1);
        NetworkSolution::new(
            Topology::SeriesAtLoad,
            Layout::SeriesAtLoad,
            Immittance::Reactance(x1),
            Immittance::Reactance(x2),
            omega,
        )
    }))
}

/// Topology 2: `B1 = −BL ± sqrt(GL(Y0−GL))`, `B2 = −Y0·GL/(BL+B1)`.
fn shunt_at_load(gl: f64, bl: f64, y0: f64, omega: f64) -> MatchResult<[NetworkSolution; 2]> {
    let root = checked_sqrt(gl * (y0 - gl), "GL(Y0-GL) must be non-negative")?;
    Ok([root, -root].map(|r| {
        let b1 = -bl + r;
        let b2 = -(y0 * gl) / (bl + b1);
        NetworkSolution::new(
            Topology::ShuntAtLoad,
            Layout::ShuntAtLoad,
            Immittance::Susceptance(b1),
            Immittance::Susceptance(b2),
            omega,
        )
    }))
}

/// Topology 3: cancel `XL` in series, or mirror the load susceptance and
/// re-add the reactance in series.
fn matched_resistance(xl: f64, gl: f64, bl: f64, y0: f64, omega: f64) -> [NetworkSolution; 2] {
    let single = NetworkSolution::new(
        Topology::MatchedResistance,
        Layout::SeriesOnly,
        Immittance::Reactance(-xl),
        Immittance::Reactance(0.0),
        omega,
    );
    let bypass = NetworkSolution::new(
        Topology::MatchedResistance,
        Layout::ShuntAtLoad,
        Immittance::Susceptance(-2.0 * bl),
        Immittance::Susceptance(y0 * gl / bl),
        omega,
    );
    [single, bypass]
}

/// Topology 4: dual of topology 3.
fn matched_conductance(rl: f64, xl: f64, bl: f64, z0: f64, omega: f64) -> [NetworkSolution; 2] {
    let single = NetworkSolution::new(
        Topology::MatchedConductance,
        Layout::ShuntOnly,
        Immittance::Susceptance(-bl),
        Immittance::Susceptance(0.0),
        omega,
    );
    let bypass = NetworkSolution::new(
        Topology::MatchedConductance,
        Layout::SeriesAtLoad,
        Immittance::Reactance(-2.0 * xl),
        Immittance::Reactance(z0 * rl / xl),
        omega,
    );
    [single, bypass]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;
    use mn_core::numeric::{Tolerances, nearly_equal};
    use std::f64::consts::PI;

    const TOL: Tolerances = Tolerances {
        abs: 0.0,
        rel: 1e-12,
    };

    #[test]
    fn resistive_step_down_uses_series_at_load() {
        let f = 2.4e9;
        let w = 2.0 * PI * f;
        let sols = solve_matching_network(25.0, 0.0, 50.0, f).unwrap();

        let t1: Vec<_> = sols
            .iter()
            .filter(|s| s.topology == Topology::SeriesAtLoad)
            .collect();
        assert_eq!(t1.len(), 2);

        let first = t1[0];
        assert_eq!(first.immittances[0], Immittance::Reactance(25.0));
        assert_eq!(first.immittances[1], Immittance::Reactance(-50.0));
        assert_eq!(first.element1.kind, ElementKind::Inductor);
        assert!(nearly_equal(first.element1.value, 25.0 / w, TOL));
        assert_eq!(first.element2.kind, ElementKind::Capacitor);
        assert!(nearly_equal(first.element2.value, 1.0 / (w * 50.0), TOL));

        let mirror = t1[1];
        assert_eq!(mirror.immittances[0], Immittance::Reactance(-25.0));
        assert_eq!(mirror.immittances[1], Immittance::Reactance(50.0));
        assert_eq!(mirror.element1.kind, ElementKind::Capacitor);
        assert_eq!(mirror.element2.kind, ElementKind::Inductor);
    }

    #[test]
    fn step_up_uses_shunt_at_load_only() {
        let report = solve(&MatchRequest::from_si(100.0, 0.0, 50.0, 1e9)).unwrap();
        assert_eq!(report.topologies(), vec![Topology::ShuntAtLoad]);
        assert_eq!(report.solutions.len(), 2);
        assert!(!report.already_matched);

        // GL = 0.01, Y0 = 0.02: B1 = ±0.01, B2 = ∓0.02
        let s = &report.solutions[0];
        assert!(nearly_equal(s.immittances[0].value(), 0.01, TOL));
        assert!(nearly_equal(s.immittances[1].value(), -0.02, TOL));
        assert_eq!(s.element1.kind, ElementKind::Capacitor);
        assert_eq!(s.element2.kind, ElementKind::Inductor);
    }

    #[test]
    fn matched_resistance_gives_single_and_bypass() {
        let report = solve(&MatchRequest::from_si(50.0, 25.0, 50.0, 1e9)).unwrap();
        assert_eq!(report.topologies(), vec![Topology::MatchedResistance]);
        assert_eq!(report.solutions.len(), 2);

        let single = &report.solutions[0];
        assert_eq!(single.layout, Layout::SeriesOnly);
        assert_eq!(single.immittances[0], Immittance::Reactance(-25.0));
        assert_eq!(single.element1.kind, ElementKind::Capacitor);
        assert_eq!(single.element2.kind, ElementKind::None);

        let bypass = &report.solutions[1];
        assert_eq!(bypass.layout, Layout::ShuntAtLoad);
        // Shunt C mirrors the load susceptance, series L re-adds the reactance.
        assert_eq!(bypass.element1.kind, ElementKind::Capacitor);
        assert_eq!(bypass.element2.kind, ElementKind::Inductor);
        // Series element re-adds XL: X = −1/B2 = 25 Ω.
        assert!(nearly_equal(-1.0 / bypass.immittances[1].value(), 25.0, TOL));
    }

    #[test]
    fn matched_conductance_gives_single_and_bypass() {
        // RL = 25, XL = 25: GL = 25/1250 = 0.02 = Y0 for Z0 = 50.
        let report = solve(&MatchRequest::from_si(25.0, 25.0, 50.0, 1e9)).unwrap();
        let t4: Vec<_> = report.by_topology(Topology::MatchedConductance).collect();
        assert_eq!(t4.len(), 2);
        assert_eq!(report.by_topology(Topology::SeriesAtLoad).count(), 0);

        assert_eq!(t4[0].layout, Layout::ShuntOnly);
        assert_eq!(t4[0].element1.kind, ElementKind::Capacitor);
        assert!(t4[0].element2.is_none());

        assert_eq!(t4[1].layout, Layout::SeriesAtLoad);
        assert_eq!(t4[1].immittances[0], Immittance::Reactance(-50.0));
        assert_eq!(t4[1].immittances[1], Immittance::Reactance(50.0));
        assert_eq!(t4[1].element1.kind, ElementKind::Capacitor);
        assert_eq!(t4[1].element2.kind, ElementKind::Inductor);
    }

    #[test]
    fn already_matched_load_returns_no_networks() {
        let report = solve(&MatchRequest::from_si(50.0, 0.0, 50.0, 1e9)).unwrap();
        assert!(report.already_matched);
        assert!(report.solutions.is_empty());
    }

    #[test]
    fn resistance_within_tolerance_routes_to_degenerate_branch() {
        let z0 = 50.0;
        let rl = z0 * (1.0 - 1e-13);
        let report = solve(&MatchRequest::from_si(rl, 10.0, z0, 1e9)).unwrap();
        assert_eq!(report.topologies(), vec![Topology::MatchedResistance]);

        let report = solve(&MatchRequest::from_si(rl, 0.0, z0, 1e9)).unwrap();
        assert!(report.already_matched);
        assert!(report.solutions.is_empty());
    }

    #[test]
    fn overlapping_branches_return_union() {
        // RL < Z0 and GL < Y0 at the same time.
        let report = solve(&MatchRequest::from_si(25.0, 40.0, 50.0, 1e9)).unwrap();
        assert_eq!(
            report.topologies(),
            vec![Topology::SeriesAtLoad, Topology::ShuntAtLoad]
        );
        assert_eq!(report.solutions.len(), 4);
    }

    #[test]
    fn conductance_match_suppresses_series_family() {
        // GL = 10/500 = Y0: the series-at-load first root would be a bare wire.
        let report = solve(&MatchRequest::from_si(10.0, 20.0, 50.0, 1e9)).unwrap();
        assert_eq!(report.topologies(), vec![Topology::MatchedConductance]);
    }

    #[test]
    fn rejects_non_physical_inputs() {
        let cases = [
            (0.0, 0.0, 50.0, 1e9, "load resistance"),
            (-5.0, 0.0, 50.0, 1e9, "load resistance"),
            (25.0, 0.0, 0.0, 1e9, "reference impedance"),
            (25.0, 0.0, -50.0, 1e9, "reference impedance"),
            (25.0, 0.0, 50.0, 0.0, "frequency"),
            (25.0, f64::NAN, 50.0, 1e9, "load reactance"),
            (f64::INFINITY, 0.0, 50.0, 1e9, "load resistance"),
        ];
        for (rl, xl, z0, f, expected) in cases {
            match solve_matching_network(rl, xl, z0, f) {
                Err(MatchError::InvalidInput { what, .. }) => assert_eq!(what, expected),
                other => panic!("expected InvalidInput for {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_vanishing_resistance_ratio() {
        let err = solve_matching_network(1e-12, 5.0, 50.0, 1e9).unwrap_err();
        assert!(matches!(err, MatchError::InvalidInput { .. }));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::verify::input_impedance;
    use mn_core::numeric::{Tolerances, nearly_equal};
    use num_complex::Complex64;
    use proptest::prelude::*;

    fn load_strategy() -> impl Strategy<Value = (f64, f64, f64, f64)> {
        (0.1_f64..500.0, -500.0_f64..500.0, 1.0_f64..300.0, 1e3_f64..1e10)
    }

    proptest! {
        #[test]
        fn every_solution_presents_reference((rl, xl, z0, f) in load_strategy()) {
            let report = solve(&MatchRequest::from_si(rl, xl, z0, f)).unwrap();
            let omega = angular(hz(f));
            for s in &report.solutions {
                let z_in = input_impedance(&report.load, s, omega);
                prop_assert!(
                    (z_in - Complex64::new(z0, 0.0)).norm() <= 1e-9 * z0,
                    "{s:?} gives {z_in}"
                );
            }
        }

        #[test]
        fn non_degenerate_loads_get_at_least_two_networks((rl, xl, z0, f) in load_strategy()) {
            prop_assume!((rl - z0).abs() / z0 > 1e-6);
            let report = solve(&MatchRequest::from_si(rl, xl, z0, f)).unwrap();
            prop_assert!(!report.already_matched);
            prop_assert!(report.solutions.len() >= 2);
            for t in [Topology::SeriesAtLoad, Topology::ShuntAtLoad] {
                let n = report.by_topology(t).count();
                prop_assert!(n == 0 || n == 2);
            }
            if rl < z0 {
                prop_assert_eq!(report.by_topology(Topology::SeriesAtLoad).count(), 2);
            } else {
                prop_assert_eq!(report.by_topology(Topology::ShuntAtLoad).count(), 2);
            }
        }

        #[test]
        fn series_and_shunt_families_are_dual((rl, xl, z0, f) in load_strategy()) {
            prop_assume!(rl / z0 < 1.0 - 1e-6);
            let original = solve(&MatchRequest::from_si(rl, xl, z0, f)).unwrap();

            // Z' = Z0²/ZL has the normalized admittance of the original's
            // normalized impedance.
            let dual_load =
                Load::from_impedance(Complex64::new(z0 * z0, 0.0) / Complex64::new(rl, xl));
            let dual = solve(&MatchRequest::new(dual_load, ohm(z0), hz(f))).unwrap();

            let series: Vec<_> = original.by_topology(Topology::SeriesAtLoad).collect();
            let shunt: Vec<_> = dual.by_topology(Topology::ShuntAtLoad).collect();
            prop_assert_eq!(series.len(), 2);
            prop_assert_eq!(shunt.len(), 2);

            let tol = Tolerances { abs: 1e-12 / z0, rel: 1e-8 };
            for (s, d) in series.iter().zip(&shunt) {
                for k in 0..2 {
                    let x = s.immittances[k].value();
                    let b = d.immittances[k].value();
                    prop_assert!(nearly_equal(b, x / (z0 * z0), tol), "x = {x}, b = {b}");
                }
            }
        }

        #[test]
        fn component_values_reproduce_immittances((rl, xl, z0, f) in load_strategy()) {
            let sols = solve_matching_network(rl, xl, z0, f).unwrap();
            let omega = angular(hz(f));
            let tol = Tolerances { abs: 0.0, rel: 1e-9 };
            for s in &sols {
                for (imm, el) in s.immittances.iter().zip(s.elements()) {
                    if el.is_none() {
                        prop_assert!(imm.is_zero());
                        continue;
                    }
                    let recovered = match imm {
                        Immittance::Reactance(_) => el.reactance(omega),
                        Immittance::Susceptance(_) => el.susceptance(omega),
                    };
                    prop_assert!(nearly_equal(recovered, imm.value(), tol));
                }
            }
        }
    }
}
