// mn-core/src/units.rs

use uom::si::f64::{
    Capacitance as UomCapacitance, ElectricalConductance as UomElectricalConductance,
    ElectricalResistance as UomElectricalResistance, Frequency as UomFrequency,
    Inductance as UomInductance,
};

// Public canonical unit types (SI, f64)
pub type Capacitance = UomCapacitance;
pub type Conductance = UomElectricalConductance;
pub type Frequency = UomFrequency;
pub type Inductance = UomInductance;
pub type Resistance = UomElectricalResistance;

/// Reactance shares the dimension of resistance (ohm).
pub type Reactance = UomElectricalResistance;
/// Susceptance shares the dimension of conductance (siemens).
pub type Susceptance = UomElectricalConductance;

#[inline]
pub fn ohm(v: f64) -> Resistance {
    use uom::si::electrical_resistance::ohm as unit;
    Resistance::new::<unit>(v)
}

#[inline]
pub fn siemens(v: f64) -> Conductance {
    use uom::si::electrical_conductance::siemens as unit;
    Conductance::new::<unit>(v)
}

#[inline]
pub fn hz(v: f64) -> Frequency {
    use uom::si::frequency::hertz;
    Frequency::new::<hertz>(v)
}

#[inline]
pub fn henry(v: f64) -> Inductance {
    use uom::si::inductance::henry as unit;
    Inductance::new::<unit>(v)
}

#[inline]
pub fn farad(v: f64) -> Capacitance {
    use uom::si::capacitance::farad as unit;
    Capacitance::new::<unit>(v)
}

/// Angular frequency ω = 2πf in rad/s.
#[inline]
pub fn angular(f: Frequency) -> f64 {
    use uom::si::frequency::hertz;
    2.0 * core::f64::consts::PI * f.get::<hertz>()
}
