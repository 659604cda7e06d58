//! Job file schema definitions.

use serde::{Deserialize, Serialize};

/// A batch of loads to match, usually read from YAML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobFile {
    pub version: u32,
    #[serde(default)]
    pub name: String,
    /// Default reference impedance `Z0` for every case.
    #[serde(default = "default_reference_ohm")]
    pub reference_ohm: f64,
    /// Default operating frequency for every case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_hz: Option<f64>,
    #[serde(default)]
    pub cases: Vec<LoadCase>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoadCase {
    pub id: String,
    pub resistance_ohm: f64,
    #[serde(default)]
    pub reactance_ohm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_ohm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_hz: Option<f64>,
}

pub fn default_reference_ohm() -> f64 {
    50.0
}

impl JobFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: crate::migrate::LATEST_VERSION,
            name: name.into(),
            reference_ohm: default_reference_ohm(),
            frequency_hz: None,
            cases: Vec::new(),
        }
    }

    /// Reference impedance a case resolves to.
    pub fn reference_for(&self, case: &LoadCase) -> f64 {
        case.reference_ohm.unwrap_or(self.reference_ohm)
    }

    /// Operating frequency a case resolves to, if any is set.
    pub fn frequency_for(&self, case: &LoadCase) -> Option<f64> {
        case.frequency_hz.or(self.frequency_hz)
    }
}

impl LoadCase {
    pub fn new(id: impl Into<String>, resistance_ohm: f64, reactance_ohm: f64) -> Self {
        Self {
            id: id.into(),
            resistance_ohm,
            reactance_ohm,
            reference_ohm: None,
            frequency_hz: None,
        }
    }
}
