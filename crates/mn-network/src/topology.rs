//! L-section topologies and schematic layouts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which family of formulas produced a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Topology {
    /// Series element toward the load, shunt toward the source (`RL < Z0`).
    SeriesAtLoad,
    /// Shunt element toward the load, series toward the source (`GL < Y0`).
    ShuntAtLoad,
    /// Degenerate `RL = Z0` with reactive load.
    MatchedResistance,
    /// Degenerate `GL = Y0` with reactive load.
    MatchedConductance,
}

impl Topology {
    pub const ALL: [Topology; 4] = [
        Topology::SeriesAtLoad,
        Topology::ShuntAtLoad,
        Topology::MatchedResistance,
        Topology::MatchedConductance,
    ];

    /// Conventional topology number, 1 through 4.
    pub fn number(&self) -> u8 {
        match self {
            Topology::SeriesAtLoad => 1,
            Topology::ShuntAtLoad => 2,
            Topology::MatchedResistance => 3,
            Topology::MatchedConductance => 4,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Topology::SeriesAtLoad => "series element toward load",
            Topology::ShuntAtLoad => "shunt element toward load",
            Topology::MatchedResistance => "RL = Z0",
            Topology::MatchedConductance => "GL = Y0",
        }
    }
}

impl From<Topology> for u8 {
    fn from(t: Topology) -> u8 {
        t.number()
    }
}

impl TryFrom<u8> for Topology {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Topology::ALL
            .into_iter()
            .find(|t| t.number() == n)
            .ok_or_else(|| format!("unknown topology {n}, expected 1..=4"))
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "topology {} ({})", self.number(), self.description())
    }
}

/// Physical arrangement of the elements between source (`Z0`) and load (`ZL`).
///
/// Element 1 always sits at the load side; element 2 at the source side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Series element 1 at the load, shunt element 2 across the source.
    SeriesAtLoad,
    /// Shunt element 1 across the load, series element 2 at the source.
    ShuntAtLoad,
    /// Single series element.
    SeriesOnly,
    /// Single shunt element.
    ShuntOnly,
}

impl Layout {
    pub fn element_count(&self) -> usize {
        match self {
            Layout::SeriesAtLoad | Layout::ShuntAtLoad => 2,
            Layout::SeriesOnly | Layout::ShuntOnly => 1,
        }
    }
}
