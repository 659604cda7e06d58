//! mn-network: two-element L-section matching-network synthesis.
//!
//! Given a complex load `ZL = RL + jXL`, a real reference impedance `Z0` and an
//! operating frequency, finds every L-section that presents `Z0` at the source
//! port and sizes its inductors and capacitors.
//!
//! - `solver`: branch selection and the closed-form formulas
//! - `element`: reactance/susceptance to L or C conversion
//! - `topology`: topology and layout tags
//! - `schematic`: box-drawing diagram per layout
//! - `verify`: rebuilds a network to check what the source sees
//!
//! # Example
//!
//! ```
//! use mn_network::{ElementKind, Topology, solve_matching_network};
//!
//! let sols = solve_matching_network(25.0, 0.0, 50.0, 2.4e9).unwrap();
//! assert_eq!(sols.len(), 2);
//! assert_eq!(sols[0].topology, Topology::SeriesAtLoad);
//! assert_eq!(sols[0].element1.kind, ElementKind::Inductor);
//! assert_eq!(sols[0].element2.kind, ElementKind::Capacitor);
//! ```

pub mod element;
pub mod error;
pub mod immittance;
pub mod schematic;
pub mod solver;
pub mod topology;
pub mod verify;

// Re-exports
pub use element::{Element, ElementKind};
pub use error::{MatchError, MatchResult};
pub use immittance::{Immittance, Load};
pub use solver::{MatchReport, MatchRequest, NetworkSolution, solve, solve_matching_network};
pub use topology::{Layout, Topology};
