//! Ghost-layer boundary conditions for a padded 3D solute grid.
//!
//! A multigrid solver owns one [`PaddedGrid`] per solute species and picks a
//! [`Boundary`] for it at setup. Around every relaxation sweep it calls
//! [`BoundaryCondition::refresh`] so that stencils reaching into the ghost
//! layer see physically meaningful values; while building its geometry it asks
//! [`BoundaryCondition::is_carrier`] which cells are solid substratum.

pub mod boundary_condition;
pub mod error;
pub mod grid;
pub mod results;
pub mod serialize;
pub mod setup;
pub mod timestep;

pub use boundary_condition::{
    carrier_mask, Biofilm, Boundary, BoundaryCondition, FaceRule, SurroundedByBulk, Tissue,
    ZeroFluxBox,
};
pub use error::{Error, Result};
pub use grid::{PaddedGrid, REFERENCE_CELL};
pub use results::ResultsFile;
pub use setup::{BoundarySetup, SpeciesBoundary};
pub use timestep::TimeStep;
