use crate::boundary_condition::{Boundary, BoundaryCondition};
use crate::error::{Error, Result};
use crate::grid::PaddedGrid;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Boundary treatment and bulk concentration of one solute species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesBoundary {
    pub name: String,
    pub boundary: Boundary,
    pub bulk_concentration: f64,
}

impl SpeciesBoundary {
    pub fn new(name: impl Into<String>, boundary: impl Into<Boundary>, bulk_concentration: f64) -> Self {
        SpeciesBoundary {
            name: name.into(),
            boundary: boundary.into(),
            bulk_concentration,
        }
    }

    pub fn refresh(&self, grid: &mut PaddedGrid) {
        self.boundary.refresh(grid, self.bulk_concentration);
    }
}

/// The boundary treatments a solver run was configured with, one per species.
///
/// When a species is listed more than once the later entry wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundarySetup {
    pub species: Vec<SpeciesBoundary>,
}

/*
 * Constructors
 */
impl BoundarySetup {
    pub fn new(species: Vec<SpeciesBoundary>) -> Self {
        let setup = BoundarySetup { species };
        setup.warn_on_duplicates();
        setup
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let setup: BoundarySetup = serde_json::from_str(json)?;
        setup.warn_on_duplicates();
        log::debug!("loaded boundary setup for {} species", setup.species.len());
        Ok(setup)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    fn warn_on_duplicates(&self) {
        let mut seen = HashSet::new();
        for species in self.species.iter() {
            if !seen.insert(species.name.as_str()) {
                log::warn!(
                    "species '{}' is configured more than once; the last entry is used",
                    species.name
                );
            }
        }
    }
}

/*
 * Access to data
 */
impl BoundarySetup {
    pub fn get(&self, name: &str) -> Result<&SpeciesBoundary> {
        self.species
            .iter()
            .rev()
            .find(|species| species.name == name)
            .ok_or_else(|| Error::UnknownSpecies(name.to_string()))
    }

    pub fn boundary(&self, name: &str) -> Result<Boundary> {
        Ok(self.get(name)?.boundary)
    }

    /// Refreshes the ghost layer of `grid` with the boundary configured for
    /// `name`.
    pub fn refresh(&self, name: &str, grid: &mut PaddedGrid) -> Result<()> {
        self.get(name)?.refresh(grid);
        Ok(())
    }
}
