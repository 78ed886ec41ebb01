use crate::error::{Error, Result};
use crate::grid::{for_each_ghost, PaddedGrid};
use ndarray::Array3;
use serde::{Deserialize, Serialize};

/// How one face of the padded box obtains its ghost values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceRule {
    /// Zero flux: the ghost copies the adjacent interior cell.
    Mirror,
    /// Periodic: the ghost copies the interior cell on the opposite face.
    Wrap,
    /// The ghost is left as the caller set it.
    Hold,
}

/// Face rules indexed by `[axis][side]`, where side `0` is the low face
/// (index `0`) and side `1` the high face (index `dim + 1`).
pub type AxisRules = [[FaceRule; 2]; 3];

impl FaceRule {
    /// Interior index a ghost on this face reads from, `dim` being the
    /// interior extent of the axis.
    fn source(self, high: bool, dim: usize) -> Option<usize> {
        match (self, high) {
            (FaceRule::Hold, _) => None,
            (FaceRule::Mirror, false) | (FaceRule::Wrap, true) => Some(1),
            (FaceRule::Mirror, true) | (FaceRule::Wrap, false) => Some(dim),
        }
    }
}

/// Resolves the interior cell a ghost cell reads from.
///
/// Every axis is mapped independently, so edge and corner ghosts read the
/// interior cell whose index is the composition of the per-axis sources.
/// A `Hold` rule on any axis the cell is a ghost of wins and yields `None`.
pub fn ghost_source(rules: &AxisRules, interior: [usize; 3], pos: [usize; 3]) -> Option<[usize; 3]> {
    let mut source = pos;
    for axis in 0..3 {
        let dim = interior[axis];
        if pos[axis] == 0 {
            source[axis] = rules[axis][0].source(false, dim)?;
        } else if pos[axis] == dim + 1 {
            source[axis] = rules[axis][1].source(true, dim)?;
        }
    }
    Some(source)
}

/// Rewrites every non-held ghost cell as `value(source)`, where `source` is
/// the interior value resolved by [`ghost_source`]. Interior cells are only
/// read, never written, and neither is the `keep` cell.
pub(crate) fn refresh_with(
    grid: &mut PaddedGrid,
    rules: &AxisRules,
    keep: Option<[usize; 3]>,
    mut value: impl FnMut(f64) -> f64,
) {
    let interior = grid.interior_shape();
    for_each_ghost(grid.padded_shape(), |pos| {
        if Some(pos) == keep {
            return;
        }
        if let Some(source) = ghost_source(rules, interior, pos) {
            grid[pos] = value(grid[source]);
        }
    });
}

/// Contract between the multigrid solver and a boundary treatment.
///
/// `refresh` is called around every relaxation sweep and must only touch the
/// ghost layer. `is_carrier` is queried once per cell while the solver builds
/// its geometry.
pub trait BoundaryCondition {
    fn rules(&self) -> AxisRules;

    #[allow(unused_variables)]
    fn refresh(&self, grid: &mut PaddedGrid, bulk_concentration: f64) {
        refresh_with(grid, &self.rules(), None, |source| source);
    }

    fn is_carrier(&self, pos: [usize; 3]) -> bool;
}

mod biofilm_boundary;
pub use biofilm_boundary::*;

mod box_boundary;
pub use box_boundary::*;

mod bulk_boundary;
pub use bulk_boundary::*;

mod tissue_boundary;
pub use tissue_boundary::*;

/// One boundary treatment, chosen per solute species at setup.
///
/// Serialized with a `type` tag, e.g. `{"type": "Tissue",
/// "transfer_coefficient": 0.3}`; the coefficient is validated again when
/// reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoundaryConfig", into = "BoundaryConfig")]
pub enum Boundary {
    Biofilm(Biofilm),
    Box(ZeroFluxBox),
    SurroundedByBulk(SurroundedByBulk),
    Tissue(Tissue),
}

impl Boundary {
    pub fn name(&self) -> &'static str {
        match self {
            Boundary::Biofilm(_) => "Biofilm",
            Boundary::Box(_) => "Box",
            Boundary::SurroundedByBulk(_) => "SurroundedByBulk",
            Boundary::Tissue(_) => "Tissue",
        }
    }
}

impl BoundaryCondition for Boundary {
    fn rules(&self) -> AxisRules {
        match self {
            Boundary::Biofilm(boundary) => boundary.rules(),
            Boundary::Box(boundary) => boundary.rules(),
            Boundary::SurroundedByBulk(boundary) => boundary.rules(),
            Boundary::Tissue(boundary) => boundary.rules(),
        }
    }

    fn refresh(&self, grid: &mut PaddedGrid, bulk_concentration: f64) {
        log::trace!("refreshing {} ghost layer", self.name());
        match self {
            Boundary::Biofilm(boundary) => boundary.refresh(grid, bulk_concentration),
            Boundary::Box(boundary) => boundary.refresh(grid, bulk_concentration),
            Boundary::SurroundedByBulk(boundary) => boundary.refresh(grid, bulk_concentration),
            Boundary::Tissue(boundary) => boundary.refresh(grid, bulk_concentration),
        }
    }

    fn is_carrier(&self, pos: [usize; 3]) -> bool {
        match self {
            Boundary::Biofilm(boundary) => boundary.is_carrier(pos),
            Boundary::Box(boundary) => boundary.is_carrier(pos),
            Boundary::SurroundedByBulk(boundary) => boundary.is_carrier(pos),
            Boundary::Tissue(boundary) => boundary.is_carrier(pos),
        }
    }
}

impl From<Biofilm> for Boundary {
    fn from(boundary: Biofilm) -> Self {
        Boundary::Biofilm(boundary)
    }
}

impl From<ZeroFluxBox> for Boundary {
    fn from(boundary: ZeroFluxBox) -> Self {
        Boundary::Box(boundary)
    }
}

impl From<SurroundedByBulk> for Boundary {
    fn from(boundary: SurroundedByBulk) -> Self {
        Boundary::SurroundedByBulk(boundary)
    }
}

impl From<Tissue> for Boundary {
    fn from(boundary: Tissue) -> Self {
        Boundary::Tissue(boundary)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
enum BoundaryConfig {
    Biofilm,
    Box,
    SurroundedByBulk,
    Tissue { transfer_coefficient: f64 },
}

impl TryFrom<BoundaryConfig> for Boundary {
    type Error = Error;

    fn try_from(config: BoundaryConfig) -> Result<Self> {
        Ok(match config {
            BoundaryConfig::Biofilm => Biofilm.into(),
            BoundaryConfig::Box => ZeroFluxBox.into(),
            BoundaryConfig::SurroundedByBulk => SurroundedByBulk.into(),
            BoundaryConfig::Tissue {
                transfer_coefficient,
            } => Tissue::new(transfer_coefficient)?.into(),
        })
    }
}

impl From<Boundary> for BoundaryConfig {
    fn from(boundary: Boundary) -> Self {
        match boundary {
            Boundary::Biofilm(_) => BoundaryConfig::Biofilm,
            Boundary::Box(_) => BoundaryConfig::Box,
            Boundary::SurroundedByBulk(_) => BoundaryConfig::SurroundedByBulk,
            Boundary::Tissue(tissue) => BoundaryConfig::Tissue {
                transfer_coefficient: tissue.transfer_coefficient(),
            },
        }
    }
}

/// Evaluates `is_carrier` once per interior cell. The mask is indexed by
/// interior position, so mask `[i, j, k]` answers for grid cell
/// `[i + 1, j + 1, k + 1]`.
pub fn carrier_mask(boundary: &impl BoundaryCondition, interior: [usize; 3]) -> Array3<bool> {
    let [n, m, l] = interior;
    Array3::from_shape_fn((n, m, l), |(i, j, k)| boundary.is_carrier([i + 1, j + 1, k + 1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::FaceRule::*;

    #[test]
    fn sources_compose_per_axis() {
        let rules = [[Wrap, Wrap], [Mirror, Mirror], [Mirror, Hold]];
        let interior = [3, 4, 5];
        assert_eq!(ghost_source(&rules, interior, [0, 2, 2]), Some([3, 2, 2]));
        assert_eq!(ghost_source(&rules, interior, [4, 2, 2]), Some([1, 2, 2]));
        assert_eq!(ghost_source(&rules, interior, [2, 0, 2]), Some([2, 1, 2]));
        assert_eq!(ghost_source(&rules, interior, [2, 5, 2]), Some([2, 4, 2]));
        assert_eq!(ghost_source(&rules, interior, [0, 5, 0]), Some([3, 4, 1]));
        assert_eq!(ghost_source(&rules, interior, [2, 2, 6]), None);
        assert_eq!(ghost_source(&rules, interior, [0, 0, 6]), None);
        assert_eq!(ghost_source(&rules, interior, [2, 2, 2]), Some([2, 2, 2]));
    }

    #[test]
    fn config_round_trips_through_json() {
        let boundaries: Vec<Boundary> = vec![
            Biofilm.into(),
            ZeroFluxBox.into(),
            SurroundedByBulk.into(),
            Tissue::new(0.25).unwrap().into(),
        ];
        let json = serde_json::to_string(&boundaries).unwrap();
        assert!(json.contains(r#"{"type":"Tissue","transfer_coefficient":0.25}"#));
        let back: Vec<Boundary> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, boundaries);
    }

    #[test]
    fn invalid_coefficient_is_rejected_when_reading() {
        let result = serde_json::from_str::<Boundary>(r#"{"type":"Tissue","transfer_coefficient":1.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn no_variant_marks_carrier_cells() {
        for boundary in [
            Boundary::from(Biofilm),
            ZeroFluxBox.into(),
            SurroundedByBulk.into(),
            Tissue::new(0.5).unwrap().into(),
        ] {
            let mask = carrier_mask(&boundary, [2, 3, 4]);
            assert_eq!(mask.shape(), &[2, 3, 4]);
            assert!(mask.iter().all(|&carrier| !carrier), "{}", boundary.name());
        }
    }
}
