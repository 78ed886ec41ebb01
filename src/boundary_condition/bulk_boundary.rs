use super::*;

/// Domain immersed in bulk liquid on every side.
///
/// Every ghost cell holds the bulk concentration the caller seeded, so
/// `refresh` leaves the grid untouched.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Default)]
pub struct SurroundedByBulk;

impl SurroundedByBulk {
    pub const RULES: AxisRules = [[FaceRule::Hold; 2]; 3];

    pub fn new() -> Self {
        SurroundedByBulk
    }
}

impl BoundaryCondition for SurroundedByBulk {
    fn rules(&self) -> AxisRules {
        Self::RULES
    }

    fn refresh(&self, _grid: &mut PaddedGrid, _bulk_concentration: f64) {}

    fn is_carrier(&self, _pos: [usize; 3]) -> bool {
        false
    }
}
