use super::*;
use super::FaceRule::*;

/// Planar biofilm on a substratum.
///
/// The two lateral axes are periodic. Along the vertical axis the substratum
/// face (index `0`) is zero flux and the bulk-liquid face (index `l + 1`) is a
/// fixed concentration the caller writes once and `refresh` never touches.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Default)]
pub struct Biofilm;

impl Biofilm {
    pub const RULES: AxisRules = [[Wrap, Wrap], [Wrap, Wrap], [Mirror, Hold]];

    pub fn new() -> Self {
        Biofilm
    }
}

impl BoundaryCondition for Biofilm {
    fn rules(&self) -> AxisRules {
        Self::RULES
    }

    // The carrier sits below the substratum face, outside the grid.
    fn is_carrier(&self, _pos: [usize; 3]) -> bool {
        false
    }
}
