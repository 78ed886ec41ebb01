use super::*;

/// Closed box: no mass crosses any of the six faces.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Default)]
pub struct ZeroFluxBox;

impl ZeroFluxBox {
    pub const RULES: AxisRules = [[FaceRule::Mirror; 2]; 3];

    pub fn new() -> Self {
        ZeroFluxBox
    }
}

impl BoundaryCondition for ZeroFluxBox {
    fn rules(&self) -> AxisRules {
        Self::RULES
    }

    fn is_carrier(&self, _pos: [usize; 3]) -> bool {
        false
    }
}
