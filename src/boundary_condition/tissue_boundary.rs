use super::*;
use crate::grid::REFERENCE_CELL;

/// Tissue exchanging solute with the surrounding bulk through all six faces.
///
/// Each ghost cell is a linear mix of the bulk concentration and the nearest
/// interior cell:
///
/// `ghost = c * bulk + (1 - c) * interior`
///
/// With `c = 0` this is a zero-flux box, with `c = 1` every ghost equals the
/// bulk concentration. The reference cell `[0, 0, 0]` is left alone so that
/// callers keeping the bulk value there read the same value every sweep.
#[derive(Debug, Serialize, Copy, Clone, PartialEq)]
pub struct Tissue {
    transfer_coefficient: f64,
}

impl Tissue {
    pub const RULES: AxisRules = [[FaceRule::Mirror; 2]; 3];

    pub fn new(transfer_coefficient: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&transfer_coefficient) {
            return Err(Error::InvalidConfiguration {
                parameter: "transfer_coefficient",
                value: transfer_coefficient,
            });
        }
        log::debug!("tissue boundary with transfer coefficient {}", transfer_coefficient);
        Ok(Tissue {
            transfer_coefficient,
        })
    }

    pub fn transfer_coefficient(&self) -> f64 {
        self.transfer_coefficient
    }
}

impl BoundaryCondition for Tissue {
    fn rules(&self) -> AxisRules {
        Self::RULES
    }

    fn refresh(&self, grid: &mut PaddedGrid, bulk_concentration: f64) {
        let c = self.transfer_coefficient;
        let external = c * bulk_concentration;
        refresh_with(grid, &Self::RULES, Some(REFERENCE_CELL), |interior| {
            external + (1. - c) * interior
        });
    }

    fn is_carrier(&self, _pos: [usize; 3]) -> bool {
        false
    }
}

impl<'de> Deserialize<'de> for Tissue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Unchecked {
            transfer_coefficient: f64,
        }

        let Unchecked {
            transfer_coefficient,
        } = Unchecked::deserialize(deserializer)?;
        Tissue::new(transfer_coefficient).map_err(serde::de::Error::custom)
    }
}
