use crate::{
    error::RingError,
    types::{RingResult, SpacingMode},
};

pub const DEFAULT_SPACE_SIZE: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingConfig {
    pub space_size: u64,
    pub spacing: SpacingMode,
}

impl RingConfig {
    #[inline]
    pub fn new(space_size: u64, spacing: SpacingMode) -> Self {
        Self {
            space_size,
            spacing,
        }
    }

    pub fn validate(&self) -> RingResult<()> {
        if self.space_size == 0 {
            return Err(RingError::InvalidSpaceSize);
        }

        Ok(())
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            space_size: DEFAULT_SPACE_SIZE,
            spacing: SpacingMode::default(),
        }
    }
}
