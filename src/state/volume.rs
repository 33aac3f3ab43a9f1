use thiserror::Error;

pub const DEFAULT_VOLUME: u8 = 50;
pub const MAX_VOLUME: u8 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VolumeError {
    #[error("volume must be between 0 and 100, got {0}")]
    OutOfRange(i64),
}

/// Playback level in percent handed to the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeLevel(u8);

impl Default for VolumeLevel {
    fn default() -> Self {
        VolumeLevel(DEFAULT_VOLUME)
    }
}

impl VolumeLevel {
    /// Build a level from caller input, rejecting anything outside 0..=100.
    pub fn new(value: i64) -> Result<Self, VolumeError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= MAX_VOLUME)
            .map(VolumeLevel)
            .ok_or(VolumeError::OutOfRange(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Store `value` as-is. Out-of-range input is the caller's mistake and
    /// leaves the current level untouched.
    pub fn set(&mut self, value: i64) -> Result<(), VolumeError> {
        *self = Self::new(value)?;
        Ok(())
    }

    /// Move by `delta`, stopping at either end of the range.
    pub fn step(&mut self, delta: i64) -> Result<(), VolumeError> {
        let target = i64::from(self.0)
            .saturating_add(delta)
            .clamp(0, i64::from(MAX_VOLUME));
        self.set(target)
    }
}
