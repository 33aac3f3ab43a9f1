/// Progress gained per like.
const PROGRESS_STEP: u8 = 10;
/// Progress never goes above a full meter.
const PROGRESS_MAX: u8 = 100;

/// Like count plus the meter it fills. Both fields change in the same call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LikeCounter {
    count: u64,
    progress: u8,
}

impl LikeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn like(&mut self) {
        self.count = self.count.saturating_add(1);
        self.progress = self.progress.saturating_add(PROGRESS_STEP).min(PROGRESS_MAX);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Fill level in percent, `min(100, 10 * count)`.
    pub fn progress(&self) -> u8 {
        self.progress
    }
}
