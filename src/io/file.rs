//! Screenshots replayed from disk

use super::{CaptureError, ScreenCapture};
use image::RgbImage;
use ktane_cv::ImageUtils;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Loads one PNG per capture, in order; runs out like a stalled backend.
#[derive(Debug, Clone, Default)]
pub struct FileCapture {
    paths: VecDeque<PathBuf>,
}

impl FileCapture {
    pub fn new(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            paths: paths.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.paths.len()
    }
}

impl ScreenCapture for FileCapture {
    fn capture(&mut self, timeout: Duration) -> Result<RgbImage, CaptureError> {
        let path = self.paths.pop_front().ok_or(CaptureError::Timeout(timeout))?;
        debug!(path = %path.display(), "loading screenshot");
        ImageUtils::load_color(&path).map_err(|e| CaptureError::Backend(format!("{e:#}")))
    }
}
