//! Computer vision for the bomb-defusal engine
//!
//! Color segmentation, contour geometry and one detector per module kind.
//! Detectors are pure functions of a frame: they return `None` or an empty
//! result when the picture is ambiguous and leave retrying to the caller.

pub mod bbox;
pub mod classify;
pub mod contour;
pub mod detection;
pub mod error;
pub mod utils;

// Re-export commonly used types
pub use bbox::BBox;
pub use classify::{Alphabet, Crop};
pub use contour::Contour;
pub use detection::DetectionConfig;
pub use error::DetectionError;
pub use utils::{ColorRange, HsvImage, ImageUtils, MaskOps};

// Error handling
pub type Result<T> = anyhow::Result<T>;

/// Core traits for the CV system
pub mod traits {
    use super::*;

    /// Labels image crops; one label per crop, in order.
    ///
    /// Implementations must be deterministic for identical input.
    pub trait Classifier {
        fn classify(&self, alphabet: Alphabet, crops: &[Crop]) -> Result<Vec<usize>>;
    }
}
