//! Utility modules

pub mod image;
pub mod mask;

pub use image::{HsvImage, ImageUtils, Rotation};
pub use mask::{ColorRange, Kernel, MaskOps};
