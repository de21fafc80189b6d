//! Annotation-image compositing and contrast enhancement

/// Half-selection compositing onto an original image
pub mod composite;
/// Grayscale conversion and adaptive histogram equalization
pub mod enhance;
