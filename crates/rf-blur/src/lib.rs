//! Gaussian smoothing used as a local weighted-sum primitive.
//!
//! Coordinates follow the pixel-center convention and kernels are centered
//! on the output pixel. Window sizes are odd, `2 * radius + 1`.
//!
//! The default border policy is zero padding (`BorderMode::Constant(0.0)`):
//! near the image edge the blur of an all-ones image drops below one, so the
//! blur doubles as a measure of local kernel weight mass. `Clamp` and
//! `Reflect101` keep constant images constant instead.

pub mod blur2d;
pub mod conv1d;
pub mod kernels1d;

pub use blur2d::{Convolution, SeparableGaussian, separable_blur_f64};
pub use conv1d::convolve_f64;
pub use kernels1d::GaussianKernel1D;
