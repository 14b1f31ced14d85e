//! Foundational primitives for region force maps.
//!
//! ## Images and Stride
//! [`Image`] owns row-major pixels with `stride == width`. [`ImageView`] is a
//! borrowed view whose element stride may exceed `width`, so callers can wrap
//! padded buffers from a decoder without copying. Force models work on
//! `Image<f64>`; use [`to_f64`] to promote integer or `f32` inputs.
//!
//! ## Masks
//! A [`Mask`] is an `Image<bool>`. `true` pixels form the inside region and
//! `false` pixels the outside region; [`Region`] names either side so that
//! the complement never has to be materialized.
//!
//! ## Border Modes
//! Convolution supports clamp, constant fill and reflect-101 behavior.
//! Zero padding is `BorderMode::Constant(0.0)`.

mod border;
mod error;
mod image;
mod mask;

pub use border::{BorderMode, map_index};
pub use error::Error;
pub use image::{Image, ImageView, to_f64};
pub use mask::{Mask, Region};
