//! Region-based active-contour force maps.
//!
//! A force model is bound to one grayscale image and turns a binary mask
//! (`true` = inside) into a same-shaped `f64` map. The sign of each entry
//! tells the contour update whether that pixel belongs with the inside
//! region (negative) or the outside region (positive).
//!
//! Models:
//! - [`PiecewiseConstantForce`]: squared distance to the two regional means.
//! - [`GaussianLikelihoodForce`]: log-likelihood ratio of two fitted normals.
//!   Fails on an empty or zero-variance region.
//! - [`LocalGaussianForce`]: Gaussian-weighted local energy computed with a
//!   fixed number of separable blurs; the border policy comes from the
//!   [`rf_blur::Convolution`] it is built with (zero padding by default).
//!
//! [`ImageForce`] wraps any [`ForceModel`] and caches the last result.
//! [`ForceConfig`] describes a model in JSON and builds an [`AnyForce`].

pub mod config;
pub mod facade;
pub mod likelihood;
pub mod local;
pub mod model;
pub mod piecewise;
pub mod stats;
pub mod summary;

pub use config::{BorderPolicy, ForceConfig};
pub use facade::ImageForce;
pub use likelihood::GaussianLikelihoodForce;
pub use local::LocalGaussianForce;
pub use model::{AnyForce, ForceModel};
pub use piecewise::PiecewiseConstantForce;
pub use stats::{RegionStats, region_mean, region_stats};
pub use summary::ForceSummary;
