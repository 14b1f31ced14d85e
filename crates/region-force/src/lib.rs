//! Umbrella crate for the `region-force` workspace.
//!
//! Re-exports the image core, the Gaussian blur service and the force
//! models, so drivers of a level-set loop only need one dependency.
//!
//! ```
//! use region_force::{Image, ImageForce, Mask, PiecewiseConstantForce};
//!
//! let img = Image::from_fn(8, 8, |x, y| (x * y) as f64);
//! let mask = Mask::from_rect(8, 8, 0, 0, 4, 4);
//! let mut force = ImageForce::new(PiecewiseConstantForce::new(img, 1.0, 1.0).unwrap());
//! assert_eq!(force.get_force(&mask).unwrap().dims(), (8, 8));
//! ```

pub use rf_blur::*;
pub use rf_core::*;
pub use rf_force::*;
