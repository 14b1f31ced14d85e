use log::trace;
use rf_core::{Error, Image, Mask, Region};

use crate::model::{ForceModel, check_weights};
use crate::stats::region_mean;

/// Chan-Vese style force from the two regional means.
///
/// `force = k1 * (I - mean_in)^2 - k0 * (I - mean_out)^2` at every pixel.
/// When the mask covers the whole image `mean_out` is taken as `0.0`.
#[derive(Debug, Clone)]
pub struct PiecewiseConstantForce {
    image: Image<f64>,
    k0: f64,
    k1: f64,
}

impl PiecewiseConstantForce {
    /// `k0` weights the outside term, `k1` the inside term.
    pub fn new(image: Image<f64>, k0: f64, k1: f64) -> Result<Self, Error> {
        check_weights(k0, k1)?;
        Ok(Self { image, k0, k1 })
    }

    pub fn k0(&self) -> f64 {
        self.k0
    }

    pub fn k1(&self) -> f64 {
        self.k1
    }
}

impl ForceModel for PiecewiseConstantForce {
    fn name(&self) -> &'static str {
        "piecewise_constant"
    }

    fn image(&self) -> &Image<f64> {
        &self.image
    }

    fn compute_force(&self, mask: &Mask) -> Result<Image<f64>, Error> {
        self.image.ensure_same_shape(mask)?;

        let mean_out = if mask.data().iter().all(|&m| m) {
            0.0
        } else {
            region_mean(&self.image, mask, Region::Outside)?
        };
        let mean_in = region_mean(&self.image, mask, Region::Inside)?;
        trace!("piecewise means: in={mean_in:.6} out={mean_out:.6}");

        let (k0, k1) = (self.k0, self.k1);
        Ok(self
            .image
            .map(|&v| k1 * (v - mean_in).powi(2) - k0 * (v - mean_out).powi(2)))
    }
}

#[cfg(test)]
mod tests {
    use rf_core::{Error, Image, Mask, Region};

    use super::PiecewiseConstantForce;
    use crate::model::ForceModel;

    fn checker(w: usize, h: usize) -> Image<f64> {
        Image::from_fn(w, h, |x, y| ((x * 31 + y * 17) % 23) as f64)
    }

    #[test]
    fn force_matches_closed_form() {
        let img = checker(6, 5);
        let mask = Mask::from_rect(6, 5, 1, 1, 3, 2);
        let model = PiecewiseConstantForce::new(img.clone(), 0.5, 2.0).expect("valid model");

        let force = model.compute_force(&mask).expect("valid force");
        assert_eq!(force.dims(), img.dims());

        let (mut sum_in, mut n_in, mut sum_out, mut n_out) = (0.0, 0, 0.0, 0);
        for (&v, &m) in img.data().iter().zip(mask.data()) {
            if m {
                sum_in += v;
                n_in += 1;
            } else {
                sum_out += v;
                n_out += 1;
            }
        }
        let (mean_in, mean_out) = (sum_in / n_in as f64, sum_out / n_out as f64);
        for (&f, &v) in force.data().iter().zip(img.data()) {
            let expected = 2.0 * (v - mean_in).powi(2) - 0.5 * (v - mean_out).powi(2);
            assert!((f - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn full_mask_uses_zero_outside_mean() {
        let img = checker(4, 4);
        let mask = Mask::new_fill(4, 4, true);
        let model = PiecewiseConstantForce::new(img.clone(), 1.5, 1.0).expect("valid model");

        let force = model.compute_force(&mask).expect("valid force");
        let mean_in = img.data().iter().sum::<f64>() / 16.0;
        for (&f, &v) in force.data().iter().zip(img.data()) {
            let expected = (v - mean_in).powi(2) - 1.5 * v * v;
            assert!((f - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_inside_fails() {
        let model = PiecewiseConstantForce::new(checker(3, 3), 1.0, 1.0).expect("valid model");
        let mask = Mask::new_fill(3, 3, false);
        assert_eq!(
            model.compute_force(&mask),
            Err(Error::EmptyRegion {
                region: Region::Inside
            })
        );
    }

    #[test]
    fn rejects_mismatched_mask_and_bad_weights() {
        let model = PiecewiseConstantForce::new(checker(3, 3), 1.0, 1.0).expect("valid model");
        assert!(matches!(
            model.compute_force(&Mask::new_fill(3, 4, true)),
            Err(Error::ShapeMismatch { .. })
        ));
        assert!(matches!(
            PiecewiseConstantForce::new(checker(3, 3), -0.1, 1.0),
            Err(Error::InvalidWeight)
        ));
    }
}
