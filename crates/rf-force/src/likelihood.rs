use log::trace;
use rf_core::{Error, Image, Mask, Region};

use crate::model::ForceModel;
use crate::stats::region_stats;

/// Log-likelihood ratio between two Gaussian intensity models, one fitted
/// per region.
///
/// `force = -(log p_in(I) - log p_out(I))`, evaluated over the whole image.
/// Both regions need a non-zero standard deviation.
#[derive(Debug, Clone)]
pub struct GaussianLikelihoodForce {
    image: Image<f64>,
}

impl GaussianLikelihoodForce {
    pub fn new(image: Image<f64>) -> Self {
        Self { image }
    }
}

impl ForceModel for GaussianLikelihoodForce {
    fn name(&self) -> &'static str {
        "gaussian_likelihood"
    }

    fn image(&self) -> &Image<f64> {
        &self.image
    }

    fn compute_force(&self, mask: &Mask) -> Result<Image<f64>, Error> {
        self.image.ensure_same_shape(mask)?;

        let inside = region_stats(&self.image, mask, Region::Inside)?;
        let outside = region_stats(&self.image, mask, Region::Outside)?;
        trace!(
            "likelihood fit: in=({:.4}, {:.4}) out=({:.4}, {:.4})",
            inside.mean, inside.std, outside.mean, outside.std
        );

        Ok(self
            .image
            .map(|&v| -(inside.log_density(v) - outside.log_density(v))))
    }
}
