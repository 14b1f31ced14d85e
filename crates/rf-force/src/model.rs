use rf_core::{Error, Image, Mask};

use crate::likelihood::GaussianLikelihoodForce;
use crate::local::LocalGaussianForce;
use crate::piecewise::PiecewiseConstantForce;

/// A region force model bound to one image.
///
/// `compute_force` takes the mask by reference and keeps no per-call state,
/// so a model can be shared across threads and called reentrantly.
pub trait ForceModel {
    fn name(&self) -> &'static str;

    fn image(&self) -> &Image<f64>;

    /// Force map for `mask`, same shape as [`ForceModel::image`].
    ///
    /// Fails with [`Error::ShapeMismatch`] when the mask and image differ in
    /// size. Nothing is returned on failure.
    fn compute_force(&self, mask: &Mask) -> Result<Image<f64>, Error>;
}

pub(crate) fn check_weights(k0: f64, k1: f64) -> Result<(), Error> {
    if [k0, k1].iter().all(|k| k.is_finite() && *k >= 0.0) {
        Ok(())
    } else {
        Err(Error::InvalidWeight)
    }
}

/// One of the built-in models, chosen at construction time.
#[derive(Debug, Clone)]
pub enum AnyForce {
    PiecewiseConstant(PiecewiseConstantForce),
    GaussianLikelihood(GaussianLikelihoodForce),
    LocalGaussian(LocalGaussianForce),
}

impl ForceModel for AnyForce {
    fn name(&self) -> &'static str {
        match self {
            Self::PiecewiseConstant(m) => m.name(),
            Self::GaussianLikelihood(m) => m.name(),
            Self::LocalGaussian(m) => m.name(),
        }
    }

    fn image(&self) -> &Image<f64> {
        match self {
            Self::PiecewiseConstant(m) => m.image(),
            Self::GaussianLikelihood(m) => m.image(),
            Self::LocalGaussian(m) => m.image(),
        }
    }

    fn compute_force(&self, mask: &Mask) -> Result<Image<f64>, Error> {
        match self {
            Self::PiecewiseConstant(m) => m.compute_force(mask),
            Self::GaussianLikelihood(m) => m.compute_force(mask),
            Self::LocalGaussian(m) => m.compute_force(mask),
        }
    }
}

impl From<PiecewiseConstantForce> for AnyForce {
    fn from(m: PiecewiseConstantForce) -> Self {
        Self::PiecewiseConstant(m)
    }
}

impl From<GaussianLikelihoodForce> for AnyForce {
    fn from(m: GaussianLikelihoodForce) -> Self {
        Self::GaussianLikelihood(m)
    }
}

impl From<LocalGaussianForce> for AnyForce {
    fn from(m: LocalGaussianForce) -> Self {
        Self::LocalGaussian(m)
    }
}

#[cfg(test)]
mod tests {
    use rf_core::Error;

    use super::check_weights;

    #[test]
    fn weights_must_be_finite_and_non_negative() {
        assert!(check_weights(0.0, 2.5).is_ok());
        assert_eq!(check_weights(-1.0, 1.0), Err(Error::InvalidWeight));
        assert_eq!(check_weights(1.0, f64::INFINITY), Err(Error::InvalidWeight));
        assert_eq!(check_weights(f64::NAN, 1.0), Err(Error::InvalidWeight));
    }
}
