use log::{Level, debug, log_enabled};
use rf_core::{Error, Image, Mask};

use crate::model::ForceModel;
use crate::summary::ForceSummary;

/// Owns a force model and remembers the last force map it produced.
///
/// The cache is only written on success; a failed call leaves the previous
/// result in place.
#[derive(Debug, Clone)]
pub struct ImageForce<M> {
    model: M,
    last: Option<Image<f64>>,
}

impl<M: ForceModel> ImageForce<M> {
    pub fn new(model: M) -> Self {
        Self { model, last: None }
    }

    pub fn get_force(&mut self, mask: &Mask) -> Result<&Image<f64>, Error> {
        let force = self.model.compute_force(mask)?;
        if log_enabled!(Level::Debug) {
            debug!("{} force: {:?}", self.model.name(), ForceSummary::of(&force));
        }
        Ok(self.last.insert(force))
    }

    pub fn last_force(&self) -> Option<&Image<f64>> {
        self.last.as_ref()
    }

    pub fn image(&self) -> &Image<f64> {
        self.model.image()
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn into_inner(self) -> M {
        self.model
    }
}

#[cfg(test)]
mod tests {
    use rf_core::{Error, Image, Mask};

    use super::ImageForce;
    use crate::{GaussianLikelihoodForce, LocalGaussianForce, PiecewiseConstantForce};

    fn noisy(w: usize, h: usize) -> Image<f64> {
        let mut state = 12345u32;
        Image::from_fn(w, h, |_, _| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            f64::from((state >> 16) % 255)
        })
    }

    #[test]
    fn caches_last_result_and_is_idempotent() {
        let mut facade =
            ImageForce::new(PiecewiseConstantForce::new(noisy(10, 10), 1.0, 1.0).expect("valid"));
        assert!(facade.last_force().is_none());

        let mask = Mask::from_rect(10, 10, 0, 0, 5, 5);
        let first = facade.get_force(&mask).expect("valid force").clone();
        let second = facade.get_force(&mask).expect("valid force").clone();
        assert_eq!(first, second);
        assert_eq!(facade.last_force(), Some(&second));
    }

    #[test]
    fn failure_keeps_previous_result() {
        let mut facade = ImageForce::new(GaussianLikelihoodForce::new(noisy(10, 10)));
        let mask = Mask::from_rect(10, 10, 0, 0, 5, 5);
        let good = facade.get_force(&mask).expect("valid force").clone();

        let err = facade.get_force(&Mask::from_rect(10, 10, 4, 4, 1, 1));
        assert!(matches!(err, Err(Error::DegenerateStatistics { .. })));
        assert_eq!(facade.last_force(), Some(&good));

        let err = facade.get_force(&Mask::new_fill(9, 10, true));
        assert!(matches!(err, Err(Error::ShapeMismatch { .. })));
        assert_eq!(facade.last_force(), Some(&good));
    }

    #[test]
    fn local_model_through_facade() {
        let img = noisy(10, 10);
        let mut facade =
            ImageForce::new(LocalGaussianForce::new(img.clone(), 1.0, 1.0, 1).expect("valid"));
        let force = facade
            .get_force(&Mask::from_rect(10, 10, 0, 0, 5, 5))
            .expect("valid force");
        assert_eq!(force.dims(), (10, 10));
        assert!(force.data().iter().all(|f| f.is_finite()));
        assert_eq!(facade.image(), &img);
        assert_eq!(facade.into_inner().sigma(), 1);
    }
}
