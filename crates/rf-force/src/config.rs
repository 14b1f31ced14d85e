use rf_blur::SeparableGaussian;
use rf_core::{BorderMode, Error, Image};
use serde::{Deserialize, Serialize};

use crate::model::AnyForce;
use crate::{GaussianLikelihoodForce, LocalGaussianForce, PiecewiseConstantForce};

/// Border treatment of the local model's blurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderPolicy {
    /// Zero padding.
    #[default]
    Zero,
    Clamp,
    Reflect101,
}

impl BorderPolicy {
    pub fn border_mode(self) -> BorderMode<f64> {
        match self {
            Self::Zero => BorderMode::Constant(0.0),
            Self::Clamp => BorderMode::Clamp,
            Self::Reflect101 => BorderMode::Reflect101,
        }
    }
}

/// Serializable description of a force model, tagged by `model`.
///
/// ```json
/// { "model": "local_gaussian", "k0": 1.0, "k1": 1.0, "sigma": 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ForceConfig {
    PiecewiseConstant {
        #[serde(default = "unit_weight")]
        k0: f64,
        #[serde(default = "unit_weight")]
        k1: f64,
    },
    GaussianLikelihood,
    LocalGaussian {
        #[serde(default = "unit_weight")]
        k0: f64,
        #[serde(default = "unit_weight")]
        k1: f64,
        sigma: u32,
        #[serde(default)]
        border: BorderPolicy,
    },
}

fn unit_weight() -> f64 {
    1.0
}

impl ForceConfig {
    /// Validates the parameters and binds the model to `image`.
    pub fn build(&self, image: Image<f64>) -> Result<AnyForce, Error> {
        let model: AnyForce = match *self {
            Self::PiecewiseConstant { k0, k1 } => PiecewiseConstantForce::new(image, k0, k1)?.into(),
            Self::GaussianLikelihood => GaussianLikelihoodForce::new(image).into(),
            Self::LocalGaussian {
                k0,
                k1,
                sigma,
                border,
            } => LocalGaussianForce::with_convolution(
                image,
                k0,
                k1,
                sigma,
                SeparableGaussian::new(border.border_mode()),
            )?
            .into(),
        };
        Ok(model)
    }
}
