use rf_core::Error;

/// Normalized 1D Gaussian kernel with an explicit window size.
///
/// Conventions:
/// - `taps.len() == 2 * radius + 1`, so the window is odd and centered.
/// - `taps[i] ~ exp(-x^2 / (2 sigma^2))` with `x = i - radius`.
/// - `sum(taps) ~= 1`; truncation is absorbed by the normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel1D {
    pub sigma: f64,
    pub radius: usize,
    pub taps: Vec<f64>,
}

impl GaussianKernel1D {
    pub fn with_size(size: usize, sigma: f64) -> Result<Self, Error> {
        if size == 0 || size.is_multiple_of(2) {
            return Err(Error::InvalidKernelSize);
        }
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(Error::InvalidSigma);
        }

        let radius = size / 2;
        let sigma2 = sigma * sigma;
        let mut taps: Vec<f64> = (0..size)
            .map(|i| {
                let x = i as f64 - radius as f64;
                (-(x * x) / (2.0 * sigma2)).exp()
            })
            .collect();

        let sum: f64 = taps.iter().sum();
        for t in &mut taps {
            *t /= sum;
        }

        Ok(Self {
            sigma,
            radius,
            taps,
        })
    }

    /// Window of `2 * sigma + 1` taps for an integer standard deviation.
    pub fn for_integer_sigma(sigma: u32) -> Result<Self, Error> {
        if sigma == 0 {
            return Err(Error::InvalidSigma);
        }
        Self::with_size(2 * sigma as usize + 1, f64::from(sigma))
    }

    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }
}
