use core::fmt;

use crate::Region;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    SizeMismatch {
        expected: usize,
        actual: usize,
    },
    InvalidStride,
    /// Mask dimensions differ from the image, as `(width, height)`.
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    EmptyRegion {
        region: Region,
    },
    /// A region has zero intensity variance, so no Gaussian can be fitted.
    DegenerateStatistics {
        region: Region,
        std: f64,
    },
    InvalidSigma,
    InvalidKernelSize,
    InvalidWeight,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::InvalidStride => write!(f, "invalid stride"),
            Self::ShapeMismatch { expected, actual } => write!(
                f,
                "shape mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            Self::EmptyRegion { region } => write!(f, "{region} region is empty"),
            Self::DegenerateStatistics { region, std } => {
                write!(f, "invalid statistics for {region} region: std={std}")
            }
            Self::InvalidSigma => write!(f, "sigma must be positive and finite"),
            Self::InvalidKernelSize => write!(f, "kernel size must be odd and positive"),
            Self::InvalidWeight => write!(f, "weights must be non-negative and finite"),
        }
    }
}

impl std::error::Error for Error {}
