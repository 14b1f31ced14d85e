use rf_core::{BorderMode, Error, Image};

use crate::conv1d::convolve_f64;
use crate::kernels1d::GaussianKernel1D;

/// 2D Gaussian smoothing as consumed by the force models.
///
/// `kernel_size` is `(width, height)` of the window; both must be odd.
/// Output always has the shape of `src`.
pub trait Convolution {
    fn gaussian_blur(
        &self,
        src: &Image<f64>,
        kernel_size: (usize, usize),
        sigma: f64,
    ) -> Result<Image<f64>, Error>;
}

/// Separable Gaussian blur: a horizontal pass over rows followed by a
/// vertical pass over gathered columns.
///
/// Because the kernel is normalized, applying the border policy per pass is
/// equivalent to padding the 2D image with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparableGaussian {
    pub border: BorderMode<f64>,
}

impl SeparableGaussian {
    pub fn new(border: BorderMode<f64>) -> Self {
        Self { border }
    }
}

impl Default for SeparableGaussian {
    fn default() -> Self {
        Self::new(BorderMode::Constant(0.0))
    }
}

impl Convolution for SeparableGaussian {
    fn gaussian_blur(
        &self,
        src: &Image<f64>,
        kernel_size: (usize, usize),
        sigma: f64,
    ) -> Result<Image<f64>, Error> {
        let kx = GaussianKernel1D::with_size(kernel_size.0, sigma)?;
        let ky = if kernel_size.1 == kernel_size.0 {
            kx.clone()
        } else {
            GaussianKernel1D::with_size(kernel_size.1, sigma)?
        };
        separable_blur_f64(src, &kx, &ky, self.border)
    }
}

pub fn separable_blur_f64(
    src: &Image<f64>,
    kx: &GaussianKernel1D,
    ky: &GaussianKernel1D,
    border: BorderMode<f64>,
) -> Result<Image<f64>, Error> {
    let (w, h) = src.dims();
    if src.is_empty() {
        return Ok(src.clone());
    }

    let mut tmp = vec![0.0f64; w * h];
    for (src_row, tmp_row) in src.data().chunks_exact(w).zip(tmp.chunks_exact_mut(w)) {
        convolve_f64(src_row, &kx.taps, kx.radius, border, tmp_row);
    }

    let mut out = vec![0.0f64; w * h];
    let mut col = vec![0.0f64; h];
    let mut col_out = vec![0.0f64; h];
    for x in 0..w {
        for (y, c) in col.iter_mut().enumerate() {
            *c = tmp[y * w + x];
        }
        convolve_f64(&col, &ky.taps, ky.radius, border, &mut col_out);
        for (y, &v) in col_out.iter().enumerate() {
            out[y * w + x] = v;
        }
    }

    Image::from_vec(w, h, out)
}
