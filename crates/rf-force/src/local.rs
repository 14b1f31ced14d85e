//! Locally weighted region force.
//!
//! Conceptually each pixel `p` accumulates, over every same-region pixel `q`,
//! `g_sigma(q - p) * (I(p) - I(q))^2`. Evaluating that directly is quadratic
//! in the pixel count. Expanding the square turns every term into a single
//! Gaussian blur of an elementwise product:
//!
//! ```text
//! f_in  = mask_in  * blur(mask_in  * I)
//! f_out = mask_out * blur(mask_out * I)
//!
//! t1 =  k0 * k1 * I^2 * blur(1)
//! t2 = -2 * k1 * I * blur(f_in)        (inside only)
//! t3 =  2 * k0 * I * blur(f_out)       (outside only)
//! t4 =  k1 * blur(f_in^2)              (inside only)
//! t5 = -k0 * blur(f_out^2)             (outside only)
//!
//! force = -(t1 + t2 + t3 + t4 + t5)
//! ```
//!
//! All blurs share one `(2 sigma + 1)^2` window. `blur(1)` is the local kernel
//! weight mass, which drops below one near the image edge under zero padding.
//! An empty region contributes zeros instead of failing.

use log::trace;
use rf_blur::{Convolution, SeparableGaussian};
use rf_core::{Error, Image, Mask, Region};

use crate::model::{ForceModel, check_weights};

#[derive(Debug, Clone)]
pub struct LocalGaussianForce<C = SeparableGaussian> {
    image: Image<f64>,
    k0: f64,
    k1: f64,
    sigma: u32,
    kernel_size: (usize, usize),
    conv: C,
}

impl LocalGaussianForce {
    /// Zero-padded separable blur.
    pub fn new(image: Image<f64>, k0: f64, k1: f64, sigma: u32) -> Result<Self, Error> {
        Self::with_convolution(image, k0, k1, sigma, SeparableGaussian::default())
    }
}

impl<C> LocalGaussianForce<C>
where
    C: Convolution + Sync,
{
    pub fn with_convolution(
        image: Image<f64>,
        k0: f64,
        k1: f64,
        sigma: u32,
        conv: C,
    ) -> Result<Self, Error> {
        check_weights(k0, k1)?;
        if sigma == 0 {
            return Err(Error::InvalidSigma);
        }

        let dim = 2 * sigma as usize + 1;
        Ok(Self {
            image,
            k0,
            k1,
            sigma,
            kernel_size: (dim, dim),
            conv,
        })
    }

    pub fn sigma(&self) -> u32 {
        self.sigma
    }

    pub fn kernel_size(&self) -> (usize, usize) {
        self.kernel_size
    }

    pub fn convolution(&self) -> &C {
        &self.conv
    }

    fn blur(&self, src: &Image<f64>) -> Result<Image<f64>, Error> {
        self.conv
            .gaussian_blur(src, self.kernel_size, f64::from(self.sigma))
    }

    /// Blur of the image restricted to `region`, restricted again afterwards.
    fn region_blur(&self, mask: &Mask, region: Region) -> Result<Image<f64>, Error> {
        let keep = |&v: &f64, &m: &bool| if region.contains(m) { v } else { 0.0 };
        let masked = self.image.zip_map(mask, keep)?;
        self.blur(&masked)?.zip_map(mask, keep)
    }
}

impl<C> ForceModel for LocalGaussianForce<C>
where
    C: Convolution + Sync,
{
    fn name(&self) -> &'static str {
        "local_gaussian"
    }

    fn image(&self) -> &Image<f64> {
        &self.image
    }

    fn compute_force(&self, mask: &Mask) -> Result<Image<f64>, Error> {
        self.image.ensure_same_shape(mask)?;
        let (w, h) = self.image.dims();

        let (f_in, f_out) = rayon::join(
            || self.region_blur(mask, Region::Inside),
            || self.region_blur(mask, Region::Outside),
        );
        let (f_in, f_out) = (f_in?, f_out?);
        let f_in_sq = f_in.map(|&v| v * v);
        let f_out_sq = f_out.map(|&v| v * v);
        let ones = Image::new_fill(w, h, 1.0f64);

        let ((mass, blur_in), (blur_out, (blur_in_sq, blur_out_sq))) = rayon::join(
            || rayon::join(|| self.blur(&ones), || self.blur(&f_in)),
            || {
                rayon::join(
                    || self.blur(&f_out),
                    || rayon::join(|| self.blur(&f_in_sq), || self.blur(&f_out_sq)),
                )
            },
        );
        let (mass, blur_in, blur_out) = (mass?, blur_in?, blur_out?);
        let (blur_in_sq, blur_out_sq) = (blur_in_sq?, blur_out_sq?);
        trace!(
            "local force {w}x{h}: sigma={} window={:?}",
            self.sigma, self.kernel_size
        );

        let (k0, k1) = (self.k0, self.k1);
        let data = self
            .image
            .data()
            .iter()
            .zip(mask.data())
            .enumerate()
            .map(|(i, (&v, &inside))| {
                let t1 = k0 * k1 * v * v * mass.data()[i];
                let (t2, t3, t4, t5) = if inside {
                    (-2.0 * k1 * v * blur_in.data()[i], 0.0, k1 * blur_in_sq.data()[i], 0.0)
                } else {
                    (0.0, 2.0 * k0 * v * blur_out.data()[i], 0.0, -k0 * blur_out_sq.data()[i])
                };
                -(t1 + t2 + t3 + t4 + t5)
            })
            .collect();

        Image::from_vec(w, h, data)
    }
}
