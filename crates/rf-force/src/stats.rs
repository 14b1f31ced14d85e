//! Intensity statistics restricted to one side of a mask.

use std::f64::consts::PI;

use log::trace;
use rf_core::{Error, Image, Mask, Region};

/// Mean and population standard deviation of a region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
}

impl RegionStats {
    /// Log of the normal density with this region's parameters at `value`.
    #[inline]
    pub fn log_density(&self, value: f64) -> f64 {
        let var = self.std * self.std;
        let amplitude = 1.0 / (2.0 * PI * var).sqrt();
        let power = -0.5 * (value - self.mean).powi(2) / var;
        amplitude.ln() + power
    }
}

fn region_values<'a>(
    image: &'a Image<f64>,
    mask: &'a Mask,
    region: Region,
) -> impl Iterator<Item = f64> + 'a {
    image
        .data()
        .iter()
        .zip(mask.data())
        .filter(move |&(_, &m)| region.contains(m))
        .map(|(&v, _)| v)
}

pub fn region_mean(image: &Image<f64>, mask: &Mask, region: Region) -> Result<f64, Error> {
    image.ensure_same_shape(mask)?;

    let (count, sum) = region_values(image, mask, region).fold((0usize, 0.0f64), |(n, s), v| {
        (n + 1, s + v)
    });
    if count == 0 {
        return Err(Error::EmptyRegion { region });
    }
    Ok(sum / count as f64)
}

/// Fails with [`Error::DegenerateStatistics`] when every pixel of the region
/// has the same intensity (a single pixel included).
pub fn region_stats(image: &Image<f64>, mask: &Mask, region: Region) -> Result<RegionStats, Error> {
    let mean = region_mean(image, mask, region)?;

    let mut count = 0usize;
    let mut sq_sum = 0.0f64;
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in region_values(image, mask, region) {
        count += 1;
        sq_sum += (v - mean) * (v - mean);
        lo = lo.min(v);
        hi = hi.max(v);
    }

    // A constant region can still accumulate rounding noise in `mean`.
    let std = if lo == hi {
        0.0
    } else {
        (sq_sum / count as f64).sqrt()
    };
    trace!("{region} region: n={count} mean={mean:.6} std={std:.6}");

    if std == 0.0 {
        return Err(Error::DegenerateStatistics { region, std });
    }
    Ok(RegionStats { count, mean, std })
}
