use rf_core::Image;
use serde::Serialize;

/// Aggregate description of a force map, for logging and reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForceSummary {
    pub width: usize,
    pub height: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Pixels favouring the inside region (`force < 0`).
    pub negative: usize,
    pub positive: usize,
    pub non_finite: usize,
}

impl ForceSummary {
    /// Statistics over finite entries only; `min`/`max`/`mean` are `0.0` when
    /// there are none.
    pub fn of(force: &Image<f64>) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0f64;
        let (mut finite, mut negative, mut positive) = (0usize, 0usize, 0usize);

        for &f in force.data() {
            if !f.is_finite() {
                continue;
            }
            finite += 1;
            sum += f;
            min = min.min(f);
            max = max.max(f);
            if f < 0.0 {
                negative += 1;
            } else if f > 0.0 {
                positive += 1;
            }
        }

        let (min, max, mean) = if finite == 0 {
            (0.0, 0.0, 0.0)
        } else {
            (min, max, sum / finite as f64)
        };

        Self {
            width: force.width(),
            height: force.height(),
            min,
            max,
            mean,
            negative,
            positive,
            non_finite: force.len() - finite,
        }
    }
}

#[cfg(test)]
mod tests {
    use rf_core::Image;

    use super::ForceSummary;

    #[test]
    fn counts_signs_and_skips_non_finite() {
        let img = Image::from_vec(3, 2, vec![-2.0, 0.0, 4.0, f64::NAN, 1.0, f64::INFINITY])
            .expect("valid image");
        let s = ForceSummary::of(&img);

        assert_eq!((s.width, s.height), (3, 2));
        assert_eq!(s.min, -2.0);
        assert_eq!(s.max, 4.0);
        assert!((s.mean - 0.75).abs() < 1e-12);
        assert_eq!((s.negative, s.positive, s.non_finite), (1, 2, 2));
    }
}
