use core::fmt;

use crate::Image;

/// Binary partition of an image: `true` is inside, `false` is outside.
pub type Mask = Image<bool>;

/// One side of a [`Mask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Inside,
    Outside,
}

impl Region {
    #[inline]
    pub fn contains(self, mask_px: bool) -> bool {
        match self {
            Self::Inside => mask_px,
            Self::Outside => !mask_px,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Inside => Self::Outside,
            Self::Outside => Self::Inside,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inside => f.write_str("inside"),
            Self::Outside => f.write_str("outside"),
        }
    }
}

impl Image<bool> {
    /// Axis-aligned rectangle `[x0, x0 + w) x [y0, y0 + h)` set to inside.
    /// The rectangle is clipped to the image.
    pub fn from_rect(width: usize, height: usize, x0: usize, y0: usize, w: usize, h: usize) -> Self {
        let x1 = x0.saturating_add(w);
        let y1 = y0.saturating_add(h);
        Image::from_fn(width, height, |x, y| (x0..x1).contains(&x) && (y0..y1).contains(&y))
    }

    pub fn complement(&self) -> Self {
        self.map(|&px| !px)
    }

    pub fn count(&self, region: Region) -> usize {
        self.data().iter().filter(|&&px| region.contains(px)).count()
    }

    pub fn is_uniform(&self) -> bool {
        self.data().iter().all(|&px| px) || self.data().iter().all(|&px| !px)
    }
}

#[cfg(test)]
mod tests {
    use super::{Mask, Region};

    #[test]
    fn region_membership_is_complementary() {
        for px in [false, true] {
            assert_ne!(Region::Inside.contains(px), Region::Outside.contains(px));
        }
        assert_eq!(Region::Inside.opposite(), Region::Outside);
    }

    #[test]
    fn rect_mask_counts_and_complement() {
        let mask = Mask::from_rect(10, 10, 0, 0, 5, 5);
        assert_eq!(mask.count(Region::Inside), 25);
        assert_eq!(mask.count(Region::Outside), 75);
        assert_eq!(mask.get(4, 4), Some(&true));
        assert_eq!(mask.get(5, 4), Some(&false));

        let inverted = mask.complement();
        assert_eq!(inverted.count(Region::Inside), 75);
        assert_eq!(inverted.complement(), mask);
    }

    #[test]
    fn rect_mask_is_clipped() {
        let mask = Mask::from_rect(4, 3, 2, 1, 100, 100);
        assert_eq!(mask.count(Region::Inside), 4);
        assert!(!mask.is_uniform());
        assert!(Mask::from_rect(4, 3, 0, 0, 4, 3).is_uniform());
    }
}
