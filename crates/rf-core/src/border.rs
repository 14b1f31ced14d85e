/// Policy for samples that fall outside the image.
///
/// `Constant(0.0)` is zero padding. `Reflect101` mirrors around the edge
/// sample without repeating it (`dcb|abcd|cba`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BorderMode<T> {
    Clamp,
    Constant(T),
    Reflect101,
}

pub fn map_index<T>(i: isize, len: usize, mode: &BorderMode<T>) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if (0..len as isize).contains(&i) {
        return Some(i as usize);
    }

    match mode {
        BorderMode::Constant(_) => None,
        BorderMode::Clamp => {
            if i < 0 {
                Some(0)
            } else {
                Some(len - 1)
            }
        }
        BorderMode::Reflect101 => {
            if len == 1 {
                return Some(0);
            }

            let period = (2 * len - 2) as isize;
            let r = i.rem_euclid(period) as usize;
            if r < len { Some(r) } else { Some(period as usize - r) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BorderMode, map_index};

    #[test]
    fn constant_mapping_rejects_out_of_range() {
        let mode = BorderMode::Constant(0.0f64);

        assert_eq!(map_index(-1, 4, &mode), None);
        assert_eq!(map_index(0, 4, &mode), Some(0));
        assert_eq!(map_index(3, 4, &mode), Some(3));
        assert_eq!(map_index(4, 4, &mode), None);
        assert_eq!(map_index(0, 0, &mode), None);
    }

    #[test]
    fn clamp_mapping_handles_negative_and_overflow() {
        let mode = BorderMode::<f64>::Clamp;

        assert_eq!(map_index(-3, 5, &mode), Some(0));
        assert_eq!(map_index(2, 5, &mode), Some(2));
        assert_eq!(map_index(5, 5, &mode), Some(4));
        assert_eq!(map_index(99, 5, &mode), Some(4));
    }

    #[test]
    fn reflect101_len1_and_len4() {
        let mode = BorderMode::<f64>::Reflect101;

        for i in -6..=6 {
            assert_eq!(map_index(i, 1, &mode), Some(0));
        }

        let cases_len4 = [(-4, 2), (-3, 3), (-2, 2), (-1, 1), (3, 3), (4, 2), (5, 1), (6, 0)];
        for (i, expected) in cases_len4 {
            assert_eq!(map_index(i, 4, &mode), Some(expected));
        }
    }
}
