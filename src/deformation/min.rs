//! Minimum selection that skips a designated sentinel value

use std::cmp::Ordering;

/// Three-way comparison used when searching for a sentinel-aware minimum.
///
/// Unlike `PartialOrd`, floats compare every NaN equal to every other NaN
/// and below all numbers, so NaN can serve as the ignored sentinel.
pub trait SentinelOrd: Copy {
    fn sentinel_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_sentinel_ord_float {
    ($($t:ty),*) => {
        $(
            impl SentinelOrd for $t {
                fn sentinel_cmp(&self, other: &Self) -> Ordering {
                    match (self.is_nan(), other.is_nan()) {
                        (true, true) => Ordering::Equal,
                        (true, false) => Ordering::Less,
                        (false, true) => Ordering::Greater,
                        (false, false) => self.partial_cmp(other).unwrap_or(Ordering::Equal),
                    }
                }
            }
        )*
    };
}

macro_rules! impl_sentinel_ord_int {
    ($($t:ty),*) => {
        $(
            impl SentinelOrd for $t {
                fn sentinel_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_sentinel_ord_float!(f32, f64);
impl_sentinel_ord_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Returns the smallest element of `values` that does not compare equal to
/// `ignore`, or `None` if there is no such element.
pub fn min_ignoring<T: SentinelOrd>(values: &[T], ignore: T) -> Option<T> {
    values
        .iter()
        .copied()
        .filter(|v| v.sentinel_cmp(&ignore) != Ordering::Equal)
        .fold(None, |min, v| match min {
            Some(m) if v.sentinel_cmp(&m) != Ordering::Less => Some(m),
            _ => Some(v),
        })
}
