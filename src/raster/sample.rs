//! Exact parametric sampling along a segment.
//!
//! A sample at `step` of `steps` sits at `start + delta * step / steps`. The
//! value is kept as a fraction so floor, ceil and rounding never see floating
//! point error, and sampling `p0 -> p1` and `p1 -> p0` hits identical values.

/// A rational coordinate `num / den` with `den > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fraction {
    num: i128,
    den: i128,
}

impl Fraction {
    /// Coordinate `start + delta * step / steps`. With `steps == 0` this is
    /// `start` (t = 0).
    pub(crate) fn along(start: i32, delta: i64, step: u64, steps: u64) -> Self {
        if steps == 0 {
            return Self {
                num: i128::from(start),
                den: 1,
            };
        }
        let den = i128::from(steps);
        Self {
            num: i128::from(start) * den + i128::from(delta) * i128::from(step),
            den,
        }
    }

    pub(crate) fn floor(self) -> i32 {
        self.num.div_euclid(self.den) as i32
    }

    pub(crate) fn ceil(self) -> i32 {
        -((-self.num).div_euclid(self.den)) as i32
    }

    /// Nearest integer, ties away from zero.
    pub(crate) fn round(self) -> i32 {
        let twice = 2 * self.den;
        if self.num >= 0 {
            (2 * self.num + self.den).div_euclid(twice) as i32
        } else {
            -((-2 * self.num + self.den).div_euclid(twice)) as i32
        }
    }

    pub(crate) fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

/// Parameter `t = step / steps`, defined as 0 when `steps == 0`.
pub(crate) fn parameter(step: u64, steps: u64) -> f64 {
    if steps == 0 {
        0.0
    } else {
        step as f64 / steps as f64
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> impl Strategy<Value = (i32, i64, u64, u64)> {
        (-1_000i32..1_000, -1_000i64..1_000, 1u64..500).prop_flat_map(|(start, delta, steps)| {
            (Just(start), Just(delta), 0..=steps, Just(steps))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        /// Rounded value sits between floor and ceil, which differ by at most one
        #[test]
        fn prop_round_between_floor_and_ceil((start, delta, step, steps) in sample()) {
            let f = Fraction::along(start, delta, step, steps);
            prop_assert!(f.floor() <= f.round() && f.round() <= f.ceil());
            prop_assert!(f.ceil() - f.floor() <= 1);
        }

        /// Exact rounding agrees with f64 half-away-from-zero rounding
        #[test]
        fn prop_round_matches_float((start, delta, step, steps) in sample()) {
            let f = Fraction::along(start, delta, step, steps);
            prop_assert_eq!(f.round(), f.to_f64().round() as i32);
        }

        /// Negating the inputs negates the rounded value
        #[test]
        fn prop_round_is_odd((start, delta, step, steps) in sample()) {
            let f = Fraction::along(start, delta, step, steps);
            let g = Fraction::along(-start, -delta, step, steps);
            prop_assert_eq!(g.round(), -f.round());
            prop_assert_eq!(g.floor(), -f.ceil());
        }

        /// The last step lands exactly on the end coordinate
        #[test]
        fn prop_last_step_is_end((start, delta, _step, steps) in sample()) {
            let f = Fraction::along(start, delta, steps, steps);
            let end = (i64::from(start) + delta) as i32;
            prop_assert_eq!((f.floor(), f.round(), f.ceil()), (end, end, end));
        }
    }
}
