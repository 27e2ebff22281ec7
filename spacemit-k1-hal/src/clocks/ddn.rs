//! Fractional divider (DDN) primitives.
//!
//! The output rate is `parent_rate * den / (pre_div * num)` where `den` and `num` are register
//! fields and `pre_div` is a fixed divider in front of the fractional divider.
use crate::regmap::RegisterMap;

use super::descriptor::DdnConfig;

/// Best rational approximation `n / d` of `given_num / given_den` with `n <= max_num` and
/// `d <= max_den`.
///
/// This walks the continued fraction expansion of the given fraction. When the next convergent
/// exceeds the limits, either the last convergent or the largest semi-convergent within the limits
/// is returned, whichever is closer.
pub fn rational_best_approximation(
    given_num: u64,
    given_den: u64,
    max_num: u64,
    max_den: u64,
) -> (u64, u64) {
    let (mut n, mut d) = (given_num, given_den);
    let (mut n0, mut d0) = (0u64, 1u64);
    let (mut n1, mut d1) = (1u64, 0u64);
    while d != 0 {
        let dp = d;
        let a = n / d;
        d = n % d;
        n = dp;

        let n2 = n0.saturating_add(a.saturating_mul(n1));
        let d2 = d0.saturating_add(a.saturating_mul(d1));
        if n2 > max_num || d2 > max_den {
            let mut t = u64::MAX;
            if d1 != 0 {
                t = max_den.saturating_sub(d0) / d1;
            }
            if n1 != 0 {
                t = t.min(max_num.saturating_sub(n0) / n1);
            }
            // Semi-convergent if it is closer than the previous convergent. There is no previous
            // convergent in the first iteration.
            if d1 == 0 || 2 * t > a || (2 * t == a && d0 * dp > d1 * d) {
                n1 = n0 + t * n1;
                d1 = d0 + t * d1;
            }
            break;
        }
        n0 = n1;
        n1 = n2;
        d0 = d1;
        d1 = d2;
    }
    (n1, d1)
}

impl DdnConfig {
    #[inline]
    fn calc_rate(&self, parent_rate: u64, num: u64, den: u64) -> u64 {
        parent_rate * den / self.pre_div as u64 / num
    }

    pub(crate) fn recalc_rate(&self, name: &str, regmap: &dyn RegisterMap, parent_rate: u64) -> u64 {
        let ctrl = regmap.read(self.ctrl);
        let num = self.num.extract(ctrl) as u64;
        let den = self.den.extract(ctrl) as u64;
        if num == 0 || self.pre_div == 0 {
            log::warn!("{name}: fractional divider numerator is zero");
            return 0;
        }
        self.calc_rate(parent_rate, num, den)
    }

    /// Numerator and denominator which approximate `rate` best.
    pub fn best_fraction(&self, rate: u64, parent_rate: u64) -> (u32, u32) {
        let (den, num) = rational_best_approximation(
            rate,
            parent_rate / self.pre_div.max(1) as u64,
            self.den.max_value() as u64,
            self.num.max_value() as u64,
        );
        (num as u32, den as u32)
    }

    pub(crate) fn set_rate(&self, regmap: &dyn RegisterMap, rate: u64, parent_rate: u64) {
        let (num, den) = self.best_fraction(rate, parent_rate);
        regmap.update_bits(
            self.ctrl,
            self.num.mask() | self.den.mask(),
            self.num.prepare(num) | self.den.prepare(den),
        );
    }
}
