//! Exact rational arithmetic for page counting

use std::fmt;

/// Non-negative rational number with a non-zero denominator.
///
/// All operations are checked; `None` means an intermediate product did not
/// fit in 128 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratio {
    num: u128,
    den: u128,
}

impl Ratio {
    pub const ZERO: Ratio = Ratio::whole(0);

    /// Create `num / den`. Only used for compile-time model weights, where a
    /// zero denominator fails const evaluation.
    pub(crate) const fn new(num: u64, den: u64) -> Self {
        assert!(den != 0, "ratio denominator must be non-zero");
        Self {
            num: num as u128,
            den: den as u128,
        }
    }

    pub const fn whole(n: u64) -> Self {
        Self {
            num: n as u128,
            den: 1,
        }
    }

    pub fn numerator(self) -> u128 {
        self.num
    }

    pub fn denominator(self) -> u128 {
        self.den
    }

    pub fn is_zero(self) -> bool {
        self.num == 0
    }

    pub fn checked_add(self, other: Ratio) -> Option<Ratio> {
        let num = self
            .num
            .checked_mul(other.den)?
            .checked_add(other.num.checked_mul(self.den)?)?;
        let den = self.den.checked_mul(other.den)?;
        Some(Self { num, den }.reduced())
    }

    pub fn checked_mul(self, other: Ratio) -> Option<Ratio> {
        // Cross-reduce first to keep the products small
        let g1 = gcd(self.num, other.den);
        let g2 = gcd(other.num, self.den);
        let num = (self.num / g1).checked_mul(other.num / g2)?;
        let den = (self.den / g2).checked_mul(other.den / g1)?;
        Some(Self { num, den }.reduced())
    }

    pub fn checked_mul_int(self, n: u64) -> Option<Ratio> {
        self.checked_mul(Ratio::whole(n))
    }

    /// Divide by `other`; `None` when `other` is zero.
    pub fn checked_div(self, other: Ratio) -> Option<Ratio> {
        if other.num == 0 {
            return None;
        }
        self.checked_mul(Ratio {
            num: other.den,
            den: other.num,
        })
    }

    /// Smallest multiple of `step` that is greater than or equal to `self`.
    pub fn ceil_to_multiple(self, step: u64) -> Option<u128> {
        if step == 0 {
            return None;
        }
        let step = step as u128;
        let units = self.num.div_ceil(self.den.checked_mul(step)?);
        units.checked_mul(step)
    }

    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    fn reduced(self) -> Self {
        let g = gcd(self.num, self.den);
        if g <= 1 {
            return self;
        }
        Self {
            num: self.num / g,
            den: self.den / g,
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
