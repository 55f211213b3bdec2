// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Ordering of ratios.
//!
//! Equality is derived: canonical ratios are equal iff their fields are.

use std::cmp::Ordering;

use integer::Integer;
use traits::{CheckedMul, Zero};

use crate::Ratio;

// Both denominators are positive, so comparing a/b and c/d is comparing a*d
// and c*b. Those products can overflow fixed-size integers, in which case we
// compare the integer parts and then recurse on the remainders.

impl<T: Clone + Integer + CheckedMul> Ord for Ratio<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denom == other.denom {
            return self.numer.cmp(&other.numer);
        }

        // With equal numerators, the denominators can be inversely compared
        if self.numer == other.numer {
            let ord = self.denom.cmp(&other.denom);
            return if self.numer < T::zero() { ord } else { ord.reverse() };
        }

        let lhs = self.numer.checked_mul(&other.denom);
        let rhs = other.numer.checked_mul(&self.denom);
        if let (Some(lhs), Some(rhs)) = (lhs, rhs) {
            return lhs.cmp(&rhs);
        }

        let (self_int, self_rem) = self.numer.div_mod_floor(&self.denom);
        let (other_int, other_rem) = other.numer.div_mod_floor(&other.denom);
        match self_int.cmp(&other_int) {
            Ordering::Equal => {}
            ord => return ord,
        }

        match (self_rem.is_zero(), other_rem.is_zero()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => {
                // 0 < rem < denom: the larger fraction has the smaller reciprocal
                let self_recip = Ratio::new_raw(self.denom.clone(), self_rem);
                let other_recip = Ratio::new_raw(other.denom.clone(), other_rem);
                self_recip.cmp(&other_recip).reverse()
            }
        }
    }
}

impl<T: Clone + Integer + CheckedMul> PartialOrd for Ratio<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use crate::test::{_0, _1, _1_2, _1_3, _2, _2_3, _3_2, _NEG1_2, _NEG2};
    use crate::Ratio;

    #[test]
    fn test_cmp() {
        assert!(_0 == _0 && _1 == _1);
        assert!(_0 != _1 && _1 != _0);
        assert!(_0 < _1 && !(_1 < _0));
        assert!(_1 > _0 && !(_0 > _1));

        assert!(_0 <= _0 && _1 <= _1);
        assert!(_0 <= _1 && !(_1 <= _0));

        assert!(_0 >= _0 && _1 >= _1);
        assert!(_1 >= _0 && !(_0 >= _1));

        assert!(_1_3 < _1_2 && _1_2 < _2_3);
        assert!(_NEG2 < _NEG1_2 && _NEG1_2 < _0);
        assert!(_3_2 > _1 && _3_2 < _2);
    }

    #[test]
    fn test_eq_after_normalization() {
        assert_eq!(Ratio::new(2, 4), Ratio::new(-3, -6));
        assert!(Ratio::new(2, 4).eq(&_1_2));
        assert!(Ratio::new(1, 3).ne(&_1_2));
    }

    #[test]
    fn test_trichotomy() {
        let values = [_NEG2, _NEG1_2, _0, _1_3, _1_2, _2_3, _1, _3_2, _2];
        for a in &values {
            for b in &values {
                let holds = [a < b, a == b, a > b].iter().filter(|&&x| x).count();
                assert_eq!(holds, 1, "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_cmp_overflow() {
        // the cross products of these do not fit the component type
        let big = Ratio::new(128u8, 1);
        let small = Ratio::new(1u8, 128);
        assert!(big > small);

        let ratios = vec![
            Ratio::new(125_i8, 127_i8),
            Ratio::new(63_i8, 64_i8),
            Ratio::new(124_i8, 125_i8),
            Ratio::new(125_i8, 126_i8),
            Ratio::new(126_i8, 127_i8),
            Ratio::new(127_i8, 126_i8),
        ];

        fn check_cmp(a: Ratio<i8>, b: Ratio<i8>, ord: Ordering) {
            assert_eq!(a.cmp(&b), ord, "comparing {} and {}", a, b);
            assert_eq!(b.cmp(&a), ord.reverse(), "comparing {} and {}", b, a);
        }

        for (i, &a) in ratios.iter().enumerate() {
            check_cmp(a, a, Ordering::Equal);
            check_cmp(-a, a, Ordering::Less);
            for &b in &ratios[i + 1..] {
                check_cmp(a, b, Ordering::Less);
                check_cmp(-a, -b, Ordering::Greater);
                check_cmp(a.recip(), b.recip(), Ordering::Greater);
                check_cmp(-a.recip(), -b.recip(), Ordering::Less);
            }
        }
    }

    #[test]
    fn test_cmp_large_i64() {
        let a = Ratio::new(i64::MAX, i64::MAX - 1);
        let b = Ratio::new(i64::MAX - 1, i64::MAX - 2);
        // a = 1 + 1/(MAX-1) < b = 1 + 1/(MAX-2)
        assert!(a < b);
        assert!(-a > -b);
    }
}
