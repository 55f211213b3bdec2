// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Arithmetic on ratios.
//!
//! The checked traits hold the actual arithmetic. The operators panic when
//! those return `None`, and the `try_*` methods turn it into a
//! [`RationalError`].

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use integer::Integer;
use log::debug;
use traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, Zero};

use crate::{ErrorKind, Ratio, RationalError};

impl<T> Ratio<T>
where
    T: Clone + Integer + CheckedAdd + CheckedSub + CheckedMul,
{
    /// Returns the reciprocal.
    ///
    /// # Panics
    ///
    /// Panics if the `Ratio` is zero.
    #[inline]
    pub fn recip(&self) -> Ratio<T> {
        match self.try_recip() {
            Ok(recip) => recip,
            Err(err) if err.kind() == ErrorKind::DivisionByZero => panic!("numerator == 0"),
            Err(_) => panic!("attempt to negate with overflow"),
        }
    }

    /// Returns the reciprocal, failing with `ErrorKind::DivisionByZero` if
    /// the `Ratio` is zero.
    pub fn try_recip(&self) -> Result<Ratio<T>, RationalError> {
        if self.numer.is_zero() {
            debug!("reciprocal of zero");
            return Err(RationalError::new(ErrorKind::DivisionByZero));
        }
        self.checked_recip()
            .ok_or_else(|| RationalError::new(ErrorKind::Overflow))
    }

    fn checked_recip(&self) -> Option<Ratio<T>> {
        let zero = T::zero();
        if self.numer.is_zero() {
            None
        } else if self.numer < zero {
            // keep denom positive!
            Some(Ratio::new_raw(
                zero.checked_sub(&self.denom)?,
                zero.checked_sub(&self.numer)?,
            ))
        } else {
            Some(Ratio::new_raw(self.denom.clone(), self.numer.clone()))
        }
    }

    /// Adds, failing with `ErrorKind::Overflow` instead of panicking.
    #[inline]
    pub fn try_add(&self, rhs: &Ratio<T>) -> Result<Ratio<T>, RationalError> {
        self.checked_add(rhs).ok_or_else(|| overflow("addition"))
    }

    /// Subtracts, failing with `ErrorKind::Overflow` instead of panicking.
    #[inline]
    pub fn try_sub(&self, rhs: &Ratio<T>) -> Result<Ratio<T>, RationalError> {
        self.checked_sub(rhs).ok_or_else(|| overflow("subtraction"))
    }

    /// Multiplies, failing with `ErrorKind::Overflow` instead of panicking.
    #[inline]
    pub fn try_mul(&self, rhs: &Ratio<T>) -> Result<Ratio<T>, RationalError> {
        self.checked_mul(rhs).ok_or_else(|| overflow("multiplication"))
    }

    /// Divides, failing with `ErrorKind::DivisionByZero` when `rhs` is zero
    /// and with `ErrorKind::Overflow` when the quotient does not fit.
    pub fn try_div(&self, rhs: &Ratio<T>) -> Result<Ratio<T>, RationalError> {
        if rhs.numer.is_zero() {
            debug!("division by zero");
            return Err(RationalError::new(ErrorKind::DivisionByZero));
        }
        self.checked_div(rhs).ok_or_else(|| overflow("division"))
    }

    // Splits both operands into floored integer parts and fractions in
    // [0, 1), so only the fractions are put over a common denominator. With
    // g = gcd(b, d) and t = r*(d/g) `op` s*(b/g), the sum r/b `op` s/d reduces
    // to (t/g2) / ((b/g)*(d/g2)) where g2 = gcd(t, g).
    fn checked_combine(&self, rhs: &Ratio<T>, subtract: bool) -> Option<Ratio<T>> {
        let (lhs_int, lhs_rem) = self.numer.div_mod_floor(&self.denom);
        let (rhs_int, rhs_rem) = rhs.numer.div_mod_floor(&rhs.denom);
        let mut int = if subtract {
            lhs_int.checked_sub(&rhs_int)?
        } else {
            lhs_int.checked_add(&rhs_int)?
        };

        let g = self.denom.gcd(&rhs.denom);
        let lhs_term = lhs_rem.checked_mul(&(rhs.denom.clone() / g.clone()))?;
        let rhs_term = rhs_rem.checked_mul(&(self.denom.clone() / g.clone()))?;
        let (t, negative) = if !subtract {
            (lhs_term.checked_add(&rhs_term)?, false)
        } else if lhs_term >= rhs_term {
            (lhs_term - rhs_term, false)
        } else {
            (rhs_term - lhs_term, true)
        };

        let (mut numer, denom) = if t.is_zero() {
            (T::zero(), T::one())
        } else {
            let g2 = t.gcd(&g);
            let denom = (self.denom.clone() / g).checked_mul(&(rhs.denom.clone() / g2.clone()))?;
            (t / g2, denom)
        };

        // bring the fraction back into [0, 1)
        if negative && !numer.is_zero() {
            int = int.checked_sub(&T::one())?;
            numer = denom.clone() - numer;
        } else if numer >= denom {
            int = int.checked_add(&T::one())?;
            numer = numer - denom.clone();
        }

        // int*denom + numer, without overshooting on the way for negative int
        let numer = if int >= T::zero() {
            int.checked_mul(&denom)?.checked_add(&numer)?
        } else {
            let whole = (int + T::one()).checked_mul(&denom)?;
            whole.checked_sub(&(denom.clone() - numer))?
        };
        Some(Ratio::new_raw(numer, denom))
    }
}

fn overflow(op: &str) -> RationalError {
    debug!("{} overflowed the component type", op);
    RationalError::new(ErrorKind::Overflow)
}

impl<T> CheckedAdd for Ratio<T>
where
    T: Clone + Integer + CheckedAdd + CheckedSub + CheckedMul,
{
    #[inline]
    fn checked_add(&self, rhs: &Ratio<T>) -> Option<Ratio<T>> {
        self.checked_combine(rhs, false)
    }
}

impl<T> CheckedSub for Ratio<T>
where
    T: Clone + Integer + CheckedAdd + CheckedSub + CheckedMul,
{
    #[inline]
    fn checked_sub(&self, rhs: &Ratio<T>) -> Option<Ratio<T>> {
        self.checked_combine(rhs, true)
    }
}

impl<T> CheckedMul for Ratio<T>
where
    T: Clone + Integer + CheckedAdd + CheckedSub + CheckedMul,
{
    // a/b * c/d = (a/gcd(a, d) * c/gcd(c, b)) / (b/gcd(c, b) * d/gcd(a, d))
    fn checked_mul(&self, rhs: &Ratio<T>) -> Option<Ratio<T>> {
        let gad = self.numer.gcd(&rhs.denom);
        let gcb = rhs.numer.gcd(&self.denom);
        let numer = (self.numer.clone() / gad.clone())
            .checked_mul(&(rhs.numer.clone() / gcb.clone()))?;
        let denom = (self.denom.clone() / gcb).checked_mul(&(rhs.denom.clone() / gad))?;
        Some(Ratio::new(numer, denom))
    }
}

impl<T> CheckedDiv for Ratio<T>
where
    T: Clone + Integer + CheckedAdd + CheckedSub + CheckedMul,
{
    /// `None` on a zero divisor as well as on overflow.
    #[inline]
    fn checked_div(&self, rhs: &Ratio<T>) -> Option<Ratio<T>> {
        self.checked_mul(&rhs.checked_recip()?)
    }
}

macro_rules! forward_val_val_binop {
    (impl $imp:ident, $method:ident) => {
        impl<T> $imp<Ratio<T>> for Ratio<T>
        where
            T: Clone + Integer + CheckedAdd + CheckedSub + CheckedMul,
        {
            type Output = Ratio<T>;

            #[inline]
            fn $method(self, other: Ratio<T>) -> Ratio<T> {
                (&self).$method(&other)
            }
        }
    };
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident, $method:ident) => {
        impl<'a, T> $imp<Ratio<T>> for &'a Ratio<T>
        where
            T: Clone + Integer + CheckedAdd + CheckedSub + CheckedMul,
        {
            type Output = Ratio<T>;

            #[inline]
            fn $method(self, other: Ratio<T>) -> Ratio<T> {
                self.$method(&other)
            }
        }
    };
}

macro_rules! forward_val_ref_binop {
    (impl $imp:ident, $method:ident) => {
        impl<'a, T> $imp<&'a Ratio<T>> for Ratio<T>
        where
            T: Clone + Integer + CheckedAdd + CheckedSub + CheckedMul,
        {
            type Output = Ratio<T>;

            #[inline]
            fn $method(self, other: &Ratio<T>) -> Ratio<T> {
                (&self).$method(other)
            }
        }
    };
}

// Ratio `op` T, through `from_integer`
macro_rules! forward_integer_binop {
    (impl $imp:ident, $method:ident) => {
        impl<T> $imp<T> for Ratio<T>
        where
            T: Clone + Integer + CheckedAdd + CheckedSub + CheckedMul,
        {
            type Output = Ratio<T>;

            #[inline]
            fn $method(self, other: T) -> Ratio<T> {
                (&self).$method(&Ratio::from_integer(other))
            }
        }

        impl<'a, T> $imp<T> for &'a Ratio<T>
        where
            T: Clone + Integer + CheckedAdd + CheckedSub + CheckedMul,
        {
            type Output = Ratio<T>;

            #[inline]
            fn $method(self, other: T) -> Ratio<T> {
                self.$method(&Ratio::from_integer(other))
            }
        }
    };
}

macro_rules! forward_assign_op {
    (impl $imp:ident, $method:ident, $op:ident) => {
        impl<T> $imp<Ratio<T>> for Ratio<T>
        where
            T: Clone + Integer + CheckedAdd + CheckedSub + CheckedMul,
        {
            #[inline]
            fn $method(&mut self, other: Ratio<T>) {
                *self = (&*self).$op(&other);
            }
        }

        impl<T> $imp<T> for Ratio<T>
        where
            T: Clone + Integer + CheckedAdd + CheckedSub + CheckedMul,
        {
            #[inline]
            fn $method(&mut self, other: T) {
                *self = (&*self).$op(&Ratio::from_integer(other));
            }
        }
    };
}

// Generates the reference-reference operator on top of a checked trait, plus
// every forwarding impl.
macro_rules! checked_binop {
    (impl $imp:ident, $method:ident, $checked:ident, $msg:literal;
     impl $assign:ident, $assign_method:ident) => {
        impl<'a, 'b, T> $imp<&'b Ratio<T>> for &'a Ratio<T>
        where
            T: Clone + Integer + CheckedAdd + CheckedSub + CheckedMul,
        {
            type Output = Ratio<T>;

            #[inline]
            fn $method(self, other: &Ratio<T>) -> Ratio<T> {
                match self.$checked(other) {
                    Some(ret) => ret,
                    None => panic!($msg),
                }
            }
        }

        forward_val_val_binop!(impl $imp, $method);
        forward_ref_val_binop!(impl $imp, $method);
        forward_val_ref_binop!(impl $imp, $method);
        forward_integer_binop!(impl $imp, $method);
        forward_assign_op!(impl $assign, $assign_method, $method);
    };
}

checked_binop!(impl Add, add, checked_add, "attempt to add with overflow";
               impl AddAssign, add_assign);
checked_binop!(impl Sub, sub, checked_sub, "attempt to subtract with overflow";
               impl SubAssign, sub_assign);
checked_binop!(impl Mul, mul, checked_mul, "attempt to multiply with overflow";
               impl MulAssign, mul_assign);

impl<'a, 'b, T> Div<&'b Ratio<T>> for &'a Ratio<T>
where
    T: Clone + Integer + CheckedAdd + CheckedSub + CheckedMul,
{
    type Output = Ratio<T>;

    /// # Panics
    ///
    /// Panics if `other` is zero, or if the quotient does not fit `T`.
    #[inline]
    fn div(self, other: &Ratio<T>) -> Ratio<T> {
        if other.numer.is_zero() {
            panic!("attempt to divide by zero");
        }
        match self.checked_div(other) {
            Some(ret) => ret,
            None => panic!("attempt to divide with overflow"),
        }
    }
}

forward_val_val_binop!(impl Div, div);
forward_ref_val_binop!(impl Div, div);
forward_val_ref_binop!(impl Div, div);
forward_integer_binop!(impl Div, div);
forward_assign_op!(impl DivAssign, div_assign, div);

impl<T> Neg for Ratio<T>
where
    T: Clone + Integer + Neg<Output = T>,
{
    type Output = Ratio<T>;

    #[inline]
    fn neg(self) -> Ratio<T> {
        Ratio::new_raw(-self.numer, self.denom)
    }
}

impl<'a, T> Neg for &'a Ratio<T>
where
    T: Clone + Integer + Neg<Output = T>,
{
    type Output = Ratio<T>;

    #[inline]
    fn neg(self) -> Ratio<T> {
        -self.clone()
    }
}

#[cfg(test)]
mod test {
    use crate::test::{_0, _1, _1_2, _1_3, _2, _2_3, _3_2, _NEG1_2, _NEG2};
    use crate::{ErrorKind, Ratio, Rational, Rational64};
    use traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub};

    #[test]
    fn test_add() {
        fn test(a: Rational, b: Rational, c: Rational) {
            assert_eq!(a + b, c);
            assert_eq!(b + a, c);
            assert_eq!(&a + &b, c);
            assert_eq!(a.try_add(&b), Ok(c));
            let mut acc = a;
            acc += b;
            assert_eq!(acc, c);
        }

        test(_1, _1_2, _3_2);
        test(_1, _1, _2);
        test(_1_2, _3_2, _2);
        test(_1_2, _NEG1_2, _0);
        test(_1_2, _1_3, Ratio::new(5, 6));
        test(Ratio::new(1, 6), Ratio::new(1, 3), _1_2);
    }

    #[test]
    fn test_sub() {
        fn test(a: Rational, b: Rational, c: Rational) {
            assert_eq!(a - b, c);
            assert_eq!(a.try_sub(&b), Ok(c));
            let mut acc = a;
            acc -= b;
            assert_eq!(acc, c);
        }

        test(_1, _1_2, _1_2);
        test(_3_2, _1_2, _1);
        test(_1, _NEG1_2, _3_2);
        test(_1_3, _1_2, Ratio::new(-1, 6));
    }

    #[test]
    fn test_mul() {
        fn test(a: Rational, b: Rational, c: Rational) {
            assert_eq!(a * b, c);
            assert_eq!(b * a, c);
            assert_eq!(a.try_mul(&b), Ok(c));
            let mut acc = a;
            acc *= b;
            assert_eq!(acc, c);
        }

        test(_1, _1_2, _1_2);
        test(_1_2, _3_2, Ratio::new(3, 4));
        test(_1_2, _NEG1_2, Ratio::new(-1, 4));
        test(_2_3, _3_2, _1);
    }

    #[test]
    fn test_div() {
        fn test(a: Rational, b: Rational, c: Rational) {
            assert_eq!(a / b, c);
            assert_eq!(a.try_div(&b), Ok(c));
            let mut acc = a;
            acc /= b;
            assert_eq!(acc, c);
        }

        test(_1, _1_2, _2);
        test(_3_2, _1_2, _1 + _2);
        test(_1, _NEG1_2, _NEG1_2 + _NEG1_2 + _NEG1_2 + _NEG1_2);
        test(_NEG1_2, _NEG2, Ratio::new(1, 4));
    }

    #[test]
    fn test_integer_operand() {
        assert_eq!(_1_2 + 1, _3_2);
        assert_eq!(_1_2 - 1, _NEG1_2);
        assert_eq!(_1_3 * 3, _1);
        assert_eq!(_3_2 / 3, _1_2);
        assert_eq!(&_1_2 + 1, _3_2);

        let mut r = _1_2;
        r += 1;
        r *= 2;
        assert_eq!(r, Ratio::from_integer(3));
    }

    #[test]
    fn test_neg() {
        fn test(a: Rational, b: Rational) {
            assert_eq!(-a, b);
            assert_eq!(-&a, b);
        }

        test(_0, _0);
        test(_1_2, _NEG1_2);
        test(-_1, _1);
        assert_eq!((-_1_2).denom(), &2);
    }

    #[test]
    fn test_zero() {
        assert_eq!(_0 + _0, _0);
        assert_eq!(_0 * _0, _0);
        assert_eq!(_0 * _1, _0);
        assert_eq!(_0 / _NEG1_2, _0);
        assert_eq!(_0 - _0, _0);
        assert_eq!((_1_2 - _1_2).denom(), &1);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_0() {
        let _a = _1 / _0;
    }

    #[test]
    fn test_try_div_0() {
        let three: Rational64 = Ratio::from_integer(3);
        let err = three.try_div(&Ratio::from_integer(0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
        assert_eq!(three.checked_div(&Ratio::from_integer(0)), None);
    }

    #[test]
    fn test_recip() {
        assert_eq!(_1 * _1.recip(), _1);
        assert_eq!(_2 * _2.recip(), _1);
        assert_eq!(_1_2 * _1_2.recip(), _1);
        assert_eq!(_3_2 * _3_2.recip(), _1);
        assert_eq!(_NEG1_2 * _NEG1_2.recip(), _1);

        assert_eq!(_3_2.recip(), _2_3);
        assert_eq!(_NEG1_2.recip(), _NEG2);
        assert_eq!(_NEG1_2.recip().denom(), &1);
    }

    #[test]
    #[should_panic(expected = "== 0")]
    fn test_recip_fail() {
        let _a = Ratio::new(0, 1).recip();
    }

    #[test]
    fn test_try_recip() {
        assert_eq!(_3_2.try_recip(), Ok(_2_3));
        let err = _0.try_recip().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }

    #[test]
    fn test_checked_overflow() {
        let max = Ratio::from_integer(i64::MAX);
        let min_plus_one = Ratio::from_integer(i64::MIN + 1);
        let one = Ratio::from_integer(1i64);

        assert_eq!(max.checked_add(&one), None);
        assert_eq!(min_plus_one.checked_sub(&Ratio::from_integer(2)), None);
        assert_eq!(max.checked_mul(&Ratio::from_integer(2)), None);
        assert_eq!(one.checked_div(&Ratio::new(1, i64::MAX)), Some(max));
        assert_eq!(max.checked_div(&Ratio::new(1, 2)), None);

        assert_eq!(max.try_add(&one).unwrap_err().kind(), ErrorKind::Overflow);
        assert_eq!(max.try_mul(&max).unwrap_err().kind(), ErrorKind::Overflow);
    }

    #[test]
    fn test_cancellation_avoids_overflow() {
        // naive cross products of these overflow i64
        let a = Ratio::new(i64::MAX, 2);
        let b = Ratio::new(2, i64::MAX);
        assert_eq!(a * b, Ratio::from_integer(1));

        let c = Ratio::new(1, i64::MAX);
        assert_eq!(c + c, Ratio::new(2, i64::MAX));
        assert_eq!(c - c, Ratio::from_integer(0));
    }

    #[test]
    fn test_add_sub_reduced_result_fits() {
        let half_max = Rational64::new(i64::MAX, 2);
        assert_eq!(half_max.checked_add(&half_max), Some(Ratio::from_integer(i64::MAX)));
        assert_eq!(half_max.try_add(&half_max), Ok(Ratio::from_integer(i64::MAX)));

        let neg_half_max = -half_max;
        assert_eq!(neg_half_max + neg_half_max, Ratio::from_integer(-i64::MAX));
        assert_eq!(neg_half_max - half_max, Ratio::from_integer(-i64::MAX));
        assert_eq!(half_max - neg_half_max, Ratio::from_integer(i64::MAX));

        let sixth = Rational64::new(i64::MAX, 6);
        assert_eq!(sixth + Ratio::new(i64::MAX, 3), half_max);

        let max = Rational64::from_integer(i64::MAX);
        assert_eq!(max.checked_add(&Ratio::new(1, 2)), None);
    }

    #[test]
    fn test_unsigned_sub() {
        let a = Ratio::new(1u32, 2);
        let b = Ratio::new(1u32, 3);
        assert_eq!(a - b, Ratio::new(1, 6));
        assert_eq!(b.checked_sub(&a), None);
        assert_eq!(Ratio::new(7u32, 3) - Ratio::new(1, 2), Ratio::new(11, 6));
    }

    #[test]
    #[should_panic(expected = "attempt to add with overflow")]
    fn test_add_overflow_panics() {
        let _a = Ratio::from_integer(i64::MAX) + 1;
    }
}
