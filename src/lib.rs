// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Exact rational numbers over fixed-width integers.
//!
//! A `Ratio<T>` is kept in lowest terms with a positive denominator at all
//! times, so two ratios are equal exactly when their fields are equal.
//!
//! ## Example
//!
//! ```
//! use exact_rational::{ErrorKind, Ratio, Rational64};
//!
//! let a = Rational64::new(1, 2);
//! let b = Rational64::new(1, 3);
//! assert_eq!((a + b).to_string(), "(5/6)");
//!
//! assert_eq!(Rational64::new(2, -4), Ratio::new(-1, 2));
//! assert_eq!(Rational64::from_float(0.25), Ok(Ratio::new(1, 4)));
//!
//! let err = Rational64::from_integer(3).try_div(&Ratio::from_integer(0)).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::DivisionByZero);
//! ```
//!
//! ## Overflow
//!
//! Components are fixed-width. The operators (`+`, `-`, `*`, `/`) and `pow`
//! panic on overflow, in debug and release builds alike. Use the `Checked*`
//! traits or the `try_*` methods to observe overflow instead.
//!
//! Products cancel common factors before multiplying, so `*` and `/` fail
//! only when the reduced result does not fit `T`. Sums and differences add
//! integer parts separately and put only the fractional parts over a common
//! denominator. They fail when the reduced result does not fit, and also when
//! a fractional part scaled to the least common denominator of the operands
//! does not.
//! Components equal to `T::min_value()` are outside the supported range,
//! since canonicalizing their sign may require negating them.

extern crate num_integer as integer;
extern crate num_traits as traits;

#[cfg(feature = "quickcheck")]
extern crate quickcheck;

use std::fmt;
use std::ops::Neg;

use integer::Integer;
use log::debug;
use traits::{checked_pow, CheckedAdd, CheckedMul, CheckedSub, One, ToPrimitive, Zero};

mod cmp;
mod error;
mod float;
mod ops;
#[cfg(feature = "quickcheck")]
mod quickcheck_impls;

pub use error::{ErrorKind, RationalError};

/// Represents the ratio between 2 numbers, in lowest terms.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Ratio<T> {
    numer: T,
    denom: T,
}

/// Alias for a `Ratio` of machine-sized integers.
pub type Rational = Ratio<isize>;
pub type Rational32 = Ratio<i32>;
pub type Rational64 = Ratio<i64>;

impl<T: Clone + Integer> Ratio<T> {
    /// Creates a new `Ratio` in lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `denom` is zero. See [`Ratio::try_new`] for a fallible
    /// version.
    #[inline]
    pub fn new(numer: T, denom: T) -> Ratio<T> {
        if denom.is_zero() {
            panic!("denominator == 0");
        }
        let mut ret = Ratio::new_raw(numer, denom);
        ret.reduce();
        ret
    }

    /// Creates a new `Ratio` in lowest terms, failing with
    /// `ErrorKind::InvalidArgument` if `denom` is zero.
    pub fn try_new(numer: T, denom: T) -> Result<Ratio<T>, RationalError> {
        if denom.is_zero() {
            debug!("rejecting ratio with a zero denominator");
            return Err(RationalError::new(ErrorKind::InvalidArgument));
        }
        Ok(Ratio::new(numer, denom))
    }

    /// Creates a `Ratio` representing the integer `t`.
    #[inline]
    pub fn from_integer(t: T) -> Ratio<T> {
        Ratio::new_raw(t, One::one())
    }

    /// Callers must hand in a denominator that is positive and coprime with
    /// the numerator, or only use the result for ordering.
    #[inline]
    pub(crate) fn new_raw(numer: T, denom: T) -> Ratio<T> {
        Ratio { numer, denom }
    }

    /// Gets an immutable reference to the numerator.
    #[inline]
    pub fn numer(&self) -> &T {
        &self.numer
    }

    /// Gets an immutable reference to the denominator. Always positive.
    #[inline]
    pub fn denom(&self) -> &T {
        &self.denom
    }

    /// Replaces the numerator and brings the ratio back to lowest terms.
    pub fn set_numer(&mut self, numer: T) {
        self.numer = numer;
        self.reduce();
    }

    /// Replaces the denominator and brings the ratio back to lowest terms.
    ///
    /// A zero denominator is rejected with `ErrorKind::InvalidArgument` and
    /// leaves `self` untouched.
    pub fn set_denom(&mut self, denom: T) -> Result<(), RationalError> {
        if denom.is_zero() {
            debug!("rejecting zero denominator in set_denom");
            return Err(RationalError::new(ErrorKind::InvalidArgument));
        }
        self.denom = denom;
        self.reduce();
        Ok(())
    }

    /// Returns true if the rational number is an integer (denominator is 1).
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numer > T::zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer < T::zero()
    }

    /// Converts to an integer, rounding towards zero.
    #[inline]
    pub fn to_integer(&self) -> T {
        self.numer.clone() / self.denom.clone()
    }

    /// Puts self into lowest terms, with denom > 0.
    fn reduce(&mut self) {
        let one = T::one();
        let mut g = self.numer.gcd(&self.denom);
        while g != one {
            self.numer = self.numer.clone() / g.clone();
            self.denom = self.denom.clone() / g;
            g = self.numer.gcd(&self.denom);
        }

        if self.denom < T::zero() {
            self.numer = T::zero() - self.numer.clone();
            self.denom = T::zero() - self.denom.clone();
        }
    }

    /// Rounds towards zero.
    #[inline]
    pub fn trunc(&self) -> Ratio<T> {
        Ratio::from_integer(self.to_integer())
    }

    /// Rounds towards minus infinity.
    #[inline]
    pub fn floor(&self) -> Ratio<T> {
        Ratio::from_integer(self.numer.div_floor(&self.denom))
    }

    /// Rounds towards plus infinity.
    pub fn ceil(&self) -> Ratio<T> {
        let (quot, rem) = self.numer.div_mod_floor(&self.denom);
        if rem.is_zero() {
            Ratio::from_integer(quot)
        } else {
            Ratio::from_integer(quot + T::one())
        }
    }

    /// Rounds to the nearest integer. Rounds half-way cases away from zero.
    pub fn round(&self) -> Ratio<T> {
        let zero = T::zero();
        let (quot, rem) = self.numer.div_rem(&self.denom);
        let rem = if rem < zero { zero - rem } else { rem };

        // |rem| / denom >= 1/2, written so that nothing is doubled
        if rem >= self.denom.clone() - rem.clone() {
            if self.is_negative() {
                Ratio::from_integer(quot - T::one())
            } else {
                Ratio::from_integer(quot + T::one())
            }
        } else {
            Ratio::from_integer(quot)
        }
    }

    /// Returns the fractional part of a number, with division rounded towards zero.
    ///
    /// Satisfies `self == self.trunc() + self.fract()`.
    #[inline]
    pub fn fract(&self) -> Ratio<T> {
        // numer % denom stays coprime with denom
        Ratio::new_raw(self.numer.clone() % self.denom.clone(), self.denom.clone())
    }
}

impl<T: Clone + Integer + Neg<Output = T>> Ratio<T> {
    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Ratio<T> {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// Returns `1`, `0` or `-1` depending on the sign of `self`.
    pub fn signum(&self) -> Ratio<T> {
        if self.is_positive() {
            Ratio::from_integer(T::one())
        } else if self.is_negative() {
            Ratio::from_integer(-T::one())
        } else {
            Ratio::from_integer(T::zero())
        }
    }
}

impl<T> Ratio<T>
where
    T: Clone + Integer + CheckedAdd + CheckedSub + CheckedMul,
{
    /// Raises the `Ratio` to the power of an exponent.
    ///
    /// # Panics
    ///
    /// Panics on a zero base with a negative exponent, and when the result
    /// does not fit `T`.
    #[inline]
    pub fn pow(&self, expon: i32) -> Ratio<T> {
        match self.try_pow(expon) {
            Ok(ret) => ret,
            Err(err) if err.kind() == ErrorKind::DivisionByZero => panic!("numerator == 0"),
            Err(_) => panic!("attempt to multiply with overflow"),
        }
    }

    /// Raises the `Ratio` to the power of an exponent, failing with
    /// `ErrorKind::DivisionByZero` on a zero base with a negative exponent
    /// and with `ErrorKind::Overflow` when the result does not fit `T`.
    pub fn try_pow(&self, expon: i32) -> Result<Ratio<T>, RationalError> {
        let base = if expon < 0 {
            self.try_recip()?
        } else {
            self.clone()
        };
        let expon = expon.unsigned_abs() as usize;
        // powers of coprime integers stay coprime
        match (
            checked_pow(base.numer, expon),
            checked_pow(base.denom, expon),
        ) {
            (Some(numer), Some(denom)) => Ok(Ratio::new_raw(numer, denom)),
            _ => {
                debug!("power {} overflowed the component type", expon);
                Err(RationalError::new(ErrorKind::Overflow))
            }
        }
    }
}

// From integer
impl<T> From<T> for Ratio<T>
where
    T: Clone + Integer,
{
    fn from(x: T) -> Ratio<T> {
        Ratio::from_integer(x)
    }
}

// From pair (through the `new` constructor)
impl<T> From<(T, T)> for Ratio<T>
where
    T: Clone + Integer,
{
    fn from(pair: (T, T)) -> Ratio<T> {
        Ratio::new(pair.0, pair.1)
    }
}

#[allow(clippy::from_over_into)]
impl<T> Into<(T, T)> for Ratio<T> {
    fn into(self) -> (T, T) {
        (self.numer, self.denom)
    }
}

// Constants
impl<T> Zero for Ratio<T>
where
    T: Clone + Integer + CheckedAdd + CheckedSub + CheckedMul,
{
    #[inline]
    fn zero() -> Ratio<T> {
        Ratio::new_raw(Zero::zero(), One::one())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<T> One for Ratio<T>
where
    T: Clone + Integer + CheckedAdd + CheckedSub + CheckedMul,
{
    #[inline]
    fn one() -> Ratio<T> {
        Ratio::new_raw(One::one(), One::one())
    }
}

impl<T: Clone + Integer + ToPrimitive> ToPrimitive for Ratio<T> {
    /// Truncates towards zero.
    fn to_i64(&self) -> Option<i64> {
        self.to_integer().to_i64()
    }

    /// Truncates towards zero.
    fn to_u64(&self) -> Option<u64> {
        self.to_integer().to_u64()
    }

    /// Lossy: `numer / denom` evaluated in `f64`.
    fn to_f64(&self) -> Option<f64> {
        Some(self.numer.to_f64()? / self.denom.to_f64()?)
    }
}

impl<T: fmt::Display> fmt::Display for Ratio<T> {
    /// Renders as `(numer/denom)`, also for integers.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}/{})", self.numer, self.denom)
    }
}
