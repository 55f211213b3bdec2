// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversion from floats through their decimal rendering.

use std::fmt::Display;

use integer::Integer;
use log::{debug, trace};
use traits::{checked_pow, CheckedMul, Float, FromPrimitive, One, Zero};

use crate::{ErrorKind, Ratio, RationalError};

impl<T> Ratio<T>
where
    T: Clone + Integer + CheckedMul + FromPrimitive,
{
    /// Converts a float into the ratio its decimal rendering spells out.
    ///
    /// The shortest decimal string that round-trips to `f` is taken as the
    /// intended value, so `0.1` becomes exactly `1/10` rather than the
    /// binary fraction closest to it.
    ///
    /// ```
    /// use exact_rational::{Ratio, Rational64};
    ///
    /// assert_eq!(Rational64::from_float(0.1), Ok(Ratio::new(1, 10)));
    /// assert_eq!(Rational64::from_float(-2.5f32), Ok(Ratio::new(-5, 2)));
    /// ```
    ///
    /// Fails with `ErrorKind::InvalidArgument` on NaN, on infinities and on
    /// negative input for an unsigned `T`. Fails with `ErrorKind::Overflow`
    /// when the digits, their decimal scale or the reduced ratio do not fit
    /// `T`.
    #[inline]
    pub fn from_float<F: Float + Display>(f: F) -> Result<Ratio<T>, RationalError> {
        Ratio::from_float_with_denom(f, T::one())
    }

    /// Converts `f / denom` into a ratio, reading `f` as in
    /// [`Ratio::from_float`].
    pub fn from_float_with_denom<F: Float + Display>(
        f: F,
        denom: T,
    ) -> Result<Ratio<T>, RationalError> {
        if denom.is_zero() {
            debug!("rejecting float conversion over a zero denominator");
            return Err(RationalError::new(ErrorKind::InvalidArgument));
        }
        if !f.is_finite() {
            debug!("rejecting non-finite float {}", f);
            return Err(RationalError::new(ErrorKind::InvalidArgument));
        }

        if f.is_zero() {
            return Ok(Ratio::new_raw(T::zero(), T::one()));
        }
        if f < F::zero() && T::from_i8(-1).is_none() {
            debug!("rejecting negative float {} for an unsigned type", f);
            return Err(RationalError::new(ErrorKind::InvalidArgument));
        }

        // `Display` for floats never switches to exponent notation
        let rendered = f.to_string();
        let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
        let digits = [whole, fraction].concat();

        let overflow = || {
            debug!("{} does not fit the component type", rendered);
            RationalError::new(ErrorKind::Overflow)
        };
        let numer = T::from_str_radix(&digits, 10).map_err(|_| overflow())?;
        let scale = T::from_u8(10)
            .and_then(|ten| checked_pow(ten, fraction.len()))
            .ok_or_else(overflow)?;

        // cancel before scaling the denominator
        let g = numer.gcd(&scale);
        let (numer, scale) = (numer / g.clone(), scale / g);
        let g = numer.gcd(&denom);
        let (numer, denom) = (numer / g.clone(), denom / g);
        let denom = denom.checked_mul(&scale).ok_or_else(overflow)?;

        trace!("read float {} as {} over 10^{}", rendered, digits, fraction.len());
        Ok(Ratio::new(numer, denom))
    }
}
