// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::error::Error;
use std::fmt;

/// The error returned by the fallible constructors and operations of
/// [`Ratio`](crate::Ratio).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RationalError {
    kind: ErrorKind,
}

/// What went wrong in a [`RationalError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A zero denominator, or a float that is NaN or infinite.
    InvalidArgument,
    /// Division by, or the reciprocal of, a zero ratio.
    DivisionByZero,
    /// The reduced result does not fit the component type.
    Overflow,
}

impl RationalError {
    #[inline]
    pub(crate) fn new(kind: ErrorKind) -> RationalError {
        RationalError { kind }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl ErrorKind {
    fn description(&self) -> &'static str {
        match *self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::DivisionByZero => "division by zero",
            ErrorKind::Overflow => "result does not fit the component type",
        }
    }
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.kind.description().fmt(f)
    }
}

impl Error for RationalError {}
