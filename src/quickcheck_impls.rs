use integer::Integer;
use quickcheck::{Arbitrary, Gen};
use traits::{Bounded, One, Zero};

use crate::Ratio;

// A negative `T::min_value()` is nudged up by one: a negative odd
// denominator would otherwise have to negate it during reduction.
fn representable<T: Integer + Bounded>(x: T) -> T {
    if x == T::min_value() && x < T::zero() {
        x + T::one()
    } else {
        x
    }
}

impl<T> Arbitrary for Ratio<T>
where
    T: Arbitrary + Clone + Integer + Bounded,
{
    fn arbitrary(g: &mut Gen) -> Self {
        let numer = representable(T::arbitrary(g));
        let denom = representable(T::arbitrary(g));
        if denom.is_zero() {
            Ratio::from_integer(numer)
        } else {
            Ratio::new(numer, denom)
        }
    }

    /// Shrinks the numerator first, then the denominator.
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let numer = self.numer.clone();
        let denom = self.denom.clone();
        let by_numer = {
            let denom = denom.clone();
            self.numer.shrink().map(move |n| Ratio::new(n, denom.clone()))
        };
        let by_denom = denom
            .shrink()
            .filter(|d| !d.is_zero())
            .map(move |d| Ratio::new(numer.clone(), d));
        Box::new(by_numer.chain(by_denom))
    }
}
