//! Monadic composition over [`Maybe`].
//!
//! [`and_then_maybe`] sequences two `Maybe`-returning functions: the payload of the first result
//! feeds the second, and a `Nothing` anywhere ends the chain without calling the remaining
//! stages. Longer chains nest the binary form from the left, see [`and_then_maybe3`],
//! [`and_then_maybe4`] and the [`and_then_maybe!`](crate::and_then_maybe!) macro.

use crate::maybe::Maybe::{self, Just, Nothing};
use util::func::f1::F1;

/// Composes `f: A -> Maybe<B>` with `g: BIn -> Maybe<C>` into `A -> Maybe<C>`.
///
/// `B` only has to convert into `BIn`, so stages with compatible but distinct domains chain
/// without glue code. `g` runs only when `f` produced a `Just`.
pub fn and_then_maybe<F, G, A, B, BIn, C>(f: F, g: G) -> impl Fn(A) -> Maybe<C>
where
    F: F1<A, Output = Maybe<B>>,
    G: F1<BIn, Output = Maybe<C>>,
    B: Into<BIn>,
{
    move |a| match f.call1(a) {
        Just(b) => g.call1(b.into()),
        Nothing => Nothing,
    }
}

/// `and_then_maybe(and_then_maybe(f, g), h)`.
pub fn and_then_maybe3<F, G, H, A, B, BIn, C, CIn, D>(
    f: F,
    g: G,
    h: H,
) -> impl Fn(A) -> Maybe<D>
where
    F: F1<A, Output = Maybe<B>>,
    G: F1<BIn, Output = Maybe<C>>,
    H: F1<CIn, Output = Maybe<D>>,
    B: Into<BIn>,
    C: Into<CIn>,
{
    and_then_maybe(and_then_maybe(f, g), h)
}

/// `and_then_maybe(and_then_maybe3(f, g, h), i)`.
#[allow(clippy::many_single_char_names)]
pub fn and_then_maybe4<F, G, H, I, A, B, BIn, C, CIn, D, DIn, E>(
    f: F,
    g: G,
    h: H,
    i: I,
) -> impl Fn(A) -> Maybe<E>
where
    F: F1<A, Output = Maybe<B>>,
    G: F1<BIn, Output = Maybe<C>>,
    H: F1<CIn, Output = Maybe<D>>,
    I: F1<DIn, Output = Maybe<E>>,
    B: Into<BIn>,
    C: Into<CIn>,
    D: Into<DIn>,
{
    and_then_maybe(and_then_maybe3(f, g, h), i)
}

/// Folds any number (at least two) of `Maybe`-returning stages with [`and_then_maybe`].
///
/// `and_then_maybe!(f, g, h)` expands to `and_then_maybe(and_then_maybe(f, g), h)`.
#[macro_export]
macro_rules! and_then_maybe {
    ($f:expr, $g:expr $(,)?) => {
        $crate::bind::and_then_maybe($f, $g)
    };
    ($f:expr, $g:expr, $($rest:expr),+ $(,)?) => {
        $crate::and_then_maybe!($crate::bind::and_then_maybe($f, $g), $($rest),+)
    };
}

/// Collapses `Maybe<Maybe<T>>` into `Maybe<T>`, also known as `join`.
#[inline]
pub fn flatten_maybe<T>(maybe_maybe: Maybe<Maybe<T>>) -> Maybe<T> {
    maybe_maybe.flatten()
}
