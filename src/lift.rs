//! Lifting plain functions into the [`Maybe`] functor.
//!
//! A lifted function maps `Nothing` to `Nothing` (or to a default) and applies the original
//! function to the payload of a `Just`. Arity is fixed by the [`F1`]/[`F2`] bounds, so a
//! callable of the wrong shape is rejected when the lift is built, never when it is called.

use crate::maybe::Maybe::{self, Just, Nothing};
use util::func::f1::F1;
use util::func::f2::F2;

/// Lifts `f: A -> B` into `Maybe<A> -> Maybe<B>`.
///
/// Obeys the functor laws: lifting the identity gives the identity, and lifting a composition
/// equals composing the lifts.
pub fn lift_maybe<F, A, B>(f: F) -> impl Fn(Maybe<A>) -> Maybe<B>
where
    F: F1<A, Output = B>,
{
    move |maybe| maybe.map(|a| f.call1(a))
}

/// Lifts `f: A -> B` into `Maybe<A> -> B`, answering `default` for `Nothing`.
pub fn lift_maybe_def<F, A, B>(default: B, f: F) -> impl Fn(Maybe<A>) -> B
where
    F: F1<A, Output = B>,
    B: Clone,
{
    move |maybe| match maybe {
        Just(a) => f.call1(a),
        Nothing => default.clone(),
    }
}

/// Lifts a binary `f: (A, B) -> C` into `(Maybe<A>, Maybe<B>) -> Maybe<C>`.
///
/// The result is `Just` only when both arguments are.
pub fn lift_maybe_2<F, A, B, C>(f: F) -> impl Fn(Maybe<A>, Maybe<B>) -> Maybe<C>
where
    F: F2<A, B, Output = C>,
{
    move |maybe_a, maybe_b| match (maybe_a, maybe_b) {
        (Just(a), Just(b)) => Just(f.call2(a, b)),
        _ => Nothing,
    }
}

/// Binary counterpart of [`lift_maybe_def`].
pub fn lift_maybe_2_def<F, A, B, C>(default: C, f: F) -> impl Fn(Maybe<A>, Maybe<B>) -> C
where
    F: F2<A, B, Output = C>,
    C: Clone,
{
    move |maybe_a, maybe_b| match (maybe_a, maybe_b) {
        (Just(a), Just(b)) => f.call2(a, b),
        _ => default.clone(),
    }
}
