use crate::contracts;
use crate::private;
use derive_more::Display;
use extend::ext;

/// Either exactly one value of type `T` or no value at all.
///
/// Equality and hashing follow the payload: two `Just`s are equal iff their values are,
/// `Nothing == Nothing`, and a `Just` never equals `Nothing`.
#[must_use]
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    #[display("Just {_0}")]
    Just(T),
    #[display("Nothing")]
    Nothing,
}

use Maybe::{Just, Nothing};

impl<T> Maybe<T> {
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Just(_))
    }

    #[inline]
    pub const fn is_nothing(&self) -> bool {
        !self.is_just()
    }

    /// Takes the contained value out.
    ///
    /// The caller must have checked [`Maybe::is_just`]: calling this on `Nothing` is a contract
    /// violation and panics.
    #[inline]
    #[track_caller]
    pub fn unsafe_get_just(self) -> T {
        match self {
            Just(value) => value,
            Nothing => contracts::nothing_accessed(),
        }
    }

    /// Borrowing form of [`Maybe::unsafe_get_just`], with the same contract.
    #[inline]
    #[track_caller]
    pub fn unsafe_get_just_ref(&self) -> &T {
        match self {
            Just(value) => value,
            Nothing => contracts::nothing_accessed(),
        }
    }

    /// The contained value, or `default` for `Nothing`.
    #[inline]
    pub fn just_with_default(self, default: T) -> T {
        match self {
            Just(value) => value,
            Nothing => default,
        }
    }

    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Just(value) => Just(value),
            Nothing => Nothing,
        }
    }

    /// One-shot functor map; [`crate::lift_maybe`] builds the reusable version.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Just(value) => Just(f(value)),
            Nothing => Nothing,
        }
    }

    /// One-shot monadic bind; [`crate::and_then_maybe`] builds the reusable version.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Just(value) => f(value),
            Nothing => Nothing,
        }
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Just(value) => Some(value),
            Nothing => None,
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Collapses one level of nesting, also known as `join`.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Just(inner) => inner,
            Nothing => Nothing,
        }
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Just(value),
            None => Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

/// Trait for holding the [`Option`] extension methods.
#[ext(pub, name = OptionExt, supertraits = private::Sealed)]
impl<T> Option<T> {
    /// `Some(v)` becomes `Just(v)`, `None` becomes `Nothing`.
    fn into_maybe(self) -> Maybe<T> {
        Maybe::from(self)
    }
}

/// Wraps `value` as a `Just`.
#[inline]
pub const fn just<T>(value: T) -> Maybe<T> {
    Just(value)
}

/// A `Nothing` of a chosen `Maybe` type, usually spelled `nothing::<T>()`.
#[inline]
pub const fn nothing<T>() -> Maybe<T> {
    Nothing
}

#[inline]
pub const fn is_just<T>(maybe: &Maybe<T>) -> bool {
    maybe.is_just()
}

#[inline]
pub const fn is_nothing<T>(maybe: &Maybe<T>) -> bool {
    maybe.is_nothing()
}

/// See [`Maybe::unsafe_get_just`]. Panics on `Nothing`.
#[inline]
#[track_caller]
pub fn unsafe_get_just<T>(maybe: Maybe<T>) -> T {
    maybe.unsafe_get_just()
}

#[inline]
pub fn just_with_default<T>(default: T, maybe: Maybe<T>) -> T {
    maybe.just_with_default(default)
}

/// `Just(value)` if `pred` accepts it, `Nothing` otherwise.
#[inline]
pub fn as_just_if<T, P>(pred: P, value: T) -> Maybe<T>
where
    P: FnOnce(&T) -> bool,
{
    if pred(&value) { Just(value) } else { Nothing }
}

#[cfg(test)]
mod tests {
    use crate::maybe::{
        Maybe, OptionExt, as_just_if, is_just, is_nothing, just, just_with_default, nothing,
        unsafe_get_just,
    };
    use std::collections::HashSet;

    #[test]
    fn constructors_pick_the_variant() {
        assert!(is_just(&just(1)));
        assert!(!is_nothing(&just(1)));
        assert!(is_nothing(&nothing::<i32>()));
        assert!(!is_just(&nothing::<i32>()));
        assert_eq!(unsafe_get_just(just("value")), "value");
    }

    #[test]
    fn equality_follows_payload() {
        assert_eq!(just(1), just(1));
        assert_ne!(just(1), just(2));
        assert_ne!(just(1), nothing());
        assert_eq!(nothing::<i32>(), nothing::<i32>());
        assert_eq!(Maybe::<u8>::default(), nothing());
    }

    #[test]
    fn hash_agrees_with_equality() {
        let set: HashSet<Maybe<i32>> = [just(1), just(1), nothing(), just(2), nothing()]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn clones_do_not_alias() {
        let original = just(vec![1, 2, 3]);
        let mut copy = original.clone();
        if let Maybe::Just(values) = &mut copy {
            values.push(4);
        }
        assert_eq!(original, just(vec![1, 2, 3]));
        assert_eq!(copy, just(vec![1, 2, 3, 4]));
    }

    #[test]
    fn defaults() {
        assert_eq!(just_with_default(0, just(5)), 5);
        assert_eq!(just_with_default(0, nothing()), 0);
        assert_eq!(just(String::from("a")).just_with_default(String::new()), "a");
    }

    #[test]
    fn borrowing_accessors() {
        let maybe = just(String::from("borrowed"));
        assert_eq!(maybe.unsafe_get_just_ref(), "borrowed");
        assert_eq!(maybe.as_ref().map(String::len), just(8));
        assert_eq!(nothing::<String>().as_ref(), nothing());
    }

    #[test]
    #[should_panic(expected = "Contract violation")]
    fn unsafe_get_just_panics_on_nothing() {
        let _ = unsafe_get_just(nothing::<i32>());
    }

    #[test]
    #[should_panic(expected = "Contract violation")]
    fn unsafe_get_just_ref_panics_on_nothing() {
        let _ = nothing::<i32>().unsafe_get_just_ref();
    }

    #[test]
    fn option_round_trip() {
        assert_eq!(Some(3).into_maybe(), just(3));
        assert_eq!(None::<i32>.into_maybe(), nothing());
        assert_eq!(Option::<i32>::from(just(3)), Some(3));
        assert_eq!(nothing::<i32>().into_option(), None);
    }

    #[test]
    fn display() {
        assert_eq!(just(5).to_string(), "Just 5");
        assert_eq!(nothing::<i32>().to_string(), "Nothing");
        assert_eq!(just(just("x")).to_string(), "Just Just x");
    }

    #[test]
    fn conditional_construction() {
        assert_eq!(as_just_if(|x: &i32| *x > 0, 4), just(4));
        assert_eq!(as_just_if(|x: &i32| *x > 0, -4), nothing());
    }

    #[test]
    fn no_extra_storage_for_niche_payloads() {
        assert_eq!(std::mem::size_of::<Maybe<&u64>>(), std::mem::size_of::<&u64>());
        assert_eq!(std::mem::size_of::<Maybe<Box<u64>>>(), std::mem::size_of::<Box<u64>>());
    }
}
