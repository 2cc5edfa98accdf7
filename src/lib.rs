//! An optional-value container, [`Maybe`], and pure combinators over it.
//!
//! A `Maybe<T>` is either `Just(value)` or `Nothing`. Functions over plain values are lifted into
//! the container with [`lift_maybe`], and functions returning `Maybe` are sequenced with
//! [`and_then_maybe`] so that the first `Nothing` short-circuits everything after it.
//! The only ways absence stops being silent are the contract-checked [`unsafe_get_just`] and the
//! explicit conversions [`throw_on_nothing`] / [`throw_type_on_nothing`].

pub mod bind;
pub mod contracts;
pub mod error;
pub mod lift;
mod logger;
pub mod maybe;

// Public Re-exports
pub use bind::{and_then_maybe, and_then_maybe3, and_then_maybe4, flatten_maybe};
pub use error::{NothingError, throw_on_nothing, throw_type_on_nothing};
pub use lift::{lift_maybe, lift_maybe_2, lift_maybe_2_def, lift_maybe_def};
pub use maybe::Maybe::{self, Just, Nothing};
pub use maybe::{
    OptionExt, as_just_if, is_just, is_nothing, just, just_with_default, nothing, unsafe_get_just,
};

pub(crate) mod private {
    // sealed traits support
    pub trait Sealed {}
    impl<T> Sealed for T {}
}
