use crate::logger::trace;
use crate::maybe::Maybe;
use thiserror::Error;

/// Ready-made failure value for turning absence into an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Error)]
#[error("expected a Just value, found Nothing")]
pub struct NothingError;

/// Returns the contained value, or fails with the caller-supplied `error` on `Nothing`.
///
/// This is the one place absence becomes a propagated failure; use `?` on the result to raise it.
pub fn throw_on_nothing<E, T>(error: E, maybe: Maybe<T>) -> Result<T, E> {
    match maybe {
        Maybe::Just(value) => Ok(value),
        Maybe::Nothing => {
            trace!(
                "Nothing converted into error of type {}",
                std::any::type_name::<E>()
            );
            Err(error)
        }
    }
}

/// Like [`throw_on_nothing`], with the error built from `E::default()` only when needed.
pub fn throw_type_on_nothing<E, T>(maybe: Maybe<T>) -> Result<T, E>
where
    E: Default,
{
    match maybe {
        Maybe::Just(value) => Ok(value),
        Maybe::Nothing => {
            trace!(
                "Nothing converted into default error of type {}",
                std::any::type_name::<E>()
            );
            Err(E::default())
        }
    }
}
