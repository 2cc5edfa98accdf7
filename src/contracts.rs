//! Runtime contracts for the partial accessors of [`Maybe`](crate::Maybe).
//!
//! `unsafe_get_just` is checked by convention: callers test `is_just` first. Reaching `Nothing`
//! anyway is a programming error, so it panics instead of surfacing as a `Result`.

/// Message prefix shared by every contract failure in this crate.
pub const CONTRACT_VIOLATION: &str = "Contract violation";

/// Fails the `is_just` precondition of `unsafe_get_just`.
///
/// # Panics
/// Always.
#[cold]
#[inline(never)]
#[track_caller]
pub fn nothing_accessed() -> ! {
    panic!("{CONTRACT_VIOLATION}: unsafe_get_just called on Nothing")
}
