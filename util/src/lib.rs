//! Functional-programming building blocks shared across the workspace.

pub mod func;
