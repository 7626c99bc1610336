//! Core primitives for member declaration generation.
//!
//! This crate provides the pieces of the declaration engine that know
//! nothing about descriptors: accessor naming, modifier translation and
//! the shared error type.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod modifier;
mod naming;

// Errors
pub use error::{Argument, Error, Result};
// Modifiers
pub use modifier::{Modifier, ModifierFlags, ModifierSet, translate};
// Naming
pub use naming::{
    NamedField, accessor_name_for, first_letter_to_lower_case, first_letter_to_upper_case,
    getter_name_for, setter_name_for,
};
