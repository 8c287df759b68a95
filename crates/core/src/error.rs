//! Core error types.
//!
//! The engine itself is infallible once input passes boundary validation:
//! [`FilterError`] is produced only by [`Filter::validate`](crate::filter_types::Filter::validate)
//! at the request boundary, and [`CatalogError`] only by snapshot access
//! before the first catalog install.

use crate::field::{Field, FieldKind};
use crate::filter_types::Action;
use thiserror::Error;

/// Catalog cache access failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No catalog snapshot has been installed yet. Distinct from an empty
    /// catalog so callers can tell "no matches" from "data unavailable".
    #[error("catalog not loaded yet")]
    NotReady,
}

/// Filter validation failures, rejected at the request boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The action is not legal for the field's type class.
    #[error("action {action} is not supported for {kind} field '{field}'")]
    UnsupportedAction {
        field: Field,
        action: Action,
        kind: FieldKind,
    },
    /// The value's shape does not fit the action (e.g. a string where a
    /// number is required).
    #[error("value has the wrong shape for {action} on field '{field}'")]
    InvalidValue { field: Field, action: Action },
}
