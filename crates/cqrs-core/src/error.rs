// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Errors surfaced by generated handlers.
//!
//! Handlers report every failure through [`HandlerError`]. The original cause
//! ([`NotFound`], [`Canceled`], or a store error) stays reachable through
//! [`std::error::Error::source`], but callers cannot tell the kinds apart
//! from the type alone.

use std::{error::Error, fmt};

/// Boxed error cause carried by [`HandlerError`].
type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// The single error type returned by generated handlers.
///
/// Displayed as `Error {operation}: {cause}`, where `operation` is the
/// handler name (e.g. `UpdateUserCommandHandler`).
#[derive(Debug)]
pub struct HandlerError {
    operation: String,
    cause:     BoxError
}

impl HandlerError {
    /// Wrap `cause` as a failure of `operation`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cqrs_core::{HandlerError, NotFound};
    ///
    /// let err = HandlerError::wrap("GetUserByIdQueryHandler", NotFound::new("User"));
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Error GetUserByIdQueryHandler: No Data with the Id you requested"
    /// );
    /// ```
    pub fn wrap<E>(operation: impl Into<String>, cause: E) -> Self
    where
        E: Into<BoxError>
    {
        Self {
            operation: operation.into(),
            cause:     cause.into()
        }
    }

    /// Name of the failed operation.
    pub fn operation(&self) -> &str {
        &self.operation
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error {}: {}", self.operation, self.cause)
    }
}

impl Error for HandlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause.as_ref())
    }
}

/// No record matches the requested identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound {
    entity: &'static str
}

impl NotFound {
    /// Not-found cause for `entity`.
    pub const fn new(entity: &'static str) -> Self {
        Self {
            entity
        }
    }

    /// Name of the entity that was looked up.
    pub const fn entity(&self) -> &'static str {
        self.entity
    }
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("No Data with the Id you requested")
    }
}

impl Error for NotFound {}

/// The cancellation signal fired before the handler started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canceled;

impl fmt::Display for Canceled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("operation was canceled")
    }
}

impl Error for Canceled {}
