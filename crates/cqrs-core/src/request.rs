// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Request/response contract shared by commands, queries and handlers.

use tokio_util::sync::CancellationToken;

use crate::error::{Canceled, HandlerError};

/// A command or query with a statically known response type.
///
/// Generated code implements this for every command and query:
///
/// | Request | Response |
/// |---------|----------|
/// | `CreateUserCommand` | identifier type |
/// | `UpdateUserCommand` | `()` |
/// | `RemoveUserCommand` | `()` |
/// | `GetUserByIdQuery` | `GetUserQueryResult` |
/// | `GetAllUsersQuery` | `Vec<GetUserQueryResult>` |
pub trait Request: Send + 'static {
    /// Value produced by a successful handler.
    type Response: Send + 'static;
}

/// Handles one request type.
///
/// Implementations must check `cancel` before doing any work.
#[async_trait::async_trait]
pub trait RequestHandler<R: Request>: Send + Sync {
    /// Execute the request.
    ///
    /// # Errors
    ///
    /// Every failure, including "nothing to act on", is reported as a
    /// [`HandlerError`].
    async fn handle(&self, request: R, cancel: &CancellationToken)
    -> Result<R::Response, HandlerError>;
}

/// Fail fast when the signal has already fired.
///
/// # Errors
///
/// Returns [`Canceled`] if `cancel` is cancelled.
pub fn ensure_active(cancel: &CancellationToken) -> Result<(), Canceled> {
    if cancel.is_cancelled() {
        return Err(Canceled);
    }
    Ok(())
}
