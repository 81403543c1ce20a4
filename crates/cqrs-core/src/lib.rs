// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime contracts for code generated by `cqrs-derive`.
//!
//! Generated commands and queries implement [`Request`]; generated handlers
//! implement [`RequestHandler`] on top of an [`EntityStore`]. Nothing in this
//! crate dispatches requests: routing a request to its handler belongs to the
//! application.
//!
//! # Overview
//!
//! | Item | Used by |
//! |------|---------|
//! | [`Request`] | every generated command and query |
//! | [`RequestHandler`] | every generated handler |
//! | [`EntityStore`] | storage behind generated handlers |
//! | [`HandlerError`] | the single error type returned by handlers |
//! | [`NotFound`], [`Canceled`] | causes wrapped into [`HandlerError`] |
//! | [`MemoryStore`] | in-process [`EntityStore`] for tests and prototypes |
//!
//! # Example
//!
//! ```rust
//! use cqrs_core::{CancellationToken, HandlerError, Request, RequestHandler, async_trait};
//!
//! struct Ping;
//!
//! impl Request for Ping {
//!     type Response = &'static str;
//! }
//!
//! struct PingHandler;
//!
//! #[async_trait]
//! impl RequestHandler<Ping> for PingHandler {
//!     async fn handle(
//!         &self,
//!         _request: Ping,
//!         cancel: &CancellationToken
//!     ) -> Result<&'static str, HandlerError> {
//!         cqrs_core::ensure_active(cancel).map_err(|e| HandlerError::wrap("PingHandler", e))?;
//!         Ok("pong")
//!     }
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod memory;
pub mod prelude;
mod request;
mod store;

/// Re-export async_trait for generated code.
pub use async_trait::async_trait;
pub use error::{Canceled, HandlerError, NotFound};
pub use memory::MemoryStore;
pub use request::{Request, RequestHandler, ensure_active};
pub use store::{EntityStore, Identified};
/// Re-export of the cancellation signal accepted by every handler.
pub use tokio_util::sync::CancellationToken;
