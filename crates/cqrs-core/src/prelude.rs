// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cqrs_core::prelude::*;
//! ```

pub use crate::{
    CancellationToken, EntityStore, HandlerError, Identified, MemoryStore, NotFound, Request,
    RequestHandler, async_trait, ensure_active
};
