// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! allot-engine: allocation notification dispatch

mod context;
mod dispatcher;
mod error;

pub use context::RenderContext;
pub use dispatcher::Dispatcher;
pub use error::{Channel, DispatchError, SendFailure};
