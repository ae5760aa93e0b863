// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! allot-adapters: collaborator seams between the dispatcher and the host platform

pub mod link;
pub mod notify;
pub mod store;
pub mod subprocess;

pub use link::{BaseUrlLinkBuilder, LinkBuilder};
pub use notify::{
    CommandEmailAdapter, CommandMessageAdapter, EmailAdapter, MessageAdapter, NoOpEmailAdapter,
    NoOpMessageAdapter, TransportError,
};
pub use store::{ActivityData, ActivityStore, InMemoryActivityStore, StoreError};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use notify::{FakeEmailAdapter, FakeMessageAdapter, SentEmail, SentMessage};
