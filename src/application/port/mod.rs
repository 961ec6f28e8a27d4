// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits use only domain types, so the session store and the views
//! stay independent of how profiles and history are obtained.
//!
//! # Available Ports
//!
//! - [`auth`]: Session creation ([`Authenticator`])
//! - [`history`]: Processed document records ([`HistorySource`])
//!
//! # Design Notes
//!
//! - No `async fn`; a networked adapter would run behind an Iced `Task`
//!   and hand its result back through a message.

pub mod auth;
pub mod history;

pub use auth::{AuthError, Authenticator};
pub use history::HistorySource;
