// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer - Adapters implementing the application ports.
//!
//! - [`demo`]: Fixed-data adapters used until a backend is wired in
//!   ([`DemoAuthenticator`](demo::DemoAuthenticator),
//!   [`DemoHistory`](demo::DemoHistory))

pub mod demo;
