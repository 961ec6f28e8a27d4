// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the stores and their adapters.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Stores and views depend on the ports, never on a concrete adapter
//!
//! # Example
//!
//! ```
//! use doc_extract::application::port::Authenticator;
//! use doc_extract::infrastructure::demo::DemoAuthenticator;
//! use doc_extract::session::SessionStore;
//!
//! let authenticator: Box<dyn Authenticator> = Box::new(DemoAuthenticator);
//! let mut session = SessionStore::new(authenticator);
//! assert!(session.login().is_ok());
//! ```

pub mod port;
