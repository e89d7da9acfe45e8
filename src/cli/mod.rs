//! # CLI Module
//!
//! This module provides the command-line interface layer for etsyproxy. It
//! implements the user-facing commands and coordinates between the Etsy
//! client, the token manager and the local servers.
//!
//! ## Commands
//!
//! ### Authorization
//!
//! - [`auth`] - Runs the OAuth 2.0 PKCE authorization flow: generates the
//!   verifier/challenge pair, serves the local callback, exchanges the
//!   authorization code and prints/persists the resulting token pair.
//!
//! ### Proxy
//!
//! - [`serve`] - Runs the listings proxy server. Each `POST /listings`
//!   request fetches one page of a shop's active listings and rotates the
//!   token pair.
//!
//! ### One-shot queries
//!
//! - [`listings`] - Fetches a single listings page and prints it as a
//!   table, exercising the same client path as the proxy.
//!
//! ## Error Handling Philosophy
//!
//! Commands present failures through the colored console macros; fatal
//! conditions (missing tokens, unbindable ports) terminate via `error!`
//! with a hint on how to recover, typically "run etsyproxy auth".

mod auth;
mod listings;
mod serve;

pub use auth::auth;
pub use listings::listings;
pub use serve::serve;
