//! # API Module
//!
//! This module provides the HTTP endpoints served by the two local servers:
//! the OAuth callback listener used during authorization and the listings
//! proxy exposed to storefront consumers.
//!
//! ## Endpoints
//!
//! ### Authorization
//!
//! - [`callback`] - Handles OAuth callback requests from Etsy's authorize
//!   page. Completes the PKCE flow by exchanging the authorization code for
//!   a token pair and storing it in the shared session.
//!
//! ### Proxy
//!
//! - [`listings`] - Serves one page of a shop's active listings as compact
//!   records, refreshing the stored token pair on every invocation.
//!
//! ### Monitoring
//!
//! - [`health`] - Health check endpoint returning status and version.
//!
//! ## Architecture
//!
//! Built on [Axum](https://docs.rs/axum); shared state (the PKCE session
//! for the callback, the token manager for the proxy) is injected through
//! `Extension` layers.

mod callback;
mod health;
mod listings;

pub use callback::callback;
pub use health::health;
pub use listings::listings;
