//! # Etsy Integration Module
//!
//! This module provides the interface to the Etsy API v3, implementing the
//! OAuth 2.0 PKCE authorization flow, token refresh, shop resolution and
//! listing retrieval. It is the integration layer between the CLI/proxy
//! surface and Etsy's services, handling HTTP communication, JSON decoding
//! and error propagation.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, proxy handlers)
//!          ↓
//! Etsy Integration Layer
//!     ├── Authorization (OAuth 2.0 PKCE, token refresh)
//!     ├── Shop Operations (name lookup, active listings)
//!     └── Listing Operations (batch detail, page assembly)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Etsy API v3
//! ```
//!
//! ## Authorization
//!
//! [`auth`] implements the authorization-code-with-PKCE flow:
//! 1. **Code Verifier Generation**: random verifier of the requested length
//! 2. **Challenge Creation**: S256 challenge derived from the verifier
//! 3. **Authorization Request**: user grants access on the Etsy connect page
//! 4. **Local Callback**: authorization code received by a short-lived
//!    HTTP server
//! 5. **Token Exchange**: code + verifier exchanged for a token pair
//! 6. **Token Persistence**: pair stored for future invocations
//!
//! Refresh grants (`grant_type=refresh_token`) live here too; the proxy
//! performs one per invocation.
//!
//! ## API Coverage
//!
//! - `GET /shops?shop_name=` - shop name to shop id resolution
//! - `GET /shops/{id}/listings/active` - one page of active listings
//! - `GET /listings/batch?includes=Images` - batch listing detail
//! - `POST /oauth/token` - code exchange and refresh grants
//!
//! ## Authentication Headers
//!
//! Every application endpoint call carries the bearer access token plus the
//! `x-api-key` header holding the client id, as Etsy v3 requires.
//!
//! ## Error Types
//!
//! Functions return `Result` with either `reqwest::Error` (pure HTTP paths)
//! or `String` (paths that mix HTTP, decoding and domain failures such as
//! "shop not found"). Upstream non-2xx statuses are surfaced via
//! `error_for_status`; there is deliberately no retry, backoff or timeout
//! layer (each proxy invocation is a single pass over the upstream API).

pub mod auth;
pub mod listings;
pub mod shops;
