//! JSON HTTP API for the activity signup directory.
//!
//! Exposes an axum [`Router`] backed by any [`signup_core::store::ActivityStore`].
//! Static assets, tracing layers and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = signup_api::api_router(Arc::new(store))
//!   .nest_service("/static", ServeDir::new("static"));
//! ```

pub mod activities;
pub mod error;

use std::sync::Arc;

use axum::{
  Router,
  response::Redirect,
  routing::{delete, get, post},
};
use signup_core::store::ActivityStore;

pub use error::ApiError;

/// Where `GET /` sends the browser.
pub const LANDING_PAGE: &str = "/static/index.html";

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be merged into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ActivityStore + 'static,
{
  Router::new()
    .route("/", get(root))
    .route("/activities", get(activities::list::<S>))
    .route("/activities/{name}/signup", post(activities::signup::<S>))
    .route("/activities/{name}/unregister", delete(activities::unregister::<S>))
    .with_state(store)
}

/// `GET /` — 307 to the landing page, preserving the method.
async fn root() -> Redirect { Redirect::temporary(LANDING_PAGE) }

// ─── Integration tests ────────────────────────────────────────────────────────
