//! Localized pages.
//!
//! # Data Flow
//! ```text
//! /el/* or /en/* (after locale routing)
//!     → Extension<Locale> set by the nesting router
//!     → page.rs (path → Page)
//!     → Catalog::translator(locale)
//!     → render.rs (HTML shell)
//! ```
//!
//! # Design Decisions
//! - Unknown pages and slugs the catalog does not name render the
//!   localized 404 document
//! - The 404 for paths outside the locale routers guesses the locale from
//!   an `/en` prefix, the same literal test the resolver uses

pub mod page;
pub mod render;

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::Response,
    routing::get,
    Extension, Router,
};

use crate::http::response::html;
use crate::http::AppState;
use crate::i18n::Locale;

pub use page::Page;
pub use render::{escape, render_not_found, render_page};

/// Page routes below a locale prefix. The locale comes from an
/// `Extension<Locale>` layered on by the caller.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/{*page}", get(page))
}

async fn home(State(state): State<AppState>, Extension(locale): Extension<Locale>) -> Response {
    respond(&state, locale, Some(Page::Home))
}

async fn page(
    State(state): State<AppState>,
    Extension(locale): Extension<Locale>,
    Path(path): Path<String>,
) -> Response {
    respond(&state, locale, Page::from_path(&path))
}

/// Fallback for anything no route or static file matched.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    let locale = if uri.path().starts_with("/en") {
        Locale::En
    } else {
        Locale::DEFAULT
    };
    tracing::debug!(path = %uri.path(), locale = %locale, "No page or asset matched");
    let t = state.catalog.translator(locale);
    html(StatusCode::NOT_FOUND, render_not_found(&t, &state.config.site))
}

fn respond(state: &AppState, locale: Locale, page: Option<Page>) -> Response {
    let t = state.catalog.translator(locale);
    match page.filter(|page| page.exists(&t)) {
        Some(page) => html(StatusCode::OK, render_page(&page, &t, &state.config.site)),
        None => html(StatusCode::NOT_FOUND, render_not_found(&t, &state.config.site)),
    }
}
