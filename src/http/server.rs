//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wrap the site in the locale routing middleware
//! - Wire up middleware (request ID, tracing, timeout, body limit, headers)
//! - Bind the server to a plain or TLS listener
//! - Stop accepting on shutdown and drain in-flight requests
//!
//! # Design Decisions
//! - Locale routing runs before route matching, so the page router is
//!   wrapped by `LocaleLayer` and mounted as the outer router's fallback
//! - Page routes are nested under explicit `/el` and `/en` prefixes;
//!   anything else falls through to the static file service

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    handler::Handler,
    middleware::{from_fn, from_fn_with_state},
    routing::post,
    Extension, Router,
};
use axum_server::tls_rustls::RustlsConfig;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::Layer;
use tower_http::{
    limit::RequestBodyLimitLayer, services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer,
};

use crate::config::SiteConfig;
use crate::contact::handler::{method_not_allowed, submit};
use crate::http::middleware::LocaleLayer;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::i18n::{Catalog, Locale};
use crate::observability::metrics::track_requests;
use crate::observability::tracing::make_request_span;
use crate::pages;
use crate::routing::LocaleResolver;
use crate::security::{rate_limit_middleware, with_security_headers, RateLimiterState};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub catalog: Arc<Catalog>,
    pub resolver: Arc<LocaleResolver>,
    pub contact_limiter: Arc<RateLimiterState>,
}

impl AppState {
    pub fn new(config: SiteConfig, catalog: Catalog) -> Self {
        let resolver = LocaleResolver::new(config.routing.bypass_prefixes.iter().cloned());
        let contact_limiter = RateLimiterState::new(&config.contact);
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            resolver: Arc::new(resolver),
            contact_limiter: Arc::new(contact_limiter),
        }
    }
}

/// Build the complete application: locale routing, site routes and layers.
#[allow(deprecated)]
pub fn build_app(state: AppState) -> Router {
    let config = state.config.clone();
    let localized = LocaleLayer::new(state.resolver.clone()).layer(site_router(state));

    let router = Router::new()
        .fallback_service(localized)
        .layer(from_fn(track_requests))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.timeouts.request_secs,
        )))
        .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(propagate_request_id_layer())
        .layer(set_request_id_layer());

    if config.security.enable_headers {
        with_security_headers(router)
    } else {
        router
    }
}

/// Routes seen after the locale decision has been applied.
fn site_router(state: AppState) -> Router {
    let contact = post(submit)
        .layer(from_fn_with_state(
            state.contact_limiter.clone(),
            rate_limit_middleware,
        ))
        .get(method_not_allowed);

    let assets = ServeDir::new(&state.config.site.public_dir)
        .not_found_service(pages::not_found.with_state(state.clone()));

    Router::new()
        .route("/api/contact", contact)
        .nest("/el", pages::router().layer(Extension(Locale::El)))
        .nest("/en", pages::router().layer(Extension(Locale::En)))
        .fallback_service(assets)
        .with_state(state)
}

/// HTTP server for the site.
pub struct SiteServer {
    router: Router,
    config: Arc<SiteConfig>,
}

impl SiteServer {
    pub fn new(state: AppState) -> Self {
        let config = state.config.clone();
        Self {
            router: build_app(state),
            config,
        }
    }

    /// Serve plain HTTP on `listener` until `shutdown` fires, then drain.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Serve HTTPS on `addr` until `shutdown` fires.
    ///
    /// In-flight requests get `timeouts.shutdown_grace_secs` to finish.
    pub async fn run_tls(
        self,
        addr: SocketAddr,
        tls: RustlsConfig,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        tracing::info!(address = %addr, "HTTPS server starting");

        let handle = axum_server::Handle::new();
        let grace = Duration::from_secs(self.config.timeouts.shutdown_grace_secs);
        let shutdown_handle = handle.clone();
        tokio::spawn(async move {
            let _ = shutdown.recv().await;
            tracing::info!(grace_secs = grace.as_secs(), "HTTPS server draining connections");
            shutdown_handle.graceful_shutdown(Some(grace));
        });

        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(
                self.router
                    .into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }
}
