//! Locale routing middleware.
//!
//! Applies the `LocaleResolver` decision to each request before it reaches
//! the page router. It must wrap the router rather than be added with
//! `Router::layer`, since a rewrite has to happen before route matching.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::uri::PathAndQuery;
use axum::http::{Request, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use tower::{Layer, Service};

use crate::observability::metrics;
use crate::routing::{Action, LocaleResolver};

/// Layer producing [`LocaleService`].
#[derive(Debug, Clone)]
pub struct LocaleLayer {
    resolver: Arc<LocaleResolver>,
}

impl LocaleLayer {
    pub fn new(resolver: Arc<LocaleResolver>) -> Self {
        Self { resolver }
    }
}

impl<S> Layer<S> for LocaleLayer {
    type Service = LocaleService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LocaleService {
            inner,
            resolver: self.resolver.clone(),
        }
    }
}

/// Bypasses, redirects or rewrites requests according to their path.
#[derive(Debug, Clone)]
pub struct LocaleService<S> {
    inner: S,
    resolver: Arc<LocaleResolver>,
}

impl<S> Service<Request<Body>> for LocaleService<S>
where
    S: Service<Request<Body>, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<Body>) -> Self::Future {
        let action = self.resolver.resolve(request.uri().path());
        metrics::record_locale_action(action.kind());

        match action {
            Action::Bypass => Box::pin(self.inner.call(request)),
            Action::Redirect(location) => {
                tracing::debug!(from = %request.uri().path(), to = %location, "Redirecting to unprefixed path");
                Box::pin(async move { Ok(Redirect::temporary(&location).into_response()) })
            }
            Action::Rewrite(path) => {
                if path != request.uri().path() {
                    tracing::debug!(from = %request.uri().path(), to = %path, "Rewriting to locale path");
                    match with_path(request.uri(), &path) {
                        Some(uri) => *request.uri_mut() = uri,
                        None => tracing::warn!(path = %path, "Rewritten path is not a valid URI"),
                    }
                }
                Box::pin(self.inner.call(request))
            }
        }
    }
}

/// `uri` with its path replaced, keeping the query string.
fn with_path(uri: &Uri, path: &str) -> Option<Uri> {
    let path_and_query = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };
    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query).ok()?);
    Uri::from_parts(parts).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    /// Echoes the path and query the inner router saw.
    fn echo_app() -> LocaleService<Router> {
        let router = Router::new().fallback(|uri: Uri| async move { uri.to_string() });
        LocaleLayer::new(Arc::new(LocaleResolver::default())).layer(router)
    }

    async fn call(path: &str) -> Response {
        echo_app()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_rewrite_keeps_query() {
        let response = call("/fleet?boat=lobster23").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "/el/fleet?boat=lobster23");
    }

    #[tokio::test]
    async fn test_root_rewrites_to_default_prefix() {
        assert_eq!(body_text(call("/").await).await, "/el");
    }

    #[tokio::test]
    async fn test_secondary_passes_through() {
        assert_eq!(body_text(call("/en/services").await).await, "/en/services");
    }

    #[tokio::test]
    async fn test_bypass_is_untouched() {
        assert_eq!(body_text(call("/images/boat.jpg").await).await, "/images/boat.jpg");
    }

    #[tokio::test]
    async fn test_default_prefix_redirects() {
        let response = call("/el/fleet?x=1").await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/fleet");

        let response = call("/el").await;
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[test]
    fn test_with_path() {
        let uri: Uri = "http://example.gr/fleet?a=1&b=2".parse().unwrap();
        assert_eq!(
            with_path(&uri, "/el/fleet").unwrap().to_string(),
            "http://example.gr/el/fleet?a=1&b=2"
        );
        let uri: Uri = "/".parse().unwrap();
        assert_eq!(with_path(&uri, "/el").unwrap().to_string(), "/el");
    }
}
