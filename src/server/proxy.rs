use axum::body::Body;
use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Forwards `/api/*` calls to the backend that owns the catalog and calendars.
#[derive(Clone, Debug)]
pub struct ApiProxy {
    client: reqwest::Client,
    origin: String,
}

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("backend unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!("{self}");
        (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
    }
}

impl ApiProxy {
    pub fn new(origin: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            origin,
        }
    }

    /// Backend URL for an incoming request, query string included.
    pub fn target_url(&self, uri: &Uri) -> String {
        let path_and_query = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| uri.path());
        format!("{}{}", self.origin, path_and_query)
    }
}

pub async fn forward(State(proxy): State<ApiProxy>, uri: Uri) -> Result<Response, ProxyError> {
    let target = proxy.target_url(&uri);
    tracing::debug!(%target, "forwarding api request");

    let upstream = proxy.client.get(&target).send().await?;
    let status = upstream.status();
    if !status.is_success() {
        tracing::warn!(%target, %status, "backend returned an error");
    }

    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let disposition = upstream.headers().get(CONTENT_DISPOSITION).cloned();

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    if let Some(value) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, value);
    }
    if let Some(value) = disposition {
        response.headers_mut().insert(CONTENT_DISPOSITION, value);
    }

    Ok(response)
}
