use axum::{extract::Request, middleware::Next, response::Response};

/// Logs one line per handled request: method, path, and response status.
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    tracing::info!(%method, path, status = %response.status(), "handled request");
    response
}
