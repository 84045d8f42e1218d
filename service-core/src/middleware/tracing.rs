use axum::http::HeaderValue;
use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Propagate the caller's request id, or assign a fresh one, and echo it
/// on the response.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = incoming_request_id(&req).unwrap_or_else(|| Uuid::new_v4().to_string());

    match HeaderValue::from_str(&request_id) {
        Ok(header_value) => {
            req.headers_mut()
                .insert(REQUEST_ID_HEADER, header_value.clone());

            let mut response = next.run(req).await;
            response.headers_mut().insert(REQUEST_ID_HEADER, header_value);
            response
        }
        // Unrepresentable id, pass the request through untouched
        Err(_) => next.run(req).await,
    }
}

fn incoming_request_id(req: &Request) -> Option<String> {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string())
}
