//! Request correlation and boundary logging.

use crate::id;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{Instrument, info, info_span, warn};

/// Wraps every request in a span carrying a fresh correlation id and logs
/// receipt and completion at the boundary, keeping the handlers and the
/// engine free of transport concerns.
pub async fn trace_request(request: Request, next: Next) -> Response {
    let request_id = id::generate_request_id();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let span = info_span!("request", %request_id, %method, %uri);

    async move {
        info!("Received a {} request on the endpoint {}", method, uri);

        let response = next.run(request).await;
        let status = response.status();

        if status.is_client_error() || status.is_server_error() {
            warn!(%status, "Error response sent to the {} {} request", method, uri);
        } else {
            info!(%status, "Success response sent to the {} {} request", method, uri);
        }

        response
    }
    .instrument(span)
    .await
}
