//! Axum integration.

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::http::adapter::{WriteJson, APPLICATION_JSON};
use crate::response::error::{ResponseError, ResponseResult};

/// Adapter writing into an [`axum::response::Response`].
///
/// Headers already present on the response are kept.
///
/// ```ignore
/// async fn handler(State(app): State<AppState>, ctx: RequestContext) -> Result<Response, ResponseError> {
///     let mut response: Response = Response::default();
///     app.responder.success(&ctx, &mut response, json!({"id": 1}), "found")?;
///     Ok(response)
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AxumAdapter;

impl WriteJson for AxumAdapter {
    type Sink = Response;

    fn write_json<T: Serialize + ?Sized>(
        &self,
        sink: &mut Response,
        status: StatusCode,
        body: &T,
    ) -> ResponseResult {
        let bytes = serde_json::to_vec(body)?;

        sink.headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        *sink.status_mut() = status;
        *sink.body_mut() = Body::from(bytes);
        Ok(())
    }
}

/// Nothing formatted can be written once encoding failed, so the caller
/// gets a bare 500.
impl IntoResponse for ResponseError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Failed to write response envelope");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde::ser::Error as _;
    use serde::Serializer;
    use serde_json::{json, Value};

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("value cannot be encoded"))
        }
    }

    #[tokio::test]
    async fn test_write_json_replaces_status_and_body() {
        let mut response: Response = Response::default();
        response
            .headers_mut()
            .insert("x-request-id", HeaderValue::from_static("abc"));

        AxumAdapter
            .write_json(&mut response, StatusCode::CREATED, &json!({"id": 1}))
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::CONTENT_TYPE], APPLICATION_JSON);
        assert_eq!(response.headers()["x-request-id"], "abc");

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, json!({"id": 1}));
    }

    #[tokio::test]
    async fn test_encode_failure_leaves_response_untouched() {
        let mut response: Response = Response::default();

        let err = AxumAdapter
            .write_json(&mut response, StatusCode::CREATED, &Unencodable)
            .unwrap_err();

        assert!(matches!(err, ResponseError::Encode(_)), "got {err:?}");
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::CONTENT_TYPE).is_none());
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_response_error_maps_to_500() {
        let err = ResponseError::Io(std::io::Error::other("closed"));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
