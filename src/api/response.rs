//! The `{message, data}` envelope shared by every author endpoint.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

pub const SUCCESS_MESSAGE: &str = "Operação bem-sucedida";
pub const FAILURE_MESSAGE: &str = "Falha na operação";

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub message: &'static str,
    pub data: T,
}

/// Empty value sent as `data` on failure; matches the success shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `[]`
    List,
    /// `{}`
    Record,
}

pub fn success<T: Serialize>(data: T) -> Response {
    (
        StatusCode::OK,
        Json(Envelope {
            message: SUCCESS_MESSAGE,
            data,
        }),
    )
        .into_response()
}

pub fn failure(placeholder: Placeholder) -> Response {
    let data = match placeholder {
        Placeholder::List => json!([]),
        Placeholder::Record => json!({}),
    };
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(Envelope {
            message: FAILURE_MESSAGE,
            data,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn failure_placeholders_match_success_shapes() {
        let list = failure(Placeholder::List);
        assert_eq!(list.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(list).await,
            json!({ "message": "Falha na operação", "data": [] })
        );

        let record = failure(Placeholder::Record);
        assert_eq!(
            body_json(record).await,
            json!({ "message": "Falha na operação", "data": {} })
        );
    }

    #[tokio::test]
    async fn absent_data_serializes_as_null() {
        let response = success(Option::<u8>::None);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Operação bem-sucedida", "data": null })
        );
    }
}
