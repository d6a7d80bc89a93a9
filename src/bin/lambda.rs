//! AWS Lambda HTTP handler
//!
//! POST a scenario as JSON (any subset of `RawScenarioInputs` fields) and get
//! the full projection back as JSON.

use ai_job_impact::projection::ProjectionEngine;
use ai_job_impact::scenario::RawScenarioInputs;
use lambda_http::http::{Method, StatusCode};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use log::{info, warn};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    info!("Starting projection lambda");
    run(service_fn(handler)).await
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    if *event.method() != Method::POST {
        return respond(StatusCode::METHOD_NOT_ALLOWED, &json!({ "error": "use POST" }));
    }

    let body: &[u8] = event.body();
    let raw: RawScenarioInputs = if body.is_empty() {
        RawScenarioInputs::default()
    } else {
        match serde_json::from_slice(body) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Rejected request body: {}", e);
                return respond(StatusCode::BAD_REQUEST, &json!({ "error": e.to_string() }));
            }
        }
    };

    let inputs = match raw.normalize() {
        Ok(inputs) => inputs,
        Err(e) => return respond(StatusCode::BAD_REQUEST, &json!({ "error": e.to_string() })),
    };

    match ProjectionEngine::default().project(&inputs) {
        Ok(result) => respond(StatusCode::OK, &result),
        Err(e) => respond(StatusCode::UNPROCESSABLE_ENTITY, &json!({ "error": e.to_string() })),
    }
}

fn respond<T: serde::Serialize>(status: StatusCode, payload: &T) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(payload)?;
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: Method, body: &str) -> Request {
        let mut req = Request::new(Body::from(body.to_string()));
        *req.method_mut() = method;
        req
    }

    fn json_body(resp: &Response<Body>) -> serde_json::Value {
        serde_json::from_slice(resp.body()).expect("json body")
    }

    #[tokio::test]
    async fn test_projection_response() {
        let resp = handler(request(Method::POST, r#"{"high_rate_change": 0.1}"#))
            .await
            .expect("handled");
        assert_eq!(resp.status(), StatusCode::OK);

        let value = json_body(&resp);
        assert_eq!(value["records"].as_array().map(Vec::len), Some(9));
        assert_eq!(value["inputs"]["high_rate_change"], 0.1);
        assert_eq!(value["records"][0]["year"], 2025);
    }

    #[tokio::test]
    async fn test_empty_body_uses_defaults() {
        let resp = handler(request(Method::POST, "")).await.expect("handled");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(&resp)["inputs"]["high_rate_change"], 0.3);
    }

    #[tokio::test]
    async fn test_error_statuses() {
        let resp = handler(request(Method::GET, "")).await.expect("handled");
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

        let resp = handler(request(Method::POST, "{not json")).await.expect("handled");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = handler(request(Method::POST, r#"{"labor_force_growth": -200}"#))
            .await
            .expect("handled");
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json_body(&resp)["error"]
            .as_str()
            .unwrap_or_default()
            .contains("non-positive labor force"));
    }
}
