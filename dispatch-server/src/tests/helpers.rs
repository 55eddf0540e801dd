//! Request builders and layer helpers shared by the server tests.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use ortho_config::MergeComposer;
use serde_json::{Map, Value};
use tower::ServiceExt;

use crate::serve::ServeArgs;

pub(super) fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub(super) fn post_raw(uri: &str, body: &'static str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("valid request")
}

pub(super) fn post_empty(uri: &str) -> Request<Body> {
    Request::post(uri).body(Body::empty()).expect("valid request")
}

pub(super) fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("valid request")
}

/// Send `request` through a clone of `app` and decode the JSON reply.
pub(super) async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to collect body")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).expect("response body is JSON");
    (status, body)
}

/// Overrides applied as a configuration file or environment layer.
#[derive(Debug, Clone, Default)]
pub(super) struct LayerOverrides {
    pub(super) host: Option<String>,
    pub(super) port: Option<u16>,
}

impl LayerOverrides {
    fn to_value(&self) -> Value {
        let mut map = Map::new();
        if let Some(host) = &self.host {
            map.insert("host".to_owned(), Value::from(host.as_str()));
        }
        if let Some(port) = self.port {
            map.insert("port".to_owned(), Value::from(port));
        }
        Value::Object(map)
    }
}

/// Compose file, environment and CLI layers in precedence order.
pub(super) fn compose_layers(
    cli_args: &ServeArgs,
    file_layer: Option<&LayerOverrides>,
    env_layer: Option<&LayerOverrides>,
) -> MergeComposer {
    let mut composer = MergeComposer::new();
    if let Some(layer) = file_layer {
        composer.push_file(layer.to_value(), None);
    }
    if let Some(layer) = env_layer {
        composer.push_environment(layer.to_value());
    }
    let cli_layer = LayerOverrides {
        host: cli_args.host.clone(),
        port: cli_args.port,
    };
    composer.push_cli(cli_layer.to_value());
    composer
}
