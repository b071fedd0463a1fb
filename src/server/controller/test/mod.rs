use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
};
use std::sync::Arc;
use tower::ServiceExt;

use crate::server::{
    config::Config,
    router::router,
    service::shutdown::ShutdownSequencer,
    state::AppState,
    testing::{test_config, FakeGateway, RecordingLog},
};

mod message;

struct TestApp {
    state: AppState,
    gateway: Arc<FakeGateway>,
    log: Arc<RecordingLog>,
    sequencer: ShutdownSequencer,
}

impl TestApp {
    fn new(gateway: FakeGateway) -> Self {
        Self::with_config(test_config(), gateway)
    }

    fn with_config(config: Config, gateway: FakeGateway) -> Self {
        let gateway = Arc::new(gateway);
        let log = Arc::new(RecordingLog::new());
        let sequencer = ShutdownSequencer::new();
        let state = AppState::new(
            Arc::new(config),
            gateway.clone(),
            log.clone(),
            sequencer.clone(),
        );

        Self {
            state,
            gateway,
            log,
            sequencer,
        }
    }

    async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn post(&self, uri: &str, body: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        router()
            .with_state(self.state.clone())
            .oneshot(request)
            .await
            .unwrap()
    }
}

async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = TestApp::new(FakeGateway::new());

    let response = app.get("/status").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
