use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::server::{
    cache::{keys, CacheStore, MemoryCache},
    error::AppError,
    router::router,
    storage::FileStore,
    subscription::SubscriptionReply,
    testing::{bearer, test_state, RecordingNotifier, RecordingOracle},
};
use test_utils::{builder::TestBuilder, factory};


const BOUNDARY: &str = "bondflix-test-boundary";

/// Router over a test database with recording collaborators.
struct TestApp {
    router: Router,
    cache: Arc<MemoryCache>,
    oracle: Arc<RecordingOracle>,
    notifier: Arc<RecordingNotifier>,
    _uploads: tempfile::TempDir,
}

impl TestApp {
    fn new(db: &sea_orm::DatabaseConnection, oracle: RecordingOracle) -> Self {
        Self::with_notifier(db, oracle, RecordingNotifier::default())
    }

    fn with_notifier(
        db: &sea_orm::DatabaseConnection,
        oracle: RecordingOracle,
        notifier: RecordingNotifier,
    ) -> Self {
        let uploads = tempfile::tempdir().unwrap();
        let cache = Arc::new(MemoryCache::new());
        let oracle = Arc::new(oracle);
        let notifier = Arc::new(notifier);

        let state = test_state(
            db,
            cache.clone(),
            oracle.clone(),
            notifier.clone(),
            FileStore::new(uploads.path()),
        );

        let router = router()
            .with_state(state)
            .layer(SessionManagerLayer::new(MemoryStore::default()));

        Self {
            router,
            cache,
            oracle,
            notifier,
            _uploads: uploads,
        }
    }

    /// Sends `request` and returns the status, response headers and JSON body.
    async fn send(&self, request: Request<Body>) -> (StatusCode, header::HeaderMap, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, headers, body)
    }
}

fn get(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).unwrap()
}

fn json(method: &str, uri: &str, auth: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// `multipart/form-data` request carrying only text fields.
fn multipart(method: &str, uri: &str, auth: Option<&str>, fields: &[(&str, &str)]) -> Request<Body> {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
            BOUNDARY, name, value
        ));
    }
    body.push_str(&format!("--{}--\r\n", BOUNDARY));

    let mut builder = Request::builder().method(method).uri(uri).header(
        header::CONTENT_TYPE,
        format!("multipart/form-data; boundary={}", BOUNDARY),
    );
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::from(body)).unwrap()
}
