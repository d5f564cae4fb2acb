//! Common test helpers for integration tests.
//!
//! Builds the full router over an in-memory repository and sends requests
//! through it with `tower::ServiceExt::oneshot`.
//!
//! # Note
//!
//! Each integration test file compiles this module separately, so helpers
//! used by only one file would otherwise warn as dead code.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use futures::future::BoxFuture;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use todo_api::api::{AppState, create_router};
use todo_api::domain::{NewTodo, Todo, TodoChanges, TodoId};
use todo_api::infrastructure::{InMemoryTodoRepository, RepositoryError, TodoRepository};

// =============================================================================
// Router Helpers
// =============================================================================

/// Creates the application router over an empty in-memory repository.
pub fn test_router() -> Router {
    create_router(AppState::new(Arc::new(InMemoryTodoRepository::new())))
}

/// Response status and body, decoded as JSON when the body is not empty.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl TestResponse {
    /// Returns the JSON body, panicking if there is none.
    pub fn json(&self) -> &Value {
        self.body.as_ref().expect("response has no body")
    }
}

/// Sends one request through a clone of `router`.
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    send_request(router, builder.body(body).unwrap()).await
}

/// Sends a raw body without a `Content-Type` header.
pub async fn send_raw(router: &Router, method: Method, uri: &str, body: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();

    send_request(router, request).await
}

async fn send_request(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let body = if bytes.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(&bytes).unwrap())
    };

    TestResponse { status, body }
}

/// Creates a todo through the API and returns the response body.
pub async fn create_todo(router: &Router, body: Value) -> Value {
    let response = send(router, Method::POST, "/todos", Some(body)).await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.json().clone()
}

// =============================================================================
// Counting Repository
// =============================================================================

/// Wraps an in-memory repository and counts every call made to it.
#[derive(Default)]
pub struct CountingRepository {
    inner: InMemoryTodoRepository,
    calls: AtomicUsize,
}

impl CountingRepository {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl TodoRepository for CountingRepository {
    fn create(&self, todo: NewTodo) -> BoxFuture<'_, Result<Todo, RepositoryError>> {
        self.record();
        self.inner.create(todo)
    }

    fn list_all(&self) -> BoxFuture<'_, Result<Vec<Todo>, RepositoryError>> {
        self.record();
        self.inner.list_all()
    }

    fn find_by_id(&self, id: TodoId) -> BoxFuture<'_, Result<Todo, RepositoryError>> {
        self.record();
        self.inner.find_by_id(id)
    }

    fn update(
        &self,
        id: TodoId,
        changes: TodoChanges,
    ) -> BoxFuture<'_, Result<Todo, RepositoryError>> {
        self.record();
        self.inner.update(id, changes)
    }

    fn delete(&self, id: TodoId) -> BoxFuture<'_, Result<(), RepositoryError>> {
        self.record();
        self.inner.delete(id)
    }

    fn ping(&self) -> BoxFuture<'_, Result<(), RepositoryError>> {
        self.record();
        self.inner.ping()
    }

    fn close(&self) -> BoxFuture<'_, ()> {
        self.inner.close()
    }
}

/// Creates a router over a [`CountingRepository`] and returns both.
pub fn counting_router() -> (Router, Arc<CountingRepository>) {
    let repository = Arc::new(CountingRepository::default());
    let router = create_router(AppState::new(repository.clone()));
    (router, repository)
}
