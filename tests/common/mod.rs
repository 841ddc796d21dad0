// Shared fakes and request helpers for router tests
// Author: kelexine (https://github.com/kelexine)

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use bytes::Bytes;
use provider_gate::completion::CompletionProvider;
use provider_gate::config::AppConfig;
use provider_gate::error::{GatewayError, Result};
use provider_gate::models::openai::{ChatCompletionResponse, ChatMessage, Choice, Role};
use provider_gate::server::{create_router, AppState};
use provider_gate::storage::ObjectStorage;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Completion provider returning canned replies.
pub struct FakeCompletion {
    replies: Vec<String>,
    failure: Option<String>,
    pub prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl FakeCompletion {
    pub fn replying(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|r| r.to_string()).collect(),
            failure: None,
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::replying(&[])
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionProvider for FakeCompletion {
    async fn complete(&self, prompt: &str) -> Result<ChatCompletionResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(message) = &self.failure {
            return Err(GatewayError::Upstream(message.clone()));
        }

        Ok(ChatCompletionResponse {
            id: "chatcmpl-test".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            choices: self
                .replies
                .iter()
                .enumerate()
                .map(|(index, reply)| Choice {
                    index: index as u32,
                    message: ChatMessage {
                        role: Role::Assistant,
                        content: Some(reply.clone()),
                    },
                    finish_reason: Some("stop".to_string()),
                })
                .collect(),
        })
    }
}

/// Which storage operation should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Nowhere,
    BucketCheck,
    BucketCreate,
    Put,
}

/// In-memory object store.
pub struct FakeStorage {
    fail_at: FailAt,
    pub buckets: Mutex<HashSet<String>>,
    pub objects: Mutex<HashMap<(String, String), (Bytes, String)>>,
    pub create_calls: AtomicUsize,
}

impl FakeStorage {
    pub fn new() -> Self {
        Self::failing_at(FailAt::Nowhere)
    }

    pub fn failing_at(fail_at: FailAt) -> Self {
        Self {
            fail_at,
            buckets: Mutex::new(HashSet::new()),
            objects: Mutex::new(HashMap::new()),
            create_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_bucket(self, bucket: &str) -> Self {
        self.buckets.lock().unwrap().insert(bucket.to_string());
        self
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn object(&self, bucket: &str, key: &str) -> Option<(Bytes, String)> {
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }
}

#[async_trait]
impl ObjectStorage for FakeStorage {
    async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        if self.fail_at == FailAt::BucketCheck {
            return Err(GatewayError::Upstream("connection refused".to_string()));
        }
        Ok(self.buckets.lock().unwrap().contains(bucket))
    }

    async fn make_bucket(&self, bucket: &str) -> Result<()> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_at == FailAt::BucketCreate {
            return Err(GatewayError::Upstream("access denied".to_string()));
        }
        self.buckets.lock().unwrap().insert(bucket.to_string());
        Ok(())
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<()> {
        if self.fail_at == FailAt::Put {
            return Err(GatewayError::Upstream("quota exceeded".to_string()));
        }
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            (body, content_type.to_string()),
        );
        Ok(())
    }
}

pub fn router(
    completion: Option<Arc<dyn CompletionProvider>>,
    storage: Option<Arc<dyn ObjectStorage>>,
) -> Router {
    create_router(AppState::new(AppConfig::default(), completion, storage))
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
