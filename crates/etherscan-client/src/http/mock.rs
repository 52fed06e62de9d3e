use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::EtherscanError;

use super::{HttpRequest, HttpResponse, Transport};

type Handler = Box<dyn Fn(&HttpRequest) -> MockReply + Send + Sync>;

/// What the mock answers with for a matched request.
#[derive(Debug, Clone)]
pub enum MockReply {
    Response { status: u16, body: String },
    TransportFailure(String),
}

impl MockReply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self::Response {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Response {
            status,
            body: body.into(),
        }
    }
}

/// A mock transport for testing. Returns canned replies keyed by
/// `(module, action)`, or computed by a handler, and records every request.
pub struct MockTransport {
    replies: HashMap<(String, String), MockReply>,
    handler: Option<Handler>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder {
            replies: HashMap::new(),
            handler: None,
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("mock request log poisoned").len()
    }
}

pub struct MockTransportBuilder {
    replies: HashMap<(String, String), MockReply>,
    handler: Option<Handler>,
}

impl MockTransportBuilder {
    pub fn with_reply(mut self, module: &str, action: &str, reply: MockReply) -> Self {
        self.replies
            .insert((module.to_owned(), action.to_owned()), reply);
        self
    }

    /// Fallback for requests with no canned `(module, action)` reply.
    pub fn with_handler(
        mut self,
        handler: impl Fn(&HttpRequest) -> MockReply + Send + Sync + 'static,
    ) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            replies: self.replies,
            handler: self.handler,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, EtherscanError> {
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .push(request.clone());

        // Give other tasks a chance to run so concurrent callers interleave.
        tokio::task::yield_now().await;

        let key = (
            request.param("module").unwrap_or_default().to_owned(),
            request.param("action").unwrap_or_default().to_owned(),
        );
        let reply = match (self.replies.get(&key), &self.handler) {
            (Some(reply), _) => reply.clone(),
            (None, Some(handler)) => handler(&request),
            (None, None) => MockReply::status(404, format!("no mock reply for {key:?}")),
        };

        match reply {
            MockReply::Response { status, body } => Ok(HttpResponse { status, body }),
            MockReply::TransportFailure(message) => Err(EtherscanError::transport(message)),
        }
    }
}
