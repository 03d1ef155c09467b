//! Test doubles shared by unit tests

use crate::contact::{ContactPayload, ContactTransport, TransportResponse};
use crate::errors::TransportError;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Transport that replays queued outcomes in order and records what it was sent.
/// Clones share the script and the record. An exhausted script answers 201.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<VecDeque<Result<TransportResponse, TransportError>>>>,
    sent: Arc<Mutex<Vec<ContactPayload>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(TransportResponse::new(status, body)));
        self
    }

    pub fn fail(self, error: TransportError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn payloads(&self) -> Vec<ContactPayload> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactTransport for ScriptedTransport {
    async fn send(&self, payload: &ContactPayload) -> Result<TransportResponse, TransportError> {
        self.sent.lock().unwrap().push(payload.clone());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(TransportResponse::new(201, "")))
    }
}
