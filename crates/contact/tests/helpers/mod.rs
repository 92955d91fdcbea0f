#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use portfolio_contact::{
    ContactMessage, RelayReceipt, RelayTransport, StatusCode, SubmissionError,
};
use tokio::sync::{Mutex, oneshot};

pub fn sample_message() -> ContactMessage {
    ContactMessage {
        name: "Jane".to_string(),
        email: "jane@x.com".to_string(),
        subject: "Hi".to_string(),
        message: "Hello".to_string(),
    }
}

/// Relay double: counts calls, records the last payload and serves
/// scripted results (default: success). A gated call blocks in flight
/// until the test releases it.
pub struct MockRelay {
    calls: AtomicUsize,
    responses: Mutex<VecDeque<Result<RelayReceipt, SubmissionError>>>,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
    last: Mutex<Option<ContactMessage>>,
}

impl MockRelay {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            responses: Mutex::new(VecDeque::new()),
            gate: Mutex::new(None),
            last: Mutex::new(None),
        })
    }

    /// Script a failure for the next call.
    pub async fn push_status(&self, status: StatusCode) {
        self.responses
            .lock()
            .await
            .push_back(Err(SubmissionError::Status(status)));
    }

    /// Make the next call block until the returned sender is dropped or
    /// used.
    pub async fn hold(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.lock().await = Some(rx);
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn last_message(&self) -> Option<ContactMessage> {
        self.last.lock().await.clone()
    }
}

#[async_trait]
impl RelayTransport for MockRelay {
    async fn submit(&self, message: &ContactMessage) -> Result<RelayReceipt, SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().await = Some(message.clone());

        let gate = self.gate.lock().await.take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }

        match self.responses.lock().await.pop_front() {
            Some(result) => result,
            None => Ok(RelayReceipt {
                success: true,
                message: "Email sent".to_string(),
            }),
        }
    }
}
