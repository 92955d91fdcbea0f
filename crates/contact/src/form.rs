use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::{ContactMessage, RelayReceipt, RelayTransport, SubmissionError, SubmissionState};

/// How long the success banner stays up before the form returns to
/// `Idle`.
pub const SUCCESS_BANNER_DELAY: Duration = Duration::from_secs(5);

/// Outcome of a submit interaction.
///
/// Failures are carried in the outcome instead of propagating: the only
/// consumer turns them into a user-visible signal, never a crash.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The relay accepted the message; fields were cleared.
    Sent(RelayReceipt),
    /// The relay or the network rejected the attempt; fields were
    /// retained so the user can resubmit without re-typing.
    Failed(SubmissionError),
    /// A submission was already in flight, nothing was sent.
    InFlight,
}

struct Inner {
    fields: ContactMessage,
    state: SubmissionState,
    // Bumped on every transition so a sleeping reset task can tell it is
    // stale and must not touch the state.
    epoch: u64,
}

/// The contact form controller: owns the field state, drives the
/// `Idle -> Submitting -> Submitted -> Idle` state machine and permits at
/// most one in-flight submission at a time.
pub struct ContactForm {
    transport: Arc<dyn RelayTransport>,
    inner: Mutex<Inner>,
    reset_delay: Duration,
}

impl ContactForm {
    pub fn new(transport: Arc<dyn RelayTransport>) -> Arc<Self> {
        Self::with_reset_delay(transport, SUCCESS_BANNER_DELAY)
    }

    pub fn with_reset_delay(transport: Arc<dyn RelayTransport>, reset_delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            transport,
            inner: Mutex::new(Inner {
                fields: ContactMessage::default(),
                state: SubmissionState::Idle,
                epoch: 0,
            }),
            reset_delay,
        })
    }

    pub fn state(&self) -> SubmissionState {
        self.lock().state
    }

    /// Current field values: the retained input after a failed attempt,
    /// empty after a successful one.
    pub fn fields(&self) -> ContactMessage {
        self.lock().fields.clone()
    }

    /// Submit `message` to the relay.
    ///
    /// While a submission is in flight every further call is a no-op
    /// returning [`SubmitOutcome::InFlight`]; the guard is taken
    /// synchronously, before the first await point, so a double submit
    /// within one tick still issues a single request. On every path the
    /// controller leaves `Submitting` before returning.
    pub async fn submit(self: &Arc<Self>, message: ContactMessage) -> SubmitOutcome {
        {
            let mut inner = self.lock();
            if inner.state == SubmissionState::Submitting {
                return SubmitOutcome::InFlight;
            }
            inner.fields = message.clone();
            inner.state = SubmissionState::Submitting;
            inner.epoch += 1;
        }

        match self.transport.submit(&message).await {
            Ok(receipt) => {
                let epoch = {
                    let mut inner = self.lock();
                    inner.fields = ContactMessage::default();
                    inner.state = SubmissionState::Submitted;
                    inner.epoch += 1;
                    inner.epoch
                };

                self.schedule_reset(epoch);

                SubmitOutcome::Sent(receipt)
            }
            Err(err) => {
                {
                    // Fields stay as submitted so the user can retry.
                    let mut inner = self.lock();
                    inner.state = SubmissionState::Idle;
                    inner.epoch += 1;
                }

                tracing::warn!(error = %err, "contact submission failed");

                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Return the form to `Idle` once the success banner has been up for
    /// `reset_delay`. The task holds only a weak reference plus the epoch
    /// observed at success time: a controller torn down mid-delay or a
    /// newer submission both leave the timer with nothing to do.
    fn schedule_reset(self: &Arc<Self>, epoch: u64) {
        let form = Arc::downgrade(self);
        let delay = self.reset_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let Some(form) = form.upgrade() else {
                return;
            };

            let mut inner = form.lock();
            if inner.epoch == epoch && inner.state == SubmissionState::Submitted {
                inner.state = SubmissionState::Idle;
                inner.epoch += 1;
            }
        });
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // The lock is only ever held for field copies and state flips,
        // never across an await, so a poisoned lock still carries a
        // consistent snapshot.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
