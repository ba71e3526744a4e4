use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::application::AdviceGateway;
use crate::domain::{RequestState, SymptomQuery};

/// Client-side intake state machine.
///
/// Owns the [`RequestState`] for one input widget: at most one request is in
/// flight at a time, and a second `submit` while `Pending` is ignored rather
/// than queued. The widget is the only mutator of its own state.
pub struct IntakeWidget {
    gateway: Arc<dyn AdviceGateway>,
    state: Mutex<RequestState>,
}

impl IntakeWidget {
    pub fn new(gateway: Arc<dyn AdviceGateway>) -> Self {
        Self {
            gateway,
            state: Mutex::new(RequestState::Idle),
        }
    }

    pub async fn state(&self) -> RequestState {
        self.state.lock().await.clone()
    }

    /// Submit symptom text and await the settlement of the resulting request.
    ///
    /// Blank input is a no-op, as is a submit while a request is already
    /// pending; in both cases the current state is returned unchanged and no
    /// outbound request is issued. Otherwise exactly one request is sent and
    /// the returned state is either `Succeeded` or `Failed`.
    pub async fn submit(&self, text: &str) -> RequestState {
        let query = SymptomQuery::new(text);
        if query.is_blank() {
            return self.state().await;
        }

        {
            let mut state = self.state.lock().await;
            if state.is_pending() {
                debug!("Submit ignored: a request is already in flight");
                return state.clone();
            }
            *state = RequestState::Pending;
        }

        let outcome = self.gateway.request_advice(query.text()).await;

        let mut state = self.state.lock().await;
        *state = match outcome {
            Ok(advice) => RequestState::Succeeded(advice),
            Err(e) => {
                warn!("Advice request failed: {e}");
                RequestState::Failed(e.to_string())
            }
        };
        state.clone()
    }

    /// Close the result overlay: a settled state returns to `Idle`.
    pub async fn dismiss(&self) {
        let mut state = self.state.lock().await;
        if state.is_settled() {
            *state = RequestState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::Semaphore;

    use super::*;
    use crate::domain::{AdviceResult, DomainError};

    /// Test gateway with a call counter and an optional gate that holds the
    /// request open until the test releases a permit.
    struct StubGateway {
        calls: AtomicUsize,
        gate: Option<Arc<Semaphore>>,
        outcome: Result<AdviceResult, String>,
        last_symptoms: Mutex<Option<String>>,
    }

    impl StubGateway {
        fn succeeding() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                gate: None,
                outcome: Ok(sample_advice()),
                last_symptoms: Mutex::new(None),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                gate: None,
                outcome: Err(message.to_string()),
                last_symptoms: Mutex::new(None),
            }
        }

        fn gated(gate: Arc<Semaphore>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                gate: Some(gate),
                outcome: Ok(sample_advice()),
                last_symptoms: Mutex::new(None),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        async fn last_symptoms(&self) -> Option<String> {
            self.last_symptoms.lock().await.clone()
        }
    }

    #[async_trait]
    impl AdviceGateway for StubGateway {
        async fn request_advice(&self, symptoms: &str) -> Result<AdviceResult, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_symptoms.lock().await = Some(symptoms.to_string());
            if let Some(gate) = &self.gate {
                gate.acquire().await.map_err(|e| DomainError::internal(e.to_string()))?.forget();
            }
            self.outcome
                .clone()
                .map_err(DomainError::upstream)
        }
    }

    fn sample_advice() -> AdviceResult {
        AdviceResult::new(
            "Dermatologist",
            vec!["Calamine lotion".to_string()],
            vec!["Avoid scratching".to_string()],
        )
    }

    #[tokio::test]
    async fn test_submit_transitions_to_succeeded() {
        let gateway = Arc::new(StubGateway::succeeding());
        let widget = IntakeWidget::new(gateway.clone());

        let state = widget.submit("itchy rash").await;

        assert_eq!(state.advice(), Some(&sample_advice()));
        assert_eq!(gateway.call_count(), 1);
        assert_eq!(gateway.last_symptoms().await.as_deref(), Some("itchy rash"));
    }

    #[tokio::test]
    async fn test_blank_submit_issues_no_request() {
        let gateway = Arc::new(StubGateway::succeeding());
        let widget = IntakeWidget::new(gateway.clone());

        let state = widget.submit("   \n").await;

        assert!(state.is_idle());
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_ignored() {
        let gate = Arc::new(Semaphore::new(0));
        let gateway = Arc::new(StubGateway::gated(gate.clone()));
        let widget = Arc::new(IntakeWidget::new(gateway.clone()));

        let first = {
            let widget = widget.clone();
            tokio::spawn(async move { widget.submit("sore throat").await })
        };

        // Let the first submit reach the gateway and park on the gate.
        while gateway.call_count() == 0 {
            tokio::task::yield_now().await;
        }
        assert!(widget.state().await.is_pending());

        let second = widget.submit("sore throat again").await;
        assert!(second.is_pending());
        assert_eq!(gateway.call_count(), 1);

        gate.add_permits(1);
        let settled = first.await.unwrap();
        assert!(settled.is_succeeded());
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failure_maps_to_failed_state() {
        let gateway = Arc::new(StubGateway::failing("service unavailable"));
        let widget = IntakeWidget::new(gateway);

        let state = widget.submit("headache").await;

        assert!(state.is_failed());
        assert!(state.failure().unwrap().contains("service unavailable"));
    }

    #[tokio::test]
    async fn test_dismiss_clears_settled_states() {
        let gateway = Arc::new(StubGateway::succeeding());
        let widget = IntakeWidget::new(gateway);

        widget.submit("itchy rash").await;
        assert!(widget.state().await.is_succeeded());

        widget.dismiss().await;
        assert!(widget.state().await.is_idle());
    }

    #[tokio::test]
    async fn test_dismiss_while_idle_is_a_no_op() {
        let gateway = Arc::new(StubGateway::succeeding());
        let widget = IntakeWidget::new(gateway);

        widget.dismiss().await;
        assert!(widget.state().await.is_idle());
    }

    #[tokio::test]
    async fn test_resubmit_after_failure_replaces_state() {
        let gateway = Arc::new(StubGateway::failing("boom"));
        let widget = IntakeWidget::new(gateway);

        assert!(widget.submit("headache").await.is_failed());
        assert!(widget.submit("headache").await.is_failed());
    }
}
