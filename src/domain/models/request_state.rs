use super::AdviceResult;

/// Lifecycle of the intake widget's single in-flight request.
///
/// Exactly one variant holds at any time. `Succeeded` carries the full
/// validated result; a partially-shaped payload never reaches this state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Pending,
    Succeeded(AdviceResult),
    Failed(String),
}

impl RequestState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// True once the one in-flight request has settled either way.
    pub fn is_settled(&self) -> bool {
        self.is_succeeded() || self.is_failed()
    }

    pub fn advice(&self) -> Option<&AdviceResult> {
        match self {
            Self::Succeeded(advice) => Some(advice),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

impl Default for RequestState {
    fn default() -> Self {
        Self::Idle
    }
}
