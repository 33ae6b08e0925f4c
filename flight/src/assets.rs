/// Completion state of a fire-and-forget asset load.
///
/// The engine reports the outcome asynchronously; callers poll it and call
/// [`AssetStatus::resolve`]. A load resolves at most once: no retry, no timeout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AssetStatus {
    #[default]
    Pending,
    Ready,
    Failed(String),
}

impl AssetStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, AssetStatus::Ready)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, AssetStatus::Pending)
    }

    /// Record the load outcome. Returns `true` when this call changed the status.
    pub fn resolve(&mut self, outcome: Result<(), String>) -> bool {
        if !self.is_pending() {
            return false;
        }
        *self = match outcome {
            Ok(()) => AssetStatus::Ready,
            Err(reason) => AssetStatus::Failed(reason),
        };
        true
    }
}
