//! Stage state definitions for tracking run progress
//!
//! Both pipeline stages move through the same state machine: a run is
//! initialized, optionally performs discovery, processes items one at a time,
//! aggregates, and completes. Per-item errors are absorbed inside the
//! processing loop and never drive the run to `Failed`; only pre-loop
//! validation failures do.

use crate::ScopeError;
use std::fmt;

/// Represents the current state of a pipeline stage run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageState {
    /// Run created, inputs not yet validated
    Initialized,

    /// Optional pre-loop discovery (sitemap fetch)
    Discovery,

    /// Main per-item loop
    Processing,

    /// Assembling the immutable result aggregate
    Aggregating,

    /// Terminal: result produced
    Completed,

    /// Terminal: pre-loop validation or an unhandled error aborted the run
    Failed,
}

impl StageState {
    /// Returns true if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Returns true if the transition from this state to `to` is allowed
    ///
    /// `Failed` is reachable only from the pre-loop states; once the main
    /// loop has started, per-item errors are recorded as data instead.
    pub fn can_transition(&self, to: StageState) -> bool {
        matches!(
            (self, to),
            (Self::Initialized, Self::Discovery)
                | (Self::Initialized, Self::Processing)
                | (Self::Initialized, Self::Failed)
                | (Self::Discovery, Self::Processing)
                | (Self::Discovery, Self::Failed)
                | (Self::Processing, Self::Aggregating)
                | (Self::Aggregating, Self::Completed)
        )
    }

    /// Transitions to `to`, validating the edge
    ///
    /// # Returns
    ///
    /// * `Ok(StageState)` - The new state
    /// * `Err(ScopeError::InvalidTransition)` - The edge is not allowed
    pub fn transition(self, to: StageState) -> Result<StageState, ScopeError> {
        if self.can_transition(to) {
            Ok(to)
        } else {
            Err(ScopeError::InvalidTransition { from: self, to })
        }
    }
}

impl fmt::Display for StageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Initialized => "initialized",
            Self::Discovery => "discovery",
            Self::Processing => "processing",
            Self::Aggregating => "aggregating",
            Self::Completed => "completed",
            Self::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}
