//! Actions understood by the dairy registry.

use crate::model::PasteurizationMethod;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum DairyAction {
    /// Starts a programme. Returns at once; the batch changes when the
    /// programme finishes.
    Pasteurize(PasteurizationMethod),
    /// Delivered by the scheduler when a programme's time is up.
    FinishPasteurization(PasteurizationMethod),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DairyActionResult {
    /// The programme is running and finishes after `ready_in`.
    Scheduled { ready_in: Duration },
    /// `applied` is false when the batch had already been treated.
    Finished { applied: bool },
}
