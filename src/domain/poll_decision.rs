use std::time::Duration;

use super::JobStatus;

/// Outcome of inspecting one poll result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollDecision {
    Continue,
    Done(JobStatus),
    TimedOut,
}

/// Terminal statuses win over the deadline: a job observed COMPLETED on the
/// poll that crosses the timeout is still reported as completed.
pub fn decide(status: JobStatus, elapsed: Duration, timeout: Duration) -> PollDecision {
    if status.is_terminal() {
        PollDecision::Done(status)
    } else if elapsed > timeout {
        PollDecision::TimedOut
    } else {
        PollDecision::Continue
    }
}
