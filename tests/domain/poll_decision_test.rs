use std::time::Duration;

use polyvox::domain::{JobStatus, PollDecision, decide};

const TIMEOUT: Duration = Duration::from_secs(900);

#[test]
fn given_in_progress_within_budget_when_deciding_then_continues() {
    let decision = decide(JobStatus::InProgress, Duration::from_secs(10), TIMEOUT);

    assert_eq!(decision, PollDecision::Continue);
}

#[test]
fn given_terminal_status_when_deciding_then_done_with_that_status() {
    assert_eq!(
        decide(JobStatus::Completed, Duration::ZERO, TIMEOUT),
        PollDecision::Done(JobStatus::Completed)
    );
    assert_eq!(
        decide(JobStatus::Failed, Duration::from_secs(30), TIMEOUT),
        PollDecision::Done(JobStatus::Failed)
    );
}

#[test]
fn given_in_progress_past_budget_when_deciding_then_times_out() {
    let decision = decide(JobStatus::InProgress, Duration::from_secs(901), TIMEOUT);

    assert_eq!(decision, PollDecision::TimedOut);
}

#[test]
fn given_in_progress_exactly_at_budget_when_deciding_then_still_continues() {
    assert_eq!(decide(JobStatus::InProgress, TIMEOUT, TIMEOUT), PollDecision::Continue);
}

#[test]
fn given_completed_past_budget_when_deciding_then_completion_wins() {
    let decision = decide(JobStatus::Completed, Duration::from_secs(1000), TIMEOUT);

    assert_eq!(decision, PollDecision::Done(JobStatus::Completed));
}
