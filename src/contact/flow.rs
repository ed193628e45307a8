//! Submission lifecycle of the contact form.
//!
//! `Idle -> Submitting -> Succeeded -> Idle` on success, with the reset back
//! to `Idle` driven by a delayed callback the caller schedules.
//! `Idle -> Submitting -> Failed -> Idle` on failure, the last step only
//! through an explicit [`SubmissionFlow::retry`].
//!
//! The flow never touches timers or futures itself. It hands out an
//! [`AttemptId`] with every dispatch and every pending reset, and ignores
//! resolutions or resets carrying an id it is no longer waiting on.

use std::fmt;
use std::time::Duration;

use log::{debug, warn};

use super::state::FormState;
use super::submitter::SubmitError;
use super::validation::{ContactField, ContactRequest, ServiceInterest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Submitting => "submitting",
            SubmissionPhase::Succeeded => "succeeded",
            SubmissionPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttemptId(u64);

/// Frozen copy of the form to hand to the submitter.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub attempt: AttemptId,
    pub request: ContactRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAttempt {
    Dispatched(Dispatch),
    /// Validation failed; errors are on the form and the phase is still idle.
    Rejected,
    /// Not idle, nothing happened.
    Ignored(SubmissionPhase),
}

/// Reset the caller must schedule after a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReset {
    pub attempt: AttemptId,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct SubmissionFlow {
    form: FormState,
    phase: SubmissionPhase,
    reset_delay: Duration,
    next_attempt: u64,
    current: Option<AttemptId>,
}

impl SubmissionFlow {
    pub fn new(reset_delay: Duration) -> Self {
        Self {
            form: FormState::default(),
            phase: SubmissionPhase::Idle,
            reset_delay,
            next_attempt: 0,
            current: None,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn edit(&mut self, field: ContactField, value: String) {
        self.form.edit(field, value);
    }

    pub fn toggle_service(&mut self, service: ServiceInterest) {
        self.form.toggle_service(service);
    }

    pub fn submit(&mut self) -> SubmitAttempt {
        if self.phase != SubmissionPhase::Idle {
            debug!("submit ignored while {}", self.phase);
            return SubmitAttempt::Ignored(self.phase);
        }

        if !self.form.validate() {
            let invalid: Vec<&str> = self.form.errors().fields().map(ContactField::as_str).collect();
            debug!(
                "submit rejected, {} invalid field(s): {}",
                self.form.errors().len(),
                invalid.join(", ")
            );
            return SubmitAttempt::Rejected;
        }

        let attempt = AttemptId(self.next_attempt);
        self.next_attempt += 1;
        self.current = Some(attempt);
        self.transition(SubmissionPhase::Submitting);

        SubmitAttempt::Dispatched(Dispatch {
            attempt,
            request: self.form.request().clone(),
        })
    }

    /// Applies the submitter's outcome. On success returns the reset to
    /// schedule.
    pub fn resolve(&mut self, attempt: AttemptId, outcome: Result<(), SubmitError>) -> Option<PendingReset> {
        if self.phase != SubmissionPhase::Submitting || self.current != Some(attempt) {
            debug!("dropping outcome of stale attempt {:?}", attempt);
            return None;
        }

        match outcome {
            Ok(()) => {
                self.transition(SubmissionPhase::Succeeded);
                Some(PendingReset {
                    attempt,
                    delay: self.reset_delay,
                })
            }
            Err(err) => {
                warn!("contact submission failed: {}", err);
                self.current = None;
                self.transition(SubmissionPhase::Failed);
                None
            }
        }
    }

    /// Fired by the scheduled reset. Returns true when the form was cleared.
    pub fn auto_reset(&mut self, attempt: AttemptId) -> bool {
        if self.phase != SubmissionPhase::Succeeded || self.current != Some(attempt) {
            debug!("ignoring reset for attempt {:?}", attempt);
            return false;
        }
        self.current = None;
        self.form.clear();
        self.transition(SubmissionPhase::Idle);
        true
    }

    /// Leaves the failure screen with every field intact.
    pub fn retry(&mut self) -> bool {
        if self.phase != SubmissionPhase::Failed {
            debug!("retry ignored while {}", self.phase);
            return false;
        }
        self.transition(SubmissionPhase::Idle);
        true
    }

    fn transition(&mut self, next: SubmissionPhase) {
        debug!("contact form {} -> {}", self.phase, next);
        self.phase = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::validation::ValidationError;

    const DELAY: Duration = Duration::from_secs(5);

    fn filled_flow() -> SubmissionFlow {
        let mut flow = SubmissionFlow::new(DELAY);
        flow.edit(ContactField::Name, "Jo".to_string());
        flow.edit(ContactField::Email, "jo@example.com".to_string());
        flow.edit(ContactField::Company, "Acme".to_string());
        flow.toggle_service(ServiceInterest::Seo);
        flow.edit(ContactField::Message, "hi".to_string());
        flow
    }

    fn dispatch(flow: &mut SubmissionFlow) -> Dispatch {
        match flow.submit() {
            SubmitAttempt::Dispatched(dispatch) => dispatch,
            other => panic!("expected dispatch, got {other:?}"),
        }
    }

    /// Virtual clock standing in for the browser timer.
    #[derive(Default)]
    struct FakeTimers {
        now: Duration,
        scheduled: Vec<(Duration, AttemptId)>,
    }

    impl FakeTimers {
        fn schedule(&mut self, pending: PendingReset) {
            self.scheduled.push((self.now + pending.delay, pending.attempt));
        }

        fn advance(&mut self, by: Duration, flow: &mut SubmissionFlow) {
            self.now += by;
            let now = self.now;
            let (due, later): (Vec<_>, Vec<_>) = self.scheduled.drain(..).partition(|(at, _)| *at <= now);
            self.scheduled = later;
            for (_, attempt) in due {
                flow.auto_reset(attempt);
            }
        }
    }

    #[test]
    fn invalid_submit_stays_idle_and_surfaces_errors() {
        let mut flow = SubmissionFlow::new(DELAY);
        flow.edit(ContactField::Email, "a@b.com".to_string());
        flow.edit(ContactField::Message, "hi".to_string());

        assert_eq!(flow.submit(), SubmitAttempt::Rejected);
        assert_eq!(flow.phase(), SubmissionPhase::Idle);
        assert_eq!(flow.form().errors().len(), 1);
        assert_eq!(flow.form().errors().get(ContactField::Name), Some(ValidationError::NameRequired));
    }

    #[test]
    fn dispatch_carries_a_frozen_copy() {
        let mut flow = filled_flow();
        let dispatch = dispatch(&mut flow);
        assert_eq!(flow.phase(), SubmissionPhase::Submitting);
        assert_eq!(&dispatch.request, flow.form().request());

        flow.edit(ContactField::Message, "changed".to_string());
        assert_eq!(dispatch.request.message, "hi");
    }

    #[test]
    fn submit_while_submitting_is_a_no_op() {
        let mut flow = filled_flow();
        let first = dispatch(&mut flow);
        let before = flow.form().clone();

        assert_eq!(flow.submit(), SubmitAttempt::Ignored(SubmissionPhase::Submitting));
        assert_eq!(flow.phase(), SubmissionPhase::Submitting);
        assert_eq!(flow.form(), &before);

        // the original call is still the one being awaited
        assert!(flow.resolve(first.attempt, Ok(())).is_some());
        assert_eq!(flow.phase(), SubmissionPhase::Succeeded);
    }

    #[test]
    fn success_resets_after_exactly_the_delay() {
        let mut flow = filled_flow();
        let mut timers = FakeTimers::default();
        let mut phases = vec![flow.phase()];

        let dispatch = dispatch(&mut flow);
        phases.push(flow.phase());

        let pending = flow.resolve(dispatch.attempt, Ok(())).expect("reset scheduled");
        assert_eq!(pending.delay, DELAY);
        phases.push(flow.phase());
        timers.schedule(pending);

        timers.advance(DELAY - Duration::from_millis(1), &mut flow);
        assert_eq!(flow.phase(), SubmissionPhase::Succeeded);
        assert_eq!(flow.form().request().name, "Jo");

        timers.advance(Duration::from_millis(1), &mut flow);
        phases.push(flow.phase());

        assert_eq!(
            phases,
            vec![
                SubmissionPhase::Idle,
                SubmissionPhase::Submitting,
                SubmissionPhase::Succeeded,
                SubmissionPhase::Idle,
            ]
        );
        assert!(flow.form().request().is_blank());
        assert!(flow.form().errors().is_empty());
    }

    #[test]
    fn reset_fires_only_once() {
        let mut flow = filled_flow();
        let dispatch = dispatch(&mut flow);
        let pending = flow.resolve(dispatch.attempt, Ok(())).unwrap();

        assert!(flow.auto_reset(pending.attempt));
        flow.edit(ContactField::Name, "Again".to_string());
        assert!(!flow.auto_reset(pending.attempt));
        assert_eq!(flow.form().request().name, "Again");
    }

    #[test]
    fn failure_keeps_payload_and_retry_returns_to_idle() {
        let mut flow = filled_flow();
        let original = flow.form().request().clone();
        let mut phases = vec![flow.phase()];

        let dispatch = dispatch(&mut flow);
        phases.push(flow.phase());

        let pending = flow.resolve(dispatch.attempt, Err(SubmitError::Rejected("smtp down".to_string())));
        assert_eq!(pending, None);
        phases.push(flow.phase());
        assert_eq!(phases, vec![SubmissionPhase::Idle, SubmissionPhase::Submitting, SubmissionPhase::Failed]);
        assert_eq!(flow.form().request(), &original);

        assert!(flow.retry());
        assert_eq!(flow.phase(), SubmissionPhase::Idle);
        assert_eq!(flow.form().request(), &original);
    }

    #[test]
    fn timeout_collapses_into_failure() {
        let mut flow = filled_flow();
        let dispatch = dispatch(&mut flow);
        flow.resolve(dispatch.attempt, Err(SubmitError::TimedOut(Duration::from_secs(10))));
        assert_eq!(flow.phase(), SubmissionPhase::Failed);
    }

    #[test]
    fn resubmit_after_retry_gets_a_fresh_attempt() {
        let mut flow = filled_flow();
        let first = dispatch(&mut flow);
        flow.resolve(first.attempt, Err(SubmitError::Rejected("nope".to_string())));
        flow.retry();

        let second = dispatch(&mut flow);
        assert_ne!(first.attempt, second.attempt);
        assert_eq!(first.request, second.request);

        // a late duplicate of the first outcome must not settle the second
        assert_eq!(flow.resolve(first.attempt, Ok(())), None);
        assert_eq!(flow.phase(), SubmissionPhase::Submitting);
    }

    #[test]
    fn retry_and_submit_are_guarded_by_phase() {
        let mut flow = filled_flow();
        assert!(!flow.retry());

        let dispatch = dispatch(&mut flow);
        assert!(!flow.retry());

        flow.resolve(dispatch.attempt, Ok(()));
        assert!(!flow.retry());
        assert_eq!(flow.submit(), SubmitAttempt::Ignored(SubmissionPhase::Succeeded));
    }

    #[test]
    fn failed_form_does_not_submit_until_retry() {
        let mut flow = filled_flow();
        let dispatch = dispatch(&mut flow);
        flow.resolve(dispatch.attempt, Err(SubmitError::Rejected("nope".to_string())));
        assert_eq!(flow.submit(), SubmitAttempt::Ignored(SubmissionPhase::Failed));
    }
}
