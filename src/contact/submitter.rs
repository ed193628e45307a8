use std::fmt;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{self, Either, FutureExt, LocalBoxFuture};
use futures::pin_mut;
use gloo_timers::future::TimeoutFuture;
use log::{debug, warn};
use thiserror::Error;

use super::validation::ContactRequest;
use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("no response within {0:?}")]
    TimedOut(Duration),
}

pub type SubmitFuture = LocalBoxFuture<'static, Result<(), SubmitError>>;

/// Delivers a finished contact request somewhere. Each call resolves exactly
/// once.
pub trait Submitter {
    fn submit(&self, request: ContactRequest) -> SubmitFuture;
}

/// Stand-in delivery that answers after a fixed latency.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    latency: Duration,
}

impl SimulatedSubmitter {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, request: ContactRequest) -> SubmitFuture {
        let latency = self.latency;
        async move {
            let payload = serde_json::to_string(&request).map_err(|e| {
                warn!("could not serialise contact request: {}", e);
                SubmitError::Rejected(e.to_string())
            })?;
            debug!("simulated submission: {}", payload);
            TimeoutFuture::new(millis(latency)).await;
            Ok::<(), SubmitError>(())
        }
        .boxed_local()
    }
}

/// Shared submitter that can sit in component properties. Two handles are
/// equal when they point at the same submitter.
#[derive(Clone)]
pub struct SubmitterHandle(Rc<dyn Submitter>);

impl SubmitterHandle {
    pub fn new(submitter: impl Submitter + 'static) -> Self {
        Self(Rc::new(submitter))
    }

    pub fn get(&self) -> &dyn Submitter {
        &*self.0
    }
}

impl Default for SubmitterHandle {
    fn default() -> Self {
        Self::new(SimulatedSubmitter::new(config::SIMULATED_LATENCY))
    }
}

impl PartialEq for SubmitterHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SubmitterHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SubmitterHandle")
    }
}

/// Races a submission against a deadline. Whichever finishes first decides
/// the outcome; a deadline win becomes [`SubmitError::TimedOut`].
pub async fn with_deadline<S, D>(submission: S, deadline: D, limit: Duration) -> Result<(), SubmitError>
where
    S: Future<Output = Result<(), SubmitError>>,
    D: Future<Output = ()>,
{
    pin_mut!(submission);
    pin_mut!(deadline);
    match future::select(submission, deadline).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(SubmitError::TimedOut(limit)),
    }
}

/// Starts `request` on `submitter`, bounded by a browser timer of `limit`.
pub fn submit_before_deadline(submitter: &dyn Submitter, request: ContactRequest, limit: Duration) -> SubmitFuture {
    with_deadline(submitter.submit(request), TimeoutFuture::new(millis(limit)), limit).boxed_local()
}

pub fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;

    /// Records what it was asked to deliver and answers from a script.
    struct RecordingSubmitter {
        outcome: Result<(), SubmitError>,
        seen: Rc<RefCell<Vec<ContactRequest>>>,
    }

    impl Submitter for RecordingSubmitter {
        fn submit(&self, request: ContactRequest) -> SubmitFuture {
            self.seen.borrow_mut().push(request);
            future::ready(self.outcome.clone()).boxed_local()
        }
    }

    const LIMIT: Duration = Duration::from_secs(10);

    #[test]
    fn submission_that_finishes_first_wins() {
        let outcome = block_on(with_deadline(future::ready(Ok(())), future::pending::<()>(), LIMIT));
        assert_eq!(outcome, Ok(()));

        let failure = Err(SubmitError::Rejected("bounced".to_string()));
        let outcome = block_on(with_deadline(future::ready(failure.clone()), future::pending::<()>(), LIMIT));
        assert_eq!(outcome, failure);
    }

    #[test]
    fn deadline_that_finishes_first_times_out() {
        let outcome = block_on(with_deadline(
            future::pending::<Result<(), SubmitError>>(),
            future::ready(()),
            LIMIT,
        ));
        assert_eq!(outcome, Err(SubmitError::TimedOut(LIMIT)));
    }

    #[test]
    fn submitter_receives_the_request_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let handle = SubmitterHandle::new(RecordingSubmitter {
            outcome: Ok(()),
            seen: seen.clone(),
        });
        let request = ContactRequest {
            name: "Jo".to_string(),
            ..Default::default()
        };

        let outcome = block_on(with_deadline(
            handle.get().submit(request.clone()),
            future::pending::<()>(),
            LIMIT,
        ));
        assert_eq!(outcome, Ok(()));
        assert_eq!(*seen.borrow(), vec![request]);
    }

    #[test]
    fn handles_compare_by_identity() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let a = SubmitterHandle::new(RecordingSubmitter {
            outcome: Ok(()),
            seen: seen.clone(),
        });
        let b = SubmitterHandle::new(RecordingSubmitter { outcome: Ok(()), seen });
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn errors_describe_their_cause() {
        assert_eq!(SubmitError::Rejected("smtp down".to_string()).to_string(), "submission rejected: smtp down");
        assert_eq!(SubmitError::TimedOut(Duration::from_secs(10)).to_string(), "no response within 10s");
    }

    #[test]
    fn millis_saturates() {
        assert_eq!(millis(Duration::from_millis(1500)), 1500);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
