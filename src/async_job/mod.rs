//! Launch-and-poll protocol for operations that outlive their HTTP call.
//!
//! A launch route answers with a [`LaunchResult`]: either the work already
//! finished (`Complete`) or the server hands back an async job id. The id is
//! then polled through a route returning [`PollResult`] until the job reaches a
//! terminal state.
//!
//! ```text
//! Launched ──poll──▶ InProgress ──poll──▶ Complete(T)
//!     │                  │  ▲
//!     │                  └──┘ poll
//!     └──────poll────────┴──────────────▶ Failed(kind)
//! ```
//!
//! [`AsyncJob`] tracks one id through that state machine. Once a terminal
//! state is observed it never issues another poll. Pacing between polls is
//! the caller's choice, expressed as a [`PollPolicy`].

mod policy;

pub use policy::PollPolicy;

use crate::client::{CallResult, TeamClient};
use crate::codec::{split_tag, variant_payload};
use crate::error::{ApiError, CallError};
use crate::route::Route;
use serde::de::{DeserializeOwned, Deserializer, Error as DeError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Argument of every job-status route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollArg {
    pub async_job_id: String,
}

impl PollArg {
    pub fn new(async_job_id: impl Into<String>) -> Self {
        Self {
            async_job_id: async_job_id.into(),
        }
    }
}

/// Result of a route that may finish its work after responding.
#[derive(Debug, Clone, PartialEq)]
pub enum LaunchResult<T> {
    /// The work finished within the call.
    Complete(T),
    /// The work continues server-side under this id.
    AsyncJobId(String),
}

/// Launch result of jobs whose completion carries no value.
pub type LaunchEmptyResult = LaunchResult<()>;

impl<'de, T: DeserializeOwned> Deserialize<'de> for LaunchResult<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let (tag, rest) = split_tag(value).map_err(D::Error::custom)?;
        match tag.as_str() {
            "complete" => serde_json::from_value(variant_payload(&tag, rest))
                .map(LaunchResult::Complete)
                .map_err(D::Error::custom),
            "async_job_id" => match variant_payload(&tag, rest) {
                Value::String(id) => Ok(LaunchResult::AsyncJobId(id)),
                _ => Err(D::Error::custom("async_job_id must be a string")),
            },
            other => Err(D::Error::unknown_variant(other, &["complete", "async_job_id"])),
        }
    }
}

/// Answer of a job-status route.
#[derive(Debug, Clone, PartialEq)]
pub enum PollResult<T, F = NoFailure> {
    InProgress,
    Complete(T),
    /// The job ended unsuccessfully and the server described why.
    Failed(F),
}

/// Poll result of jobs whose completion carries no value.
pub type PollEmptyResult = PollResult<(), NoFailure>;

impl<'de, T: DeserializeOwned, F: DeserializeOwned> Deserialize<'de> for PollResult<T, F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let (tag, rest) = split_tag(value).map_err(D::Error::custom)?;
        match tag.as_str() {
            "in_progress" => Ok(PollResult::InProgress),
            "complete" => serde_json::from_value(variant_payload(&tag, rest))
                .map(PollResult::Complete)
                .map_err(D::Error::custom),
            "failed" => serde_json::from_value(variant_payload(&tag, rest))
                .map(PollResult::Failed)
                .map_err(D::Error::custom),
            other => Err(D::Error::unknown_variant(
                other,
                &["in_progress", "complete", "failed"],
            )),
        }
    }
}

/// Failure payload of jobs that never report `failed` on a 200.
///
/// Uninhabited: a `failed` answer for such a job decodes to a protocol error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoFailure {}

impl<'de> Deserialize<'de> for NoFailure {
    fn deserialize<D: Deserializer<'de>>(_deserializer: D) -> Result<Self, D::Error> {
        Err(D::Error::custom("this job kind reports no failure payload"))
    }
}

/// `409` error of the job-status routes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum PollError {
    /// The job id is unknown or has expired.
    InvalidAsyncJobId,
    /// Something went wrong with the job on the server.
    InternalError,
    Other,
}

/// Why a job ended unsuccessfully.
#[derive(Debug, Clone, PartialEq)]
pub enum JobFailure<F, E> {
    /// A `200` poll answered `failed`.
    Reported(F),
    /// The poll route rejected the id (`409`).
    Rejected(ApiError<E>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum JobState<T, F, E> {
    Launched,
    InProgress,
    Complete(T),
    Failed(JobFailure<F, E>),
}

impl<T, F, E> JobState<T, F, E> {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Complete(_) | JobState::Failed(_))
    }
}

#[derive(Debug)]
pub enum JobError<F, E> {
    Failed(JobFailure<F, E>),
    /// A poll call failed without reaching a terminal state.
    Call(CallError<E>),
    /// The policy's attempt budget ran out while the job was still running.
    Exhausted { job_id: String, polls: u32 },
}

impl<F, E> fmt::Display for JobError<F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobError::Failed(JobFailure::Reported(_)) => write!(f, "async job failed"),
            JobError::Failed(JobFailure::Rejected(api)) => {
                write!(f, "async job rejected: {}", api.error_summary)
            }
            JobError::Call(err) => write!(f, "polling async job: {}", err),
            JobError::Exhausted { job_id, polls } => {
                write!(f, "async job {} still running after {} polls", job_id, polls)
            }
        }
    }
}

impl<F: fmt::Debug, E: fmt::Debug> std::error::Error for JobError<F, E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JobError::Call(err) => err.source(),
            _ => None,
        }
    }
}

/// Tracks one async job through launch, polling and its terminal state.
pub struct AsyncJob<'c, T, F, E> {
    client: &'c TeamClient,
    poll_route: Route<PollArg, PollResult<T, F>, E>,
    job_id: Option<String>,
    state: JobState<T, F, E>,
    polls: u32,
}

impl<'c, T, F, E> AsyncJob<'c, T, F, E>
where
    T: DeserializeOwned,
    F: DeserializeOwned,
    E: DeserializeOwned,
{
    /// Start tracking from a launch answer. A `Complete` launch is already terminal.
    pub fn from_launch(
        client: &'c TeamClient,
        poll_route: Route<PollArg, PollResult<T, F>, E>,
        launch: LaunchResult<T>,
    ) -> Self {
        let (job_id, state) = match launch {
            LaunchResult::Complete(value) => (None, JobState::Complete(value)),
            LaunchResult::AsyncJobId(id) => (Some(id), JobState::Launched),
        };
        Self {
            client,
            poll_route,
            job_id,
            state,
            polls: 0,
        }
    }

    /// Track a job id obtained some other way, e.g. from a group membership change.
    pub fn resume(
        client: &'c TeamClient,
        poll_route: Route<PollArg, PollResult<T, F>, E>,
        job_id: impl Into<String>,
    ) -> Self {
        Self::from_launch(client, poll_route, LaunchResult::AsyncJobId(job_id.into()))
    }

    /// `None` when the launch completed without producing an id.
    pub fn job_id(&self) -> Option<&str> {
        self.job_id.as_deref()
    }

    pub fn state(&self) -> &JobState<T, F, E> {
        &self.state
    }

    /// Number of poll calls issued so far.
    pub fn polls(&self) -> u32 {
        self.polls
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Issue one poll call, unless the job is already terminal.
    ///
    /// A `409` from the poll route is a terminal failure of the job. Transport,
    /// protocol and other status errors leave the state untouched and are
    /// returned to the caller.
    pub async fn poll_once(&mut self) -> CallResult<&JobState<T, F, E>, E> {
        let job_id = match (&self.job_id, self.state.is_terminal()) {
            (Some(id), false) => id.clone(),
            _ => return Ok(&self.state),
        };

        self.polls = self.polls.saturating_add(1);
        let answer = self
            .client
            .call(&self.poll_route, &PollArg::new(job_id.as_str()))
            .await;

        self.state = match answer {
            Ok(PollResult::InProgress) => JobState::InProgress,
            Ok(PollResult::Complete(value)) => JobState::Complete(value),
            Ok(PollResult::Failed(reason)) => JobState::Failed(JobFailure::Reported(reason)),
            Err(CallError::Route(api)) => JobState::Failed(JobFailure::Rejected(api)),
            Err(other) => return Err(other),
        };

        debug!(
            route = self.poll_route.name(),
            async_job_id = job_id.as_str(),
            polls = self.polls,
            terminal = self.state.is_terminal(),
            "polled async job"
        );
        Ok(&self.state)
    }

    /// Poll until terminal, pacing calls with `policy`.
    pub async fn wait(mut self, policy: &PollPolicy) -> Result<T, JobError<F, E>> {
        loop {
            self = match self.into_outcome() {
                Ok(Ok(value)) => return Ok(value),
                Ok(Err(failure)) => return Err(JobError::Failed(failure)),
                Err(pending) => pending,
            };

            if !policy.allows(self.polls) {
                return Err(JobError::Exhausted {
                    job_id: self.job_id.unwrap_or_default(),
                    polls: self.polls,
                });
            }

            if matches!(self.state, JobState::InProgress) {
                let delay = policy.delay(self.polls.saturating_sub(1));
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            }

            self.poll_once().await.map_err(JobError::Call)?;
        }
    }

    /// The terminal outcome, or the job itself if it is still pending.
    pub fn into_outcome(self) -> Result<Result<T, JobFailure<F, E>>, Self> {
        match self.state {
            JobState::Complete(value) => Ok(Ok(value)),
            JobState::Failed(failure) => Ok(Err(failure)),
            JobState::Launched | JobState::InProgress => Err(self),
        }
    }
}
