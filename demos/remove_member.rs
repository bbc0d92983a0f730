//! Remove a member and wait for the removal job to finish.
//!
//! Usage:
//!   TEAM_API_TOKEN=... cargo run --example remove_member -- someone@example.com

use anyhow::{bail, Context};
use std::time::Duration;
use team_api_client::async_job::JobFailure;
use team_api_client::team::members::MembersRemoveArg;
use team_api_client::team::UserSelectorArg;
use team_api_client::{JobError, PollPolicy, TeamClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let Some(email) = std::env::args().nth(1) else {
        bail!("usage: remove_member <email>");
    };

    let client = TeamClient::from_env().context("building client")?;
    let mut arg = MembersRemoveArg::new(UserSelectorArg::email(email.as_str()));
    arg.wipe_data = false;

    let job = match client.team().members_remove_job(&arg).await {
        Ok(job) => job,
        Err(err) => {
            if let Some(reason) = err.route_error() {
                bail!("server refused to remove {}: {:?}", email, reason);
            }
            return Err(err).context("team/members/remove");
        }
    };

    if let Some(id) = job.job_id() {
        println!("removal running as job {}", id);
    }

    let policy = PollPolicy::exponential(Duration::from_millis(500), Duration::from_secs(8)).with_max_attempts(30);
    match job.wait(&policy).await {
        Ok(()) => println!("{} removed", email),
        Err(JobError::Failed(JobFailure::Rejected(api))) => bail!("job rejected: {}", api.error_summary),
        Err(JobError::Exhausted { job_id, polls }) => {
            bail!("job {} still running after {} polls; check again later", job_id, polls)
        }
        Err(err) => return Err(err).context("polling removal job"),
    }

    Ok(())
}
