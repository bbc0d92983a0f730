//! List every team member, following continuation cursors.
//!
//! The access token is read from `TEAM_API_TOKEN` (or the keyring entry for
//! the configured host).
//!
//! Usage:
//!   TEAM_API_TOKEN=... cargo run --example list_members
//!   RUST_LOG=team_api_client=debug TEAM_API_TOKEN=... cargo run --example list_members

use anyhow::Context;
use futures::TryStreamExt;
use team_api_client::team::members::MembersListArg;
use team_api_client::team::routes;
use team_api_client::{Pager, TeamClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = TeamClient::from_env().context("building client")?;
    let team = client.team();

    let info = team.get_info().await.context("team/get_info")?;
    println!(
        "{} ({} of {} licenses used)",
        info.name, info.num_provisioned_users, info.num_licensed_users
    );

    let first = team
        .members_list(&MembersListArg {
            limit: 100,
            include_removed: false,
        })
        .await
        .context("team/members/list")?;

    // Stream members as pages arrive instead of collecting them all first.
    let members = Pager::new(&client, routes::MEMBERS_LIST_CONTINUE, first).into_stream();
    futures::pin_mut!(members);
    let mut count = 0usize;
    while let Some(m) = members.try_next().await.context("team/members/list/continue")? {
        count += 1;
        println!(
            "{:<40} {:<30} {:?}",
            m.profile.email, m.profile.name.display_name, m.role
        );
    }
    println!("\n{} members", count);

    Ok(())
}
