//! Launch-and-poll flows against a scripted transport.

use super::scripted::ScriptedTransport;
use serde_json::json;
use std::time::Duration;
use team_api_client::async_job::{JobFailure, PollError};
use team_api_client::team::groups::{GroupMembersAddArg, GroupsPollError, MemberAccess};
use team_api_client::team::members::{MemberAddArg, MemberAddResult, MembersAddArg, MembersRemoveArg};
use team_api_client::team::{GroupAccessType, GroupSelector, UserSelectorArg};
use team_api_client::{CallError, JobError, JobState, PollPolicy};

fn no_delay() -> PollPolicy {
    PollPolicy::fixed(Duration::ZERO)
}

fn remove_arg() -> MembersRemoveArg {
    MembersRemoveArg::new(UserSelectorArg::email("leaver@example.com"))
}

#[tokio::test]
async fn test_polls_until_complete_then_stops() {
    let transport = ScriptedTransport::new();
    transport
        .push("members/remove", 200, json!({".tag": "async_job_id", "async_job_id": "j1"}))
        .push("members/remove/job_status/get", 200, json!({".tag": "in_progress"}))
        .push("members/remove/job_status/get", 200, json!({".tag": "in_progress"}))
        .push("members/remove/job_status/get", 200, json!({".tag": "complete"}));
    let client = transport.client();

    let job = client.team().members_remove_job(&remove_arg()).await.unwrap();
    assert_eq!(job.job_id(), Some("j1"));
    assert_eq!(job.state(), &JobState::Launched);

    tokio_test::assert_ok!(job.wait(&no_delay()).await);

    let bodies = transport.bodies();
    assert_eq!(bodies.len(), 4);
    for poll in &bodies[1..] {
        assert_eq!(poll, &json!({"async_job_id": "j1"}));
    }
    assert_eq!(transport.remaining(), 0);
}

#[tokio::test]
async fn test_terminal_job_issues_no_more_polls() {
    let transport = ScriptedTransport::new();
    transport
        .push("members/remove", 200, json!({".tag": "async_job_id", "async_job_id": "j2"}))
        .push("members/remove/job_status/get", 200, json!({".tag": "complete"}));
    let client = transport.client();

    let mut job = client.team().members_remove_job(&remove_arg()).await.unwrap();
    job.poll_once().await.unwrap();
    assert!(job.is_terminal());

    job.poll_once().await.unwrap();
    job.poll_once().await.unwrap();

    assert_eq!(job.polls(), 1);
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn test_synchronous_completion_skips_polling() {
    let transport = ScriptedTransport::new();
    transport.push(
        "members/add",
        200,
        json!({
            ".tag": "complete",
            "complete": [{".tag": "user_already_on_team", "user_already_on_team": "dup@example.com"}]
        }),
    );
    let client = transport.client();

    let arg = MembersAddArg {
        new_members: vec![MemberAddArg::new("dup@example.com")],
        force_async: false,
    };
    let job = client.team().members_add_job(&arg).await.unwrap();
    assert!(job.job_id().is_none());

    let results = job.wait(&no_delay()).await.unwrap();

    assert_eq!(
        results,
        vec![MemberAddResult::UserAlreadyOnTeam {
            user_already_on_team: "dup@example.com".into()
        }]
    );
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_reported_failure_carries_reason() {
    let transport = ScriptedTransport::new();
    transport
        .push("members/add", 200, json!({".tag": "async_job_id", "async_job_id": "j3"}))
        .push(
            "members/add/job_status/get",
            200,
            json!({".tag": "failed", "failed": "team license limit reached"}),
        );
    let client = transport.client();

    let arg = MembersAddArg {
        new_members: vec![MemberAddArg::new("a@example.com")],
        force_async: true,
    };
    let job = client.team().members_add_job(&arg).await.unwrap();
    let err = job.wait(&no_delay()).await.unwrap_err();

    match err {
        JobError::Failed(JobFailure::Reported(reason)) => {
            assert_eq!(reason, "team license limit reached");
        }
        other => panic!("expected a reported failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_rejected_job_id_is_terminal() {
    let transport = ScriptedTransport::new();
    transport
        .push("members/remove", 200, json!({".tag": "async_job_id", "async_job_id": "expired"}))
        .push(
            "members/remove/job_status/get",
            409,
            json!({"error_summary": "invalid_async_job_id/", "error": {".tag": "invalid_async_job_id"}}),
        );
    let client = transport.client();

    let mut job = client.team().members_remove_job(&remove_arg()).await.unwrap();
    job.poll_once().await.unwrap();
    assert!(job.is_terminal());

    match job.into_outcome() {
        Ok(Err(JobFailure::Rejected(api))) => {
            assert_eq!(api.error, Some(PollError::InvalidAsyncJobId));
        }
        Ok(other) => panic!("expected a rejection, got {:?}", other),
        Err(_) => panic!("job should be terminal"),
    }
}

#[tokio::test]
async fn test_attempt_budget_is_enforced() {
    let transport = ScriptedTransport::new();
    transport
        .push("members/remove", 200, json!({".tag": "async_job_id", "async_job_id": "slow"}))
        .push("members/remove/job_status/get", 200, json!({".tag": "in_progress"}))
        .push("members/remove/job_status/get", 200, json!({".tag": "in_progress"}));
    let client = transport.client();

    let job = client.team().members_remove_job(&remove_arg()).await.unwrap();
    let policy = PollPolicy::exponential(Duration::from_millis(1), Duration::from_millis(4))
        .with_max_attempts(2);

    match job.wait(&policy).await {
        Err(JobError::Exhausted { job_id, polls }) => {
            assert_eq!(job_id, "slow");
            assert_eq!(polls, 2);
        }
        other => panic!("expected exhaustion, got {:?}", other),
    }
    assert_eq!(transport.requests().len(), 3);
}

#[tokio::test]
async fn test_poll_transport_failure_surfaces_as_call_error() {
    let transport = ScriptedTransport::new();
    transport
        .push("members/remove", 200, json!({".tag": "async_job_id", "async_job_id": "j4"}))
        .push("members/remove/job_status/get", 200, json!({".tag": "in_progress"}));
    let client = transport.client();

    let job = client.team().members_remove_job(&remove_arg()).await.unwrap();
    // The script runs out after one poll, so the second poll fails at the transport.
    let err = job.wait(&no_delay()).await.unwrap_err();

    assert!(matches!(err, JobError::Call(CallError::Transport(_))));
}

#[tokio::test]
async fn test_group_membership_change_is_tracked() {
    let transport = ScriptedTransport::new();
    transport
        .push(
            "groups/members/add",
            200,
            json!({
                "group_info": {
                    "group_name": "Engineering",
                    "group_id": "g:eng",
                    "group_management_type": {".tag": "user_managed"},
                    "created": 1_700_000_000_000u64,
                    "member_count": 5
                },
                "async_job_id": "gj1"
            }),
        )
        .push("groups/job_status/get", 200, json!({".tag": "in_progress"}))
        .push(
            "groups/job_status/get",
            409,
            json!({"error_summary": "access_denied/", "error": {".tag": "access_denied"}}),
        );
    let client = transport.client();
    let team = client.team();

    let change = team
        .groups_members_add(&GroupMembersAddArg {
            group: GroupSelector::group_id("g:eng"),
            members: vec![MemberAccess {
                user: UserSelectorArg::email("new@example.com"),
                access_type: GroupAccessType::Member,
            }],
            return_members: false,
        })
        .await
        .unwrap();
    assert_eq!(change.group_info.member_count, Some(5));

    let err = team.groups_change_job(&change).wait(&no_delay()).await.unwrap_err();

    match err {
        JobError::Failed(JobFailure::Rejected(api)) => {
            assert_eq!(api.error, Some(GroupsPollError::AccessDenied));
        }
        other => panic!("expected a rejection, got {:?}", other),
    }
    assert_eq!(
        &transport.bodies()[1..],
        &[json!({"async_job_id": "gj1"}), json!({"async_job_id": "gj1"})]
    );
}
