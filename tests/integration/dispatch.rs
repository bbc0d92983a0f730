//! Status-code contract over real HTTP.

use super::mock_server::MockServerFixture;
use serde_json::json;
use team_api_client::error::CodecPhase;
use team_api_client::team::groups::{GroupsGetInfoError, GroupsGetInfoItem};
use team_api_client::team::members::{MembersDeactivateArg, MembersRemoveArg, MembersRemoveError};
use team_api_client::team::{GroupSelector, GroupsSelector, UserSelectorArg};
use team_api_client::{CallError, LaunchResult};

const TEAM_INFO: &str = r#"{
    "name": "Acme",
    "team_id": "dbtid:AAA",
    "num_licensed_users": 25,
    "num_provisioned_users": 17
}"#;

#[tokio::test]
async fn test_success_decodes_result() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_json_response("get_info", 200, TEAM_INFO).await;
    let client = fixture.create_test_client().unwrap();

    let info = client.team().get_info().await.unwrap();

    assert_eq!(info.name, "Acme");
    assert_eq!(info.num_provisioned_users, 17);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_routes_without_argument_send_no_body() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_expecting_no_body("get_info", TEAM_INFO).await;
    let client = fixture.create_test_client().unwrap();

    tokio_test::assert_ok!(client.team().get_info().await);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_argument_is_posted_as_json() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_expecting_json(
            "members/remove",
            json!({
                "user": {".tag": "email", "email": "bob@example.com"},
                "wipe_data": true,
                "keep_account": false
            }),
            r#"{".tag": "complete"}"#,
        )
        .await;
    let client = fixture.create_test_client().unwrap();

    let launch = client
        .team()
        .members_remove(&MembersRemoveArg::new(UserSelectorArg::email("bob@example.com")))
        .await
        .unwrap();

    assert_eq!(launch, LaunchResult::Complete(()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_route_without_result_ignores_body() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_json_response("members/suspend", 200, "null").await;
    let client = fixture.create_test_client().unwrap();

    let arg = MembersDeactivateArg {
        user: UserSelectorArg::team_member_id("dbmid:1"),
        wipe_data: false,
    };
    tokio_test::assert_ok!(client.team().members_suspend(&arg).await);
}

#[tokio::test]
async fn test_conflict_decodes_route_error() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json_response(
            "groups/get_info",
            409,
            r#"{
                "error_summary": "group_not_on_team/..",
                "error": {".tag": "group_not_on_team"},
                "user_message": {"text": "No such group", "locale": "en"}
            }"#,
        )
        .await;
    let client = fixture.create_test_client().unwrap();

    let err = client
        .team()
        .groups_get_info(&GroupsSelector::GroupIds {
            group_ids: vec!["g:missing".into()],
        })
        .await
        .unwrap_err();

    assert_eq!(err.http_status(), Some(409));
    assert_eq!(err.route_error(), Some(&GroupsGetInfoError::GroupNotOnTeam));
    assert_eq!(err.error_summary(), Some("group_not_on_team/.."));
    assert_eq!(err.user_message().map(|m| m.text.as_str()), Some("No such group"));
}

#[tokio::test]
async fn test_conflict_without_error_field() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json_response("members/remove", 409, r#"{"error_summary": "other/"}"#)
        .await;
    let client = fixture.create_test_client().unwrap();

    let err = client
        .team()
        .members_remove(&MembersRemoveArg::new(UserSelectorArg::email("x@example.com")))
        .await
        .unwrap_err();

    match err {
        CallError::Route(api) => {
            assert_eq!(api.error_summary, "other/");
            assert_eq!(api.error, None::<MembersRemoveError>);
        }
        other => panic!("expected a route error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_bad_request_body_is_raw_text() {
    let fixture = MockServerFixture::new().await;
    let text = "Error in call to API function \"team/groups/get_info\": missing field";
    let _mock = fixture.mock_text_response("groups/get_info", 400, text).await;
    let client = fixture.create_test_client().unwrap();

    let err = client
        .team()
        .groups_get_info(&GroupsSelector::GroupIds { group_ids: vec![] })
        .await
        .unwrap_err();

    match err {
        CallError::BadRequest(body) => assert_eq!(body, text),
        other => panic!("expected a bad request, got {:?}", other),
    }
}

#[tokio::test]
async fn test_other_status_uses_generic_envelope() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json_response(
            "groups/delete",
            500,
            r#"{"error_summary": "internal", "error": {".tag": "group_not_found"}}"#,
        )
        .await;
    let client = fixture.create_test_client().unwrap();

    let err = client
        .team()
        .groups_delete(&GroupSelector::group_id("g:1"))
        .await
        .unwrap_err();

    match &err {
        CallError::Status(status) => {
            assert_eq!(status.status, 500);
            assert_eq!(status.error_summary, "internal");
        }
        other => panic!("expected a status error, got {:?}", other),
    }
    // A route-specific payload is never decoded outside 409.
    assert!(err.route_error().is_none());
}

#[tokio::test]
async fn test_other_status_with_unreadable_body() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_text_response("get_info", 503, "<html>upstream unavailable</html>")
        .await;
    let client = fixture.create_test_client().unwrap();

    let err = client.team().get_info().await.unwrap_err();

    match err {
        CallError::Protocol(p) => {
            assert_eq!(p.phase, CodecPhase::DecodeStatusError);
            assert_eq!(p.status, Some(503));
            assert_eq!(p.route, "team/get_info");
        }
        other => panic!("expected a protocol error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_success_is_protocol_error() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json_response("groups/get_info", 200, r#"[{".tag": "teleported"}]"#)
        .await;
    let client = fixture.create_test_client().unwrap();

    let err = client
        .team()
        .groups_get_info(&GroupsSelector::GroupIds {
            group_ids: vec!["g:1".into()],
        })
        .await
        .unwrap_err();

    match err {
        CallError::Protocol(p) => {
            assert_eq!(p.phase, CodecPhase::DecodeSuccess);
            assert_eq!(p.route, "team/groups/get_info");
        }
        other => panic!("expected a protocol error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_identical_calls_give_identical_results() {
    let fixture = MockServerFixture::new().await;
    let body = r#"[{".tag": "id_not_found", "id_not_found": "g:gone"}]"#;
    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", "/2/team/groups/get_info")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(2)
            .create_async()
            .await
    };
    let client = fixture.create_test_client().unwrap();
    let selector = GroupsSelector::GroupIds {
        group_ids: vec!["g:gone".into()],
    };

    let first = client.team().groups_get_info(&selector).await.unwrap();
    let second = client.team().groups_get_info(&selector).await.unwrap();

    assert_eq!(first, second);
    assert!(matches!(
        first.as_slice(),
        [GroupsGetInfoItem::IdNotFound { id_not_found }] if id_not_found == "g:gone"
    ));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let client = team_api_client::TeamClient::builder()
        .access_token("test-token")
        .base_url_override("http://127.0.0.1:9/2")
        .build()
        .unwrap();

    let err = client.team().get_info().await.unwrap_err();

    assert!(matches!(err, CallError::Transport(_)));
    assert_eq!(err.http_status(), None);
}
