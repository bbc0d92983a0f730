//! Cursor pagination against a scripted transport.

use super::scripted::ScriptedTransport;
use futures::TryStreamExt;
use serde_json::{json, Value};
use team_api_client::error::CodecPhase;
use team_api_client::pagination::{PageError, Pager};
use team_api_client::team::devices::ListMembersDevicesArg;
use team_api_client::team::groups::{GroupsListArg, GroupsListContinueError};
use team_api_client::team::linked_apps::ListMembersAppsArg;
use team_api_client::team::routes;
use team_api_client::CallError;

fn group(i: usize) -> Value {
    json!({
        "group_name": format!("group {}", i),
        "group_id": format!("g:{}", i),
        "group_management_type": {".tag": "company_managed"},
        "member_count": i
    })
}

fn page(range: std::ops::Range<usize>, cursor: &str, has_more: bool) -> Value {
    json!({
        "groups": range.map(group).collect::<Vec<_>>(),
        "cursor": cursor,
        "has_more": has_more
    })
}

/// Ten groups served as 4 + 4 + 2.
fn script_ten_groups(transport: &ScriptedTransport) {
    transport
        .push("groups/list", 200, page(0..4, "c1", true))
        .push("groups/list/continue", 200, page(4..8, "c2", true))
        .push("groups/list/continue", 200, page(8..10, "c3", false));
}

#[tokio::test]
async fn test_collects_every_page_in_order() {
    let transport = ScriptedTransport::new();
    script_ten_groups(&transport);
    let client = transport.client();

    let groups = client
        .team()
        .groups_list_all(&GroupsListArg { limit: 4 })
        .await
        .unwrap();

    let ids: Vec<_> = groups.iter().map(|g| g.group_id.as_str()).collect();
    let expected: Vec<_> = (0..10).map(|i| format!("g:{}", i)).collect();
    assert_eq!(ids, expected);

    // One list call, then each continuation forwards the latest cursor.
    assert_eq!(
        transport.bodies(),
        vec![json!({"limit": 4}), json!({"cursor": "c1"}), json!({"cursor": "c2"})]
    );
    assert_eq!(transport.remaining(), 0);
}

#[tokio::test]
async fn test_no_continuation_after_last_page() {
    let transport = ScriptedTransport::new();
    transport.push("groups/list", 200, page(0..3, "c-final", false));
    let client = transport.client();

    let first = client
        .team()
        .groups_list(&GroupsListArg::default())
        .await
        .unwrap();
    let mut pager = Pager::new(&client, routes::GROUPS_LIST_CONTINUE, first);

    assert_eq!(pager.next_page().await.unwrap().map(|p| p.len()), Some(3));
    assert!(!pager.has_more());
    assert!(pager.next_page().await.unwrap().is_none());
    assert!(pager.next_page().await.unwrap().is_none());

    assert_eq!(pager.continuations(), 0);
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_stream_fetches_lazily() {
    let transport = ScriptedTransport::new();
    script_ten_groups(&transport);
    let client = transport.client();

    let first = client
        .team()
        .groups_list(&GroupsListArg { limit: 4 })
        .await
        .unwrap();
    let pager = Pager::new(&client, routes::GROUPS_LIST_CONTINUE, first);

    let names: Vec<String> = pager
        .into_stream()
        .map_ok(|g| g.group_name)
        .try_collect()
        .await
        .unwrap();

    assert_eq!(names.len(), 10);
    assert_eq!(names[9], "group 9");
    assert_eq!(transport.requests().len(), 3);
}

#[tokio::test]
async fn test_failed_continuation_keeps_cursor() {
    let transport = ScriptedTransport::new();
    transport
        .push("groups/list", 200, page(0..4, "c1", true))
        .push(
            "groups/list/continue",
            409,
            json!({"error_summary": "invalid_cursor/", "error": {".tag": "invalid_cursor"}}),
        )
        .push("groups/list/continue", 200, page(4..6, "c2", false));
    let client = transport.client();

    let first = client
        .team()
        .groups_list(&GroupsListArg::default())
        .await
        .unwrap();
    let mut pager = Pager::new(&client, routes::GROUPS_LIST_CONTINUE, first);
    pager.next_page().await.unwrap();

    let err = pager.next_page().await.unwrap_err();
    assert_eq!(err.route_error(), Some(&GroupsListContinueError::InvalidCursor));
    assert!(pager.has_more());

    let retried = pager.next_page().await.unwrap().unwrap();
    assert_eq!(retried.len(), 2);
    assert_eq!(
        &transport.bodies()[1..],
        &[json!({"cursor": "c1"}), json!({"cursor": "c1"})]
    );
}

#[tokio::test]
async fn test_collect_all_reports_failing_call() {
    let transport = ScriptedTransport::new();
    transport
        .push("groups/list", 200, page(0..4, "c1", true))
        .push(
            "groups/list/continue",
            409,
            json!({"error_summary": "invalid_cursor/", "error": {".tag": "invalid_cursor"}}),
        );
    let client = transport.client();

    let err = client
        .team()
        .groups_list_all(&GroupsListArg::default())
        .await
        .unwrap_err();

    match err {
        PageError::Continue(CallError::Route(api)) => {
            assert_eq!(api.error, Some(GroupsListContinueError::InvalidCursor));
        }
        other => panic!("expected a continuation failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_same_route_continuation_with_optional_cursor() {
    let transport = ScriptedTransport::new();
    transport
        .push(
            "devices/list_members_devices",
            200,
            json!({"devices": [{"team_member_id": "dbmid:1"}], "has_more": true, "cursor": "d1"}),
        )
        .push(
            "devices/list_members_devices",
            200,
            json!({"devices": [{"team_member_id": "dbmid:2"}], "has_more": false}),
        );
    let client = transport.client();

    let devices = client
        .team()
        .devices_list_members_devices_all(&ListMembersDevicesArg::default())
        .await
        .unwrap();

    assert_eq!(devices.len(), 2);
    let bodies = transport.bodies();
    assert!(bodies[0].get("cursor").is_none());
    assert_eq!(bodies[1]["cursor"], json!("d1"));
}

#[tokio::test]
async fn test_has_more_without_cursor_is_protocol_error() {
    let transport = ScriptedTransport::new();
    transport.push(
        "devices/list_members_devices",
        200,
        json!({"devices": [], "has_more": true}),
    );
    let client = transport.client();

    let err = client
        .team()
        .devices_list_members_devices_all(&ListMembersDevicesArg::default())
        .await
        .unwrap_err();

    match err {
        PageError::Continue(CallError::Protocol(p)) => {
            assert_eq!(p.phase, CodecPhase::Pagination);
        }
        other => panic!("expected a pagination protocol error, got {:?}", other),
    }
    // Nothing was sent after the bad page.
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_continuation_page_without_cursor_is_not_followed_with_stale_cursor() {
    let transport = ScriptedTransport::new();
    transport
        .push(
            "devices/list_members_devices",
            200,
            json!({"devices": [{"team_member_id": "dbmid:1"}], "has_more": true, "cursor": "d1"}),
        )
        .push(
            "devices/list_members_devices",
            200,
            json!({"devices": [{"team_member_id": "dbmid:2"}], "has_more": true}),
        )
        .push(
            "devices/list_members_devices",
            200,
            json!({"devices": [{"team_member_id": "dbmid:3"}], "has_more": false}),
        );
    let client = transport.client();

    let err = client
        .team()
        .devices_list_members_devices_all(&ListMembersDevicesArg::default())
        .await
        .unwrap_err();

    match err {
        PageError::Continue(CallError::Protocol(p)) => {
            assert_eq!(p.phase, CodecPhase::Pagination);
            assert_eq!(p.route, "team/devices/list_members_devices");
        }
        other => panic!("expected a pagination protocol error, got {:?}", other),
    }
    // "d1" was sent once; nothing was sent after the page that lacked a cursor.
    let cursors: Vec<_> = transport.bodies().iter().map(|b| b.get("cursor").cloned()).collect();
    assert_eq!(cursors, vec![None, Some(json!("d1"))]);
    assert_eq!(transport.remaining(), 1);
}

#[tokio::test]
async fn test_same_route_continuation_keeps_session_filters() {
    let transport = ScriptedTransport::new();
    transport
        .push(
            "devices/list_members_devices",
            200,
            json!({"devices": [{"team_member_id": "dbmid:1"}], "has_more": true, "cursor": "d1"}),
        )
        .push(
            "devices/list_members_devices",
            200,
            json!({"devices": [{"team_member_id": "dbmid:2"}], "has_more": false}),
        );
    let client = transport.client();

    let arg = ListMembersDevicesArg {
        include_web_sessions: false,
        include_desktop_clients: false,
        ..ListMembersDevicesArg::default()
    };
    let devices = client.team().devices_list_members_devices_all(&arg).await.unwrap();

    assert_eq!(devices.len(), 2);
    assert_eq!(
        transport.bodies(),
        vec![
            json!({
                "include_web_sessions": false,
                "include_desktop_clients": false,
                "include_mobile_clients": true
            }),
            json!({
                "cursor": "d1",
                "include_web_sessions": false,
                "include_desktop_clients": false,
                "include_mobile_clients": true
            }),
        ]
    );
}

#[tokio::test]
async fn test_members_linked_apps_follow_cursor_on_same_route() {
    let app = json!({"app_id": "dbaid:1", "app_name": "Sync Tool", "is_app_folder": false});
    let transport = ScriptedTransport::new();
    transport
        .push(
            "linked_apps/list_members_linked_apps",
            200,
            json!({
                "apps": [{"team_member_id": "dbmid:1", "linked_api_apps": [app.clone()]}],
                "has_more": true,
                "cursor": "a1"
            }),
        )
        .push(
            "linked_apps/list_members_linked_apps",
            200,
            json!({
                "apps": [{"team_member_id": "dbmid:2", "linked_api_apps": []}],
                "has_more": false
            }),
        );
    let client = transport.client();

    let apps = client
        .team()
        .linked_apps_list_members_linked_apps_all(&ListMembersAppsArg::default())
        .await
        .unwrap();

    let members: Vec<_> = apps.iter().map(|a| a.team_member_id.as_str()).collect();
    assert_eq!(members, ["dbmid:1", "dbmid:2"]);
    assert_eq!(apps[0].linked_api_apps[0].app_name, "Sync Tool");
    assert_eq!(transport.bodies(), vec![json!({}), json!({"cursor": "a1"})]);
}
