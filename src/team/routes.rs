//! Route table of the `team` namespace.
//!
//! One constant per operation. [`ALL_ROUTES`] lists the same descriptors in
//! type-erased form, in path order.

use super::common::{GroupSelector, GroupsSelector, TeamMemberInfo, UserSelectorArg};
use super::devices::*;
use super::groups::*;
use super::info::TeamGetInfoResult;
use super::linked_apps::*;
use super::members::*;
use super::properties::*;
use super::reports::*;
use super::NAMESPACE;
use crate::async_job::{LaunchEmptyResult, PollArg, PollEmptyResult, PollError};
use crate::error::NoRouteError;
use crate::pagination::CursorArg;
use crate::route::{Route, RouteInfo};

/// Declares route constants and the matching `ALL_ROUTES` table.
///
/// `kind` is the `Route` constructor: `new`, `without_argument` or `without_result`.
macro_rules! team_routes {
    ($( $kind:ident $name:ident = $path:literal : $arg:ty => $res:ty, $err:ty; )+) => {
        $(
            #[doc = concat!("`team/", $path, "`")]
            pub const $name: Route<$arg, $res, $err> =
                Route::$kind(concat!("team/", $path), NAMESPACE, $path);
        )+

        /// Every route of the namespace.
        pub const ALL_ROUTES: &[RouteInfo] = &[$( $name.info(), )+];
    };
}

team_routes! {
    new ALPHA_GROUPS_CREATE = "alpha/groups/create": GroupCreateArg => GroupFullInfo, GroupCreateError;
    new ALPHA_GROUPS_GET_INFO = "alpha/groups/get_info": GroupsSelector => Vec<GroupsGetInfoItem>, GroupsGetInfoError;
    new ALPHA_GROUPS_LIST = "alpha/groups/list": GroupsListArg => GroupsListResult, NoRouteError;
    new ALPHA_GROUPS_LIST_CONTINUE = "alpha/groups/list/continue": CursorArg => GroupsListResult, GroupsListContinueError;
    new ALPHA_GROUPS_UPDATE = "alpha/groups/update": GroupUpdateArgs => GroupFullInfo, GroupUpdateError;

    new DEVICES_LIST_MEMBER_DEVICES = "devices/list_member_devices": ListMemberDevicesArg => ListMemberDevicesResult, ListMemberDevicesError;
    new DEVICES_LIST_MEMBERS_DEVICES = "devices/list_members_devices": ListMembersDevicesArg => ListMembersDevicesResult, ListMembersDevicesError;
    new DEVICES_LIST_TEAM_DEVICES = "devices/list_team_devices": ListTeamDevicesArg => ListTeamDevicesResult, ListTeamDevicesError;
    without_result DEVICES_REVOKE_DEVICE_SESSION = "devices/revoke_device_session": RevokeDeviceSessionArg => (), RevokeDeviceSessionError;
    new DEVICES_REVOKE_DEVICE_SESSION_BATCH = "devices/revoke_device_session_batch": RevokeDeviceSessionBatchArg => RevokeDeviceSessionBatchResult, RevokeDeviceSessionBatchError;

    without_argument GET_INFO = "get_info": () => TeamGetInfoResult, NoRouteError;

    new GROUPS_CREATE = "groups/create": GroupCreateArg => GroupFullInfo, GroupCreateError;
    new GROUPS_DELETE = "groups/delete": GroupSelector => LaunchEmptyResult, GroupDeleteError;
    new GROUPS_GET_INFO = "groups/get_info": GroupsSelector => Vec<GroupsGetInfoItem>, GroupsGetInfoError;
    new GROUPS_JOB_STATUS_GET = "groups/job_status/get": PollArg => PollEmptyResult, GroupsPollError;
    new GROUPS_LIST = "groups/list": GroupsListArg => GroupsListResult, NoRouteError;
    new GROUPS_LIST_CONTINUE = "groups/list/continue": CursorArg => GroupsListResult, GroupsListContinueError;
    new GROUPS_MEMBERS_ADD = "groups/members/add": GroupMembersAddArg => GroupMembersChangeResult, GroupMembersAddError;
    new GROUPS_MEMBERS_LIST = "groups/members/list": GroupsMembersListArg => GroupsMembersListResult, GroupSelectorError;
    new GROUPS_MEMBERS_LIST_CONTINUE = "groups/members/list/continue": CursorArg => GroupsMembersListResult, GroupsMembersListContinueError;
    new GROUPS_MEMBERS_REMOVE = "groups/members/remove": GroupMembersRemoveArg => GroupMembersChangeResult, GroupMembersRemoveError;
    new GROUPS_MEMBERS_SET_ACCESS_TYPE = "groups/members/set_access_type": GroupMembersSetAccessTypeArg => Vec<GroupsGetInfoItem>, GroupMemberSetAccessTypeError;
    new GROUPS_UPDATE = "groups/update": GroupUpdateArgs => GroupFullInfo, GroupUpdateError;

    new LINKED_APPS_LIST_MEMBER_LINKED_APPS = "linked_apps/list_member_linked_apps": ListMemberAppsArg => ListMemberAppsResult, ListMemberAppsError;
    new LINKED_APPS_LIST_MEMBERS_LINKED_APPS = "linked_apps/list_members_linked_apps": ListMembersAppsArg => ListMembersAppsResult, ListMembersAppsError;
    new LINKED_APPS_LIST_TEAM_LINKED_APPS = "linked_apps/list_team_linked_apps": ListTeamAppsArg => ListTeamAppsResult, ListTeamAppsError;
    without_result LINKED_APPS_REVOKE_LINKED_APP = "linked_apps/revoke_linked_app": RevokeLinkedApiAppArg => (), RevokeLinkedAppError;
    new LINKED_APPS_REVOKE_LINKED_APP_BATCH = "linked_apps/revoke_linked_app_batch": RevokeLinkedApiAppBatchArg => RevokeLinkedAppBatchResult, RevokeLinkedAppBatchError;

    new MEMBERS_ADD = "members/add": MembersAddArg => MembersAddLaunch, NoRouteError;
    new MEMBERS_ADD_JOB_STATUS_GET = "members/add/job_status/get": PollArg => MembersAddJobStatus, PollError;
    new MEMBERS_GET_INFO = "members/get_info": MembersGetInfoArgs => Vec<MembersGetInfoItem>, MembersGetInfoError;
    new MEMBERS_LIST = "members/list": MembersListArg => MembersListResult, MembersListError;
    new MEMBERS_LIST_CONTINUE = "members/list/continue": CursorArg => MembersListResult, MembersListContinueError;
    without_result MEMBERS_RECOVER = "members/recover": MembersRecoverArg => (), MembersRecoverError;
    new MEMBERS_REMOVE = "members/remove": MembersRemoveArg => LaunchEmptyResult, MembersRemoveError;
    new MEMBERS_REMOVE_JOB_STATUS_GET = "members/remove/job_status/get": PollArg => PollEmptyResult, PollError;
    without_result MEMBERS_SEND_WELCOME_EMAIL = "members/send_welcome_email": UserSelectorArg => (), MembersSendWelcomeError;
    new MEMBERS_SET_ADMIN_PERMISSIONS = "members/set_admin_permissions": MembersSetPermissionsArg => MembersSetPermissionsResult, MembersSetPermissionsError;
    new MEMBERS_SET_PROFILE = "members/set_profile": MembersSetProfileArg => TeamMemberInfo, MembersSetProfileError;
    without_result MEMBERS_SUSPEND = "members/suspend": MembersDeactivateArg => (), MembersSuspendError;
    without_result MEMBERS_UNSUSPEND = "members/unsuspend": MembersUnsuspendArg => (), MembersUnsuspendError;

    new PROPERTIES_TEMPLATE_ADD = "properties/template/add": AddPropertyTemplateArg => AddPropertyTemplateResult, ModifyPropertyTemplateError;
    new PROPERTIES_TEMPLATE_GET = "properties/template/get": GetPropertyTemplateArg => GetPropertyTemplateResult, PropertyTemplateError;
    without_argument PROPERTIES_TEMPLATE_LIST = "properties/template/list": () => ListPropertyTemplateIds, PropertyTemplateError;
    new PROPERTIES_TEMPLATE_UPDATE = "properties/template/update": UpdatePropertyTemplateArg => UpdatePropertyTemplateResult, ModifyPropertyTemplateError;

    new REPORTS_GET_ACTIVITY = "reports/get_activity": DateRange => GetActivityReport, DateRangeError;
    new REPORTS_GET_DEVICES = "reports/get_devices": DateRange => GetDevicesReport, DateRangeError;
    new REPORTS_GET_MEMBERSHIP = "reports/get_membership": DateRange => GetMembershipReport, DateRangeError;
    new REPORTS_GET_STORAGE = "reports/get_storage": DateRange => GetStorageReport, DateRangeError;
}

/// Look up a descriptor by its path under the namespace.
pub fn find(path: &str) -> Option<RouteInfo> {
    ALL_ROUTES.iter().copied().find(|r| r.path == path)
}
