//! Member lifecycle: add, list, profile changes, suspension, removal.

use super::common::{AdminTier, TeamMemberInfo, UserSelectorArg};
use super::routes;
use super::TeamApi;
use crate::async_job::{
    AsyncJob, LaunchEmptyResult, LaunchResult, NoFailure, PollArg, PollEmptyResult, PollError,
    PollResult,
};
use crate::client::CallResult;
use crate::error::NoRouteError;
use crate::pagination::{self, Cursor, CursorArg, ListPage, PageError, Paginated};
use serde::{Deserialize, Serialize};

/// Launch result of `members/add`.
pub type MembersAddLaunch = LaunchResult<Vec<MemberAddResult>>;

/// Poll result of `members/add/job_status/get`; a failed job reports a message.
pub type MembersAddJobStatus = PollResult<Vec<MemberAddResult>, String>;

pub type MembersAddJob<'c> = AsyncJob<'c, Vec<MemberAddResult>, String, PollError>;

pub type MembersRemoveJob<'c> = AsyncJob<'c, (), NoFailure, PollError>;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberAddArg {
    pub member_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_persistent_id: Option<String>,
    #[serde(default = "default_true")]
    pub send_welcome_email: bool,
    #[serde(default)]
    pub role: AdminTier,
}

impl MemberAddArg {
    pub fn new(member_email: impl Into<String>) -> Self {
        Self {
            member_email: member_email.into(),
            member_given_name: None,
            member_surname: None,
            member_external_id: None,
            member_persistent_id: None,
            send_welcome_email: true,
            role: AdminTier::MemberOnly,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembersAddArg {
    pub new_members: Vec<MemberAddArg>,
    /// Always answer with a job id, even for small batches.
    #[serde(default)]
    pub force_async: bool,
}

/// Per-member outcome of an add. Every failure names the email it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum MemberAddResult {
    Success(TeamMemberInfo),
    TeamLicenseLimit { team_license_limit: String },
    FreeTeamMemberLimitReached { free_team_member_limit_reached: String },
    UserAlreadyOnTeam { user_already_on_team: String },
    UserOnAnotherTeam { user_on_another_team: String },
    UserAlreadyPaired { user_already_paired: String },
    UserMigrationFailed { user_migration_failed: String },
    DuplicateExternalMemberId { duplicate_external_member_id: String },
    DuplicateMemberPersistentId { duplicate_member_persistent_id: String },
    PersistentIdDisabled { persistent_id_disabled: String },
    UserCreationFailed { user_creation_failed: String },
}

impl MemberAddResult {
    pub fn is_success(&self) -> bool {
        matches!(self, MemberAddResult::Success(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembersGetInfoArgs {
    pub members: Vec<UserSelectorArg>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum MembersGetInfoItem {
    IdNotFound { id_not_found: String },
    MemberInfo(TeamMemberInfo),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum MembersGetInfoError {
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembersListArg {
    pub limit: u32,
    #[serde(default)]
    pub include_removed: bool,
}

impl Default for MembersListArg {
    fn default() -> Self {
        Self {
            limit: super::groups::DEFAULT_LIST_LIMIT,
            include_removed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MembersListResult {
    pub members: Vec<TeamMemberInfo>,
    pub cursor: Cursor,
    pub has_more: bool,
}

impl Paginated for MembersListResult {
    type Item = TeamMemberInfo;

    fn into_page(self) -> ListPage<TeamMemberInfo> {
        ListPage {
            items: self.members,
            cursor: Some(self.cursor),
            has_more: self.has_more,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum MembersListError {
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum MembersListContinueError {
    InvalidCursor,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembersRecoverArg {
    pub user: UserSelectorArg,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum MembersRecoverError {
    UserNotFound,
    UserUnrecoverable,
    UserNotInTeam,
    TeamLicenseLimit,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembersRemoveArg {
    pub user: UserSelectorArg,
    #[serde(default = "default_true")]
    pub wipe_data: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_dest_id: Option<UserSelectorArg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_admin_id: Option<UserSelectorArg>,
    /// Downgrade to a basic account instead of deleting it.
    #[serde(default)]
    pub keep_account: bool,
}

impl MembersRemoveArg {
    pub fn new(user: UserSelectorArg) -> Self {
        Self {
            user,
            wipe_data: true,
            transfer_dest_id: None,
            transfer_admin_id: None,
            keep_account: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum MembersRemoveError {
    UserNotFound,
    UserNotInTeam,
    Other,
    RemoveLastAdmin,
    RemovedAndTransferDestShouldDiffer,
    RemovedAndTransferAdminShouldDiffer,
    TransferDestUserNotFound,
    TransferDestUserNotInTeam,
    TransferAdminUserNotFound,
    TransferAdminUserNotInTeam,
    UnspecifiedTransferAdminId,
    TransferAdminIsNotAdmin,
    CannotKeepAccountAndTransfer,
    CannotKeepAccountAndDeleteData,
    EmailAddressTooLongToBeDisabled,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum MembersSendWelcomeError {
    UserNotFound,
    UserNotInTeam,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembersSetPermissionsArg {
    pub user: UserSelectorArg,
    pub new_role: AdminTier,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MembersSetPermissionsResult {
    pub team_member_id: String,
    pub role: AdminTier,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum MembersSetPermissionsError {
    UserNotFound,
    LastAdmin,
    UserNotInTeam,
    CannotSetPermissions,
    TeamLicenseLimit,
    Other,
}

/// Profile fields to change; unset fields are left alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembersSetProfileArg {
    pub user: UserSelectorArg,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_persistent_id: Option<String>,
}

impl MembersSetProfileArg {
    pub fn new(user: UserSelectorArg) -> Self {
        Self {
            user,
            new_email: None,
            new_external_id: None,
            new_given_name: None,
            new_surname: None,
            new_persistent_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum MembersSetProfileError {
    UserNotFound,
    UserNotInTeam,
    ExternalIdAndNewExternalIdUnsafe,
    NoNewDataSpecified,
    EmailReservedForOtherUser,
    ExternalIdUsedByOtherUser,
    SetProfileDisallowed,
    ParamCannotBeEmpty,
    PersistentIdDisabled,
    PersistentIdUsedByOtherUser,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembersDeactivateArg {
    pub user: UserSelectorArg,
    #[serde(default = "default_true")]
    pub wipe_data: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum MembersSuspendError {
    UserNotFound,
    UserNotInTeam,
    Other,
    SuspendInactiveUser,
    SuspendLastAdmin,
    TeamLicenseLimit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembersUnsuspendArg {
    pub user: UserSelectorArg,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum MembersUnsuspendError {
    UserNotFound,
    UserNotInTeam,
    Other,
    UnsuspendNonSuspendedMember,
    TeamLicenseLimit,
}

impl<'c> TeamApi<'c> {
    pub async fn members_add(&self, arg: &MembersAddArg) -> CallResult<MembersAddLaunch, NoRouteError> {
        self.client.call(&routes::MEMBERS_ADD, arg).await
    }

    pub async fn members_add_job_status_get(&self, arg: &PollArg) -> CallResult<MembersAddJobStatus, PollError> {
        self.client.call(&routes::MEMBERS_ADD_JOB_STATUS_GET, arg).await
    }

    pub async fn members_get_info(
        &self,
        arg: &MembersGetInfoArgs,
    ) -> CallResult<Vec<MembersGetInfoItem>, MembersGetInfoError> {
        self.client.call(&routes::MEMBERS_GET_INFO, arg).await
    }

    pub async fn members_list(&self, arg: &MembersListArg) -> CallResult<MembersListResult, MembersListError> {
        self.client.call(&routes::MEMBERS_LIST, arg).await
    }

    pub async fn members_list_continue(
        &self,
        arg: &CursorArg,
    ) -> CallResult<MembersListResult, MembersListContinueError> {
        self.client.call(&routes::MEMBERS_LIST_CONTINUE, arg).await
    }

    pub async fn members_recover(&self, arg: &MembersRecoverArg) -> CallResult<(), MembersRecoverError> {
        self.client.call(&routes::MEMBERS_RECOVER, arg).await
    }

    pub async fn members_remove(&self, arg: &MembersRemoveArg) -> CallResult<LaunchEmptyResult, MembersRemoveError> {
        self.client.call(&routes::MEMBERS_REMOVE, arg).await
    }

    pub async fn members_remove_job_status_get(&self, arg: &PollArg) -> CallResult<PollEmptyResult, PollError> {
        self.client.call(&routes::MEMBERS_REMOVE_JOB_STATUS_GET, arg).await
    }

    pub async fn members_send_welcome_email(&self, arg: &UserSelectorArg) -> CallResult<(), MembersSendWelcomeError> {
        self.client.call(&routes::MEMBERS_SEND_WELCOME_EMAIL, arg).await
    }

    pub async fn members_set_admin_permissions(
        &self,
        arg: &MembersSetPermissionsArg,
    ) -> CallResult<MembersSetPermissionsResult, MembersSetPermissionsError> {
        self.client.call(&routes::MEMBERS_SET_ADMIN_PERMISSIONS, arg).await
    }

    pub async fn members_set_profile(
        &self,
        arg: &MembersSetProfileArg,
    ) -> CallResult<TeamMemberInfo, MembersSetProfileError> {
        self.client.call(&routes::MEMBERS_SET_PROFILE, arg).await
    }

    pub async fn members_suspend(&self, arg: &MembersDeactivateArg) -> CallResult<(), MembersSuspendError> {
        self.client.call(&routes::MEMBERS_SUSPEND, arg).await
    }

    pub async fn members_unsuspend(&self, arg: &MembersUnsuspendArg) -> CallResult<(), MembersUnsuspendError> {
        self.client.call(&routes::MEMBERS_UNSUSPEND, arg).await
    }

    /// Add members and track the batch through `members/add/job_status/get`.
    pub async fn members_add_job(&self, arg: &MembersAddArg) -> CallResult<MembersAddJob<'c>, NoRouteError> {
        let launch = self.members_add(arg).await?;
        Ok(AsyncJob::from_launch(self.client, routes::MEMBERS_ADD_JOB_STATUS_GET, launch))
    }

    /// Remove a member and track the removal through `members/remove/job_status/get`.
    pub async fn members_remove_job(
        &self,
        arg: &MembersRemoveArg,
    ) -> CallResult<MembersRemoveJob<'c>, MembersRemoveError> {
        let launch = self.members_remove(arg).await?;
        Ok(AsyncJob::from_launch(self.client, routes::MEMBERS_REMOVE_JOB_STATUS_GET, launch))
    }

    /// Every member of the team, following continuation cursors.
    pub async fn members_list_all(
        &self,
        arg: &MembersListArg,
    ) -> Result<Vec<TeamMemberInfo>, PageError<MembersListError, MembersListContinueError>> {
        pagination::collect_all(self.client, &routes::MEMBERS_LIST, arg, routes::MEMBERS_LIST_CONTINUE).await
    }
}
