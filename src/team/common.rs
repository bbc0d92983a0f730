//! Records shared by several route families: selectors, member profiles, groups.

use serde::{Deserialize, Serialize};

/// Identifies one team member. Exactly one identifier is set by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum UserSelectorArg {
    TeamMemberId { team_member_id: String },
    ExternalId { external_id: String },
    Email { email: String },
}

impl UserSelectorArg {
    pub fn team_member_id(id: impl Into<String>) -> Self {
        Self::TeamMemberId {
            team_member_id: id.into(),
        }
    }

    pub fn external_id(id: impl Into<String>) -> Self {
        Self::ExternalId {
            external_id: id.into(),
        }
    }

    pub fn email(email: impl Into<String>) -> Self {
        Self::Email {
            email: email.into(),
        }
    }
}

/// Identifies several team members by one kind of identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum UsersSelectorArg {
    TeamMemberIds { team_member_ids: Vec<String> },
    ExternalIds { external_ids: Vec<String> },
    Emails { emails: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GroupSelector {
    GroupId { group_id: String },
    GroupExternalId { group_external_id: String },
}

impl GroupSelector {
    pub fn group_id(id: impl Into<String>) -> Self {
        Self::GroupId { group_id: id.into() }
    }

    pub fn group_external_id(id: impl Into<String>) -> Self {
        Self::GroupExternalId {
            group_external_id: id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GroupsSelector {
    GroupIds { group_ids: Vec<String> },
    GroupExternalIds { group_external_ids: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub given_name: String,
    pub surname: String,
    pub familiar_name: String,
    pub display_name: String,
    pub abbreviated_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum TeamMemberStatus {
    Active,
    Invited,
    Suspended,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum TeamMembershipType {
    Full,
    Limited,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub team_member_id: String,
    pub email: String,
    pub email_verified: bool,
    pub status: TeamMemberStatus,
    pub name: Name,
    pub membership_type: TeamMembershipType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_id: Option<String>,
}

/// Administrative role of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum AdminTier {
    TeamAdmin,
    UserManagementAdmin,
    SupportAdmin,
    #[default]
    MemberOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberInfo {
    pub profile: MemberProfile,
    pub role: AdminTier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GroupManagementType {
    UserManaged,
    CompanyManaged,
    SystemManaged,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum GroupAccessType {
    Member,
    Owner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub group_name: String,
    pub group_id: String,
    pub group_management_type: GroupManagementType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u32>,
}
