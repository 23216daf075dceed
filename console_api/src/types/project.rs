//! Project-related types returned by the API.

use serde::{Deserialize, Serialize};

use super::common::RowStatus;
use super::principal::{Principal, PrincipalId};

pub type ProjectId = i64;
pub type MemberId = i64;

/// The project every database belongs to until it is transferred.
pub const DEFAULT_PROJECT_ID: ProjectId = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProjectRoleType {
    Owner,
    Developer,
}

/// How schema changes reach the project's databases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProjectWorkflowType {
    #[default]
    Ui,
    Vcs,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProjectVisibility {
    #[default]
    Public,
    Private,
}

/// Full project record returned by the `/api/project` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,

    pub creator: Option<Principal>,
    pub updater: Option<Principal>,
    #[serde(default)]
    pub created_ts: i64,
    #[serde(default)]
    pub updated_ts: i64,
    #[serde(default)]
    pub row_status: RowStatus,

    pub name: String,

    /// Short uppercase key, e.g. "SHOP".
    pub key: String,

    /// Members are returned inline because access checks need them often.
    #[serde(default)]
    pub member_list: Vec<ProjectMember>,

    #[serde(default)]
    pub workflow_type: ProjectWorkflowType,

    #[serde(default)]
    pub visibility: ProjectVisibility,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreate {
    pub name: String,
    pub key: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_status: Option<RowStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// A principal's membership in a project. The owning project is implied by
/// the containing [`Project::member_list`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMember {
    pub id: MemberId,
    #[serde(default)]
    pub created_ts: i64,
    #[serde(default)]
    pub updated_ts: i64,
    pub role: ProjectRoleType,
    pub principal: Principal,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMemberCreate {
    pub principal_id: PrincipalId,
    pub role: ProjectRoleType,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMemberPatch {
    pub role: ProjectRoleType,
}
