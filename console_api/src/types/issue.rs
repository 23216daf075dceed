//! Shapes used to create an issue together with its pipeline.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::environment::{DatabaseId, EnvironmentId, InstanceId};
use super::principal::PrincipalId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    PendingApproval,
    Pending,
    Running,
    Done,
    Failed,
    Canceled,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreate {
    pub name: String,
    pub status: TaskStatus,
    #[serde(rename = "type")]
    pub task_type: String,
    pub instance_id: InstanceId,
    pub database_id: DatabaseId,
    pub statement: String,
    pub rollback_statement: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageCreate {
    pub name: String,
    pub environment_id: EnvironmentId,
    pub task_list: Vec<TaskCreate>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineCreate {
    pub stage_list: Vec<StageCreate>,
    pub name: String,
}

/// Issue creation payload, minus the project and creator which the caller fills in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCreate {
    pub name: String,
    #[serde(rename = "type")]
    pub issue_type: String,
    pub description: String,
    pub assignee_id: PrincipalId,
    pub pipeline: PipelineCreate,
    pub payload: Value,
}
