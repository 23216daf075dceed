//! Issue templates used to pre-fill the issue creation form.

use console_api::types::{
    Environment, IssueCreate, PipelineCreate, StageCreate, TaskCreate, TaskStatus, UNKNOWN_ID,
};
use serde_json::json;

use crate::error::ConsoleError;

/// Data available to a template when it builds an issue.
#[derive(Clone, Debug, Default)]
pub struct TemplateContext {
    /// Environments in pipeline order.
    pub environment_list: Vec<Environment>,
}

/// A form field a template asks for or produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateField {
    pub id: String,
    pub name: String,
}

/// Builds the initial payload of one issue type.
pub trait IssueTemplate {
    fn issue_type(&self) -> &'static str;

    fn build_issue(&self, ctx: &TemplateContext) -> Result<IssueCreate, ConsoleError>;

    fn input_fields(&self) -> Vec<TemplateField> {
        Vec::new()
    }

    fn output_fields(&self) -> Vec<TemplateField> {
        Vec::new()
    }
}

/// `bb.issue.general`: a single troubleshooting task in the first environment.
pub struct GeneralTemplate;

const GENERAL_ISSUE: &str = "bb.issue.general";
const GENERAL_TASK: &str = "bb.task.general";
const TROUBLESHOOT: &str = "Troubleshoot database";

impl IssueTemplate for GeneralTemplate {
    fn issue_type(&self) -> &'static str {
        GENERAL_ISSUE
    }

    fn build_issue(&self, ctx: &TemplateContext) -> Result<IssueCreate, ConsoleError> {
        let environment = ctx.environment_list.first().ok_or_else(|| {
            ConsoleError::InvalidInput("at least one environment is required".to_string())
        })?;

        Ok(IssueCreate {
            name: String::new(),
            issue_type: GENERAL_ISSUE.to_string(),
            description: String::new(),
            assignee_id: UNKNOWN_ID,
            pipeline: PipelineCreate {
                stage_list: vec![StageCreate {
                    name: TROUBLESHOOT.to_string(),
                    environment_id: environment.id,
                    task_list: vec![TaskCreate {
                        name: TROUBLESHOOT.to_string(),
                        status: TaskStatus::PendingApproval,
                        task_type: GENERAL_TASK.to_string(),
                        instance_id: UNKNOWN_ID,
                        database_id: UNKNOWN_ID,
                        statement: String::new(),
                        rollback_statement: String::new(),
                    }],
                }],
                name: "Create database pipeline".to_string(),
            },
            payload: json!({}),
        })
    }
}

/// Looks up a built-in template by issue type.
pub fn template_for(issue_type: &str) -> Option<Box<dyn IssueTemplate>> {
    match issue_type {
        GENERAL_ISSUE => Some(Box::new(GeneralTemplate)),
        _ => None,
    }
}
