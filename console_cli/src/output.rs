use console_lib::types::{Project, ProjectVisibility, ProjectWorkflowType};
use console_lib::{
    helpers, App, ConsoleError, ConsoleStores, Globals, MountTarget, MountedApp, Notification,
};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Mount surface for a terminal session: reports what was mounted on stderr.
pub struct TerminalTarget;

impl MountTarget for TerminalTarget {
    fn mount(&self, anchor: &str, app: &App) -> Result<(), ConsoleError> {
        if anchor.is_empty() {
            return Err(ConsoleError::Mount("empty mount anchor".to_string()));
        }
        eprintln!(
            "Mounting {} components and {} directives on {}",
            app.components().len(),
            app.directive_names().len(),
            anchor
        );
        Ok(())
    }
}

/// What `boot` reports once the application is mounted.
#[derive(Debug, Serialize)]
pub struct BootSummary {
    pub anchor: String,
    pub mode: String,
    pub version: String,
    pub host: String,
    pub plan: String,
    pub user: Option<String>,
    pub settings: usize,
    pub helpers: Vec<&'static str>,
    pub directives: Vec<String>,
    pub components: Vec<String>,
    pub failed: Vec<&'static str>,
    pub notifications: Vec<Notification>,
}

impl BootSummary {
    /// Snapshots the mounted app and drains the pending notifications.
    pub fn collect(mounted: &MountedApp, stores: &ConsoleStores) -> Self {
        let app = mounted.app();
        let info = stores.actuator.info().unwrap_or_default();
        Self {
            anchor: mounted.anchor().to_string(),
            mode: mode_label(app.globals()),
            version: info.version,
            host: info.host,
            plan: stores.plan.current().to_string(),
            user: stores
                .session
                .current_user()
                .map(|p| format!("{} <{}>", p.name, p.email)),
            settings: stores.setting.len(),
            helpers: Globals::NAMES.to_vec(),
            directives: app.directive_names().into_iter().map(String::from).collect(),
            components: app.components().to_vec(),
            failed: mounted.settle_report().failed.clone(),
            notifications: stores.notification.drain(),
        }
    }
}

fn mode_label(globals: &Globals) -> String {
    match (globals.is_dev(), globals.is_release()) {
        (true, true) => "dev+release".to_string(),
        (true, false) => "dev".to_string(),
        (false, true) => "release".to_string(),
        (false, false) => "-".to_string(),
    }
}

#[derive(Tabled, Serialize)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled, Serialize)]
struct NotificationRow {
    #[tabled(rename = "Module")]
    module: String,
    #[tabled(rename = "Style")]
    style: String,
    #[tabled(rename = "Title")]
    title: String,
}

#[derive(Tabled, Serialize)]
struct ProjectRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Workflow")]
    workflow: String,
    #[tabled(rename = "Visibility")]
    visibility: String,
    #[tabled(rename = "Members")]
    members: usize,
    #[tabled(rename = "Slug")]
    slug: String,
}

// -- Row builders --

fn build_field_rows(summary: &BootSummary) -> Vec<FieldRow> {
    let or_dash = |s: &str| {
        if s.is_empty() {
            "-".to_string()
        } else {
            s.to_string()
        }
    };
    let failed = if summary.failed.is_empty() {
        "none".to_string()
    } else {
        summary.failed.join(", ")
    };
    [
        ("Anchor", summary.anchor.clone()),
        ("Mode", summary.mode.clone()),
        ("Version", or_dash(&summary.version)),
        ("Host", or_dash(&summary.host)),
        ("Plan", summary.plan.clone()),
        ("User", summary.user.clone().unwrap_or_else(|| "-".to_string())),
        ("Settings", summary.settings.to_string()),
        ("Helpers", summary.helpers.len().to_string()),
        ("Directives", summary.directives.join(", ")),
        ("Components", summary.components.len().to_string()),
        ("Failed", failed),
    ]
    .into_iter()
    .map(|(field, value)| FieldRow {
        field: field.to_string(),
        value,
    })
    .collect()
}

fn build_notification_rows(notifications: &[Notification]) -> Vec<NotificationRow> {
    notifications
        .iter()
        .map(|n| NotificationRow {
            module: n.module.clone(),
            style: n.style.to_string(),
            title: n.title.clone(),
        })
        .collect()
}

fn build_project_rows(projects: &[Project]) -> Vec<ProjectRow> {
    projects
        .iter()
        .map(|p| ProjectRow {
            id: p.id,
            name: helpers::project_name(p),
            key: p.key.clone(),
            workflow: workflow_label(p.workflow_type).to_string(),
            visibility: visibility_label(p.visibility).to_string(),
            members: p.member_list.len(),
            slug: helpers::project_slug(p),
        })
        .collect()
}

fn workflow_label(workflow: ProjectWorkflowType) -> &'static str {
    match workflow {
        ProjectWorkflowType::Ui => "UI",
        ProjectWorkflowType::Vcs => "VCS",
    }
}

fn visibility_label(visibility: ProjectVisibility) -> &'static str {
    match visibility {
        ProjectVisibility::Public => "Public",
        ProjectVisibility::Private => "Private",
    }
}

// -- Table output --

pub fn print_boot_table(summary: &BootSummary) {
    println!("{}", Table::new(build_field_rows(summary)));
    if !summary.notifications.is_empty() {
        println!("{}", Table::new(build_notification_rows(&summary.notifications)));
    }
}

/// Renders notifications raised while a command ran.
pub fn notifications_table(notifications: &[Notification]) -> String {
    Table::new(build_notification_rows(notifications)).to_string()
}

/// Notifications go to stderr so they never mix with JSON on stdout.
pub fn print_notifications(notifications: &[Notification]) {
    if !notifications.is_empty() {
        eprintln!("{}", notifications_table(notifications));
    }
}

pub fn print_projects_table(projects: &[Project]) {
    println!("{}", Table::new(build_project_rows(projects)));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
