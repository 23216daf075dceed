//! The application root handed to the rendering surface.

use std::collections::BTreeMap;
use std::sync::Arc;

use console_api::types::{DataSource, Database, Environment, Instance, Project};

use crate::bootstrap::SettleReport;
use crate::config::BuildMode;
use crate::directives::Directive;
use crate::error::ConsoleError;
use crate::helpers;
use crate::stores::ConsoleStores;

/// DOM anchor the console mounts on.
pub const MOUNT_ANCHOR: &str = "#app";

/// UI library components available to every template.
pub const COMPONENTS: [&str; 22] = [
    "BBAlert",
    "BBAttention",
    "BBAvatar",
    "BBButtonAdd",
    "BBButtonConfirm",
    "BBCheckbox",
    "BBContextMenu",
    "BBModal",
    "BBNotification",
    "BBOutline",
    "BBSelect",
    "BBStepBar",
    "BBStepTab",
    "BBSwitch",
    "BBTab",
    "BBTabPanel",
    "BBTable",
    "BBTableCell",
    "BBTableHeaderCell",
    "BBTableSearch",
    "BBTabFilter",
    "BBTextField",
];

/// A rendering surface that can display a constructed application.
pub trait MountTarget {
    fn mount(&self, anchor: &str, app: &App) -> Result<(), ConsoleError>;
}

/// Helpers every template can reach, passed explicitly to the root.
#[derive(Clone, Copy, Debug, Default)]
pub struct Globals {
    mode: BuildMode,
}

impl Globals {
    pub const NAMES: &'static [&'static str] = &[
        "humanize_ts",
        "is_dev",
        "is_release",
        "urlfy",
        "environment_name",
        "environment_slug",
        "project_name",
        "project_slug",
        "instance_name",
        "instance_slug",
        "database_slug",
        "data_source_slug",
    ];

    pub fn new(mode: BuildMode) -> Self {
        Self { mode }
    }

    pub fn is_dev(&self) -> bool {
        self.mode.is_dev()
    }

    pub fn is_release(&self) -> bool {
        self.mode.is_release()
    }

    pub fn humanize_ts(&self, ts: i64) -> String {
        helpers::humanize_ts(ts)
    }

    pub fn urlfy(&self, s: &str) -> String {
        helpers::urlfy(s)
    }

    pub fn environment_name(&self, environment: &Environment) -> String {
        helpers::environment_name(environment)
    }

    pub fn environment_slug(&self, environment: &Environment) -> String {
        helpers::environment_slug(environment)
    }

    pub fn project_name(&self, project: &Project) -> String {
        helpers::project_name(project)
    }

    pub fn project_slug(&self, project: &Project) -> String {
        helpers::project_slug(project)
    }

    pub fn instance_name(&self, instance: &Instance) -> String {
        helpers::instance_name(instance)
    }

    pub fn instance_slug(&self, instance: &Instance) -> String {
        helpers::instance_slug(instance)
    }

    pub fn database_slug(&self, database: &Database) -> String {
        helpers::database_slug(database)
    }

    pub fn data_source_slug(&self, data_source: &DataSource) -> String {
        helpers::data_source_slug(data_source)
    }
}

/// An application root under construction.
pub struct App {
    globals: Globals,
    stores: Option<ConsoleStores>,
    directives: BTreeMap<String, Arc<dyn Directive>>,
    components: Vec<String>,
}

impl App {
    pub fn new(globals: Globals) -> Self {
        Self {
            globals,
            stores: None,
            directives: BTreeMap::new(),
            components: Vec::new(),
        }
    }

    pub fn with_stores(mut self, stores: ConsoleStores) -> Self {
        self.stores = Some(stores);
        self
    }

    pub fn directive<D>(mut self, name: &str, directive: D) -> Self
    where
        D: Directive + 'static,
    {
        self.directives.insert(name.to_string(), Arc::new(directive));
        self
    }

    pub fn component(mut self, name: &str) -> Self {
        self.components.push(name.to_string());
        self
    }

    pub fn globals(&self) -> &Globals {
        &self.globals
    }

    pub fn stores(&self) -> Option<&ConsoleStores> {
        self.stores.as_ref()
    }

    pub fn directive_names(&self) -> Vec<&str> {
        self.directives.keys().map(String::as_str).collect()
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Runs a registered directive over `input`.
    pub fn render(&self, directive: &str, input: &str) -> Option<String> {
        self.directives.get(directive).map(|d| d.apply(input))
    }

    /// Mounts the root on `target`. Consumes the root, so it can only happen once.
    pub fn mount<T>(
        self,
        anchor: &str,
        target: &T,
        settle: SettleReport,
    ) -> Result<MountedApp, ConsoleError>
    where
        T: MountTarget + ?Sized,
    {
        target.mount(anchor, &self)?;
        tracing::info!(anchor, components = self.components.len(), "application mounted");
        Ok(MountedApp {
            anchor: anchor.to_string(),
            app: self,
            settle,
        })
    }
}

/// An application that has been mounted.
pub struct MountedApp {
    anchor: String,
    app: App,
    settle: SettleReport,
}

impl MountedApp {
    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Which startup fetches failed before the mount.
    pub fn settle_report(&self) -> &SettleReport {
        &self.settle
    }
}
