pub mod boot;
pub mod issue_template;
pub mod projects;
