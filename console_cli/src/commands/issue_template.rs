use anyhow::{anyhow, bail, Result};
use console_lib::issue_template::{template_for, TemplateContext};
use console_lib::types::IssueCreate;
use console_lib::{Client, ConsoleStores, Notification};

use crate::output::{print_json, print_notifications};

const GENERAL_ISSUE: &str = "bb.issue.general";

/// Builds the general issue from the current environments.
/// `None` means the environment request failed and an interceptor recovered it.
pub async fn load(
    client: &Client,
    stores: &ConsoleStores,
) -> Result<(Option<IssueCreate>, Vec<Notification>)> {
    let environments = client.get_environments().await?;
    let notifications = stores.notification.drain();
    let Some(mut environment_list) = environments else {
        return Ok((None, notifications));
    };
    environment_list.sort_by_key(|e| e.order);

    let template = template_for(GENERAL_ISSUE)
        .ok_or_else(|| anyhow!("no template for {}", GENERAL_ISSUE))?;
    let issue = template.build_issue(&TemplateContext { environment_list })?;
    Ok((Some(issue), notifications))
}

pub async fn run(client: &Client, stores: &ConsoleStores) -> Result<()> {
    let (issue, notifications) = load(client, stores).await?;
    print_notifications(&notifications);
    let Some(issue) = issue else {
        bail!("failed to load environments");
    };
    print_json(&issue);
    Ok(())
}
