use anyhow::Result;
use console_lib::{Bootstrap, Client, ConsoleConfig, ConsoleStores, Globals};

use crate::output::{print_boot_table, print_json, BootSummary, OutputFormat, TerminalTarget};

pub async fn run(
    config: &ConsoleConfig,
    client: &Client,
    stores: &ConsoleStores,
    format: &OutputFormat,
) -> Result<()> {
    let mounted = Bootstrap::new(stores.fetcher(client), Globals::new(config.mode))
        .with_stores(stores.clone())
        .initialize(&TerminalTarget)
        .await?;

    let summary = BootSummary::collect(&mounted, stores);
    match format {
        OutputFormat::Table => print_boot_table(&summary),
        OutputFormat::Json => print_json(&summary),
    }
    Ok(())
}
