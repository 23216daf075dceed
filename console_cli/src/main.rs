mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console_lib::{connect, ConsoleConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "console")]
#[command(about = "Boot and inspect the database console against its backend")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run startup and show the mounted application
    Boot,
    /// List projects
    Projects,
    /// Print the general issue template for the current environments
    IssueTemplate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("console=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let config = ConsoleConfig::from_env()?;
    let (client, stores) = connect(&config)?;

    match &cli.command {
        Commands::Boot => commands::boot::run(&config, &client, &stores, &format).await?,
        Commands::Projects => commands::projects::run(&client, &stores, &format).await?,
        Commands::IssueTemplate => commands::issue_template::run(&client, &stores).await?,
    }

    Ok(())
}
