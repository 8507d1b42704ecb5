#![forbid(unsafe_code)]
//! sls-cloudwatch Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use sls_cloudwatch::commands::{
    execute_list, execute_register, execute_release, execute_retention,
};
use sls_cloudwatch::config::DEFAULT_DESCRIPTOR;
use sls_cloudwatch::report::ConsoleSink;
use sls_cloudwatch::{CloudWatchSession, CommandOutcome, ConfigOverrides, ProjectConfig};

#[derive(Parser)]
#[command(name = "sls-cloudwatch")]
#[command(about = "Manage AWS CloudWatch LogGroups of a serverless project")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project descriptor path
    #[arg(short, long, global = true, default_value = DEFAULT_DESCRIPTOR)]
    config: PathBuf,

    /// Deployment stage (overrides provider.stage)
    #[arg(short, long, global = true, env = "SLS_STAGE")]
    stage: Option<String>,

    /// Deployment region (overrides provider.region)
    #[arg(short, long, global = true, env = "AWS_REGION")]
    region: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage AWS CloudWatch LogGroups for centralized logging
    Cloudwatch {
        #[command(subcommand)]
        cmd: CloudwatchCommands,
    },
}

#[derive(Subcommand)]
enum CloudwatchCommands {
    /// Lists AWS CloudWatch LogGroups for this project
    List,

    /// (Re-)Register CloudWatch subscription filters
    Register,

    /// Release CloudWatch subscription filters
    Release,

    /// Set log retention time
    Retention,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sls_cloudwatch={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let overrides = ConfigOverrides {
        stage: cli.stage,
        region: cli.region,
    };

    if !cli.config.exists() {
        eprintln!(
            "{} No project descriptor found at {}",
            style("✗").red(),
            cli.config.display()
        );
        eprintln!("  Run from the project root or pass --config <PATH>");
        std::process::exit(1);
    }

    let config = ProjectConfig::load(&cli.config, &overrides)?;
    tracing::debug!(
        service = %config.service_name,
        stage = %config.stage,
        region = %config.region,
        "Resolved project configuration"
    );

    let session = CloudWatchSession::aws(config);

    let outcome = match cli.command {
        Commands::Cloudwatch { cmd } => match cmd {
            CloudwatchCommands::List => execute_list(&session, &mut ConsoleSink).await?,
            CloudwatchCommands::Register => execute_register(&session).await?,
            CloudwatchCommands::Release => execute_release(&session).await?,
            CloudwatchCommands::Retention => execute_retention(&session).await?,
        },
    };

    if let CommandOutcome::NotImplemented(name) = outcome {
        eprintln!(
            "{} 'cloudwatch {}' is not implemented yet; nothing was changed",
            style("!").yellow(),
            name
        );
    }

    Ok(())
}
