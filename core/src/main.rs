use std::process::ExitCode;

use clap::Parser;
use reqres_core::{config, runner, scenarios, ReqresClient, SuiteConfig, UreqTransport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Run the reqres contract scenarios and report pass/fail per scenario.
#[derive(Debug, Parser)]
#[command(name = "reqres-suite", version)]
struct Cli {
    /// Only run scenarios whose name contains this text.
    filter: Option<String>,
    /// Base URL of the API under test.
    #[arg(long, env = "REQRES_BASE_URL", default_value = config::DEFAULT_BASE_URL)]
    base_url: String,
    /// Value for the `x-api-key` header.
    #[arg(long, env = "REQRES_API_KEY")]
    api_key: Option<String>,
    /// Print the selected scenarios and their checks without running them.
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = match SuiteConfig::new(&cli.base_url) {
        Ok(config) => config.with_api_key(cli.api_key),
        Err(err) => {
            tracing::error!(error = %err, "refusing to start");
            return ExitCode::from(2);
        }
    };

    let client = ReqresClient::new(&config);
    let mut selected = match scenarios::all(&client) {
        Ok(all) => all,
        Err(err) => {
            tracing::error!(error = %err, "could not build scenarios");
            return ExitCode::from(2);
        }
    };
    if let Some(filter) = &cli.filter {
        selected.retain(|s| s.name.contains(filter.as_str()));
    }

    if cli.list {
        for scenario in &selected {
            println!("{} {} {}", scenario.name, scenario.request.method, scenario.request.url);
            for expect in &scenario.expectations {
                println!("    {expect}");
            }
        }
        return ExitCode::SUCCESS;
    }

    tracing::info!(base_url = client.base_url(), scenarios = selected.len(), "starting run");
    let report = runner::run(&UreqTransport::new(), &selected);
    println!("{report}");

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
