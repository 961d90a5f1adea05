//! Crisp plugin API CLI binary.
//!
//! A command-line interface for the Crisp plugin endpoints.

use clap::Parser;
use crispapi::cli::{Cli, Command, RankAction};
use crispapi::output::PrettyPrint;
use crispapi::{
    check_connect_session_validity, delete_plugin_rank, list_connect_websites, rank_plugin,
    ApiResponse, CrispClient, CrispConfig, Get, PersonalPluginRank, PluginInformation,
    PluginStars, ResponseMeta,
};
use serde::Serialize;
use std::process::ExitCode;
use std::time::Duration;
use tabled::{Table, Tabled};
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let client = match build_client(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set CRISP_API_IDENTIFIER and CRISP_API_KEY environment variables");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build_client(cli: &Cli) -> crispapi::Result<CrispClient> {
    let mut config = CrispConfig::from_env()?;
    if let Some(tier) = cli.tier {
        config.tier = tier;
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    CrispClient::with_config(config)
}

async fn run(client: &CrispClient, cli: Cli) -> crispapi::Result<ExitCode> {
    match cli.command {
        Command::Session => return handle_session(client, cli.json).await,
        Command::Websites => handle_websites(client, cli.json).await?,
        Command::Plugin { plugin_id } => {
            let plugin = PluginInformation::get(client, plugin_id).await?;
            output_single(&plugin, cli.json)?;
        }
        Command::Stars { plugin_id } => {
            let stars = PluginStars::get(client, plugin_id).await?;
            output_single(&stars, cli.json)?;
        }
        Command::Rank { action } => handle_rank(client, action, cli.json).await?,
    }
    Ok(ExitCode::SUCCESS)
}

async fn handle_session(client: &CrispClient, json: bool) -> crispapi::Result<ExitCode> {
    // Any error, transport failures included, means the session is invalid
    let (valid, status) = match check_connect_session_validity(client).await {
        Ok(meta) => (true, Some(meta.status)),
        Err(e) => {
            tracing::debug!(error = %e, "session check failed");
            (false, e.status())
        }
    };

    if json {
        let report = serde_json::json!({
            "valid": valid,
            "status": status.map(|s| s.as_u16()),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if valid {
        println!("valid");
    } else {
        match status {
            Some(status) => println!("invalid ({status})"),
            None => println!("invalid (no response)"),
        }
    }

    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn handle_websites(client: &CrispClient, json: bool) -> crispapi::Result<()> {
    let websites = list_connect_websites(client)
        .await?
        .into_data()
        .unwrap_or_default();

    if json {
        println!("{}", serde_json::to_string_pretty(&websites)?);
    } else {
        let count = websites.len();
        let rows: Vec<WebsiteRow> = websites.into_iter().map(WebsiteRow::from).collect();
        println!("{}", Table::new(rows));
        println!("\n{count} connected websites");
    }
    Ok(())
}

async fn handle_rank(client: &CrispClient, action: RankAction, json: bool) -> crispapi::Result<()> {
    match action {
        RankAction::Get { plugin_id } => {
            let rank = PersonalPluginRank::get(client, plugin_id).await?;
            output_single(&rank, json)?;
        }
        RankAction::Set { plugin_id, rank } => {
            let meta = rank_plugin(client, &plugin_id, rank).await?;
            output_done(&meta, &format!("Ranked {plugin_id}: {rank}"), json)?;
        }
        RankAction::Delete { plugin_id } => {
            let meta = delete_plugin_rank(client, &plugin_id).await?;
            output_done(&meta, &format!("Deleted rank of {plugin_id}"), json)?;
        }
    }
    Ok(())
}

fn output_single<T: Serialize + PrettyPrint>(
    response: &ApiResponse<T>,
    json: bool,
) -> crispapi::Result<()> {
    match (&response.data, json) {
        (Some(item), true) => println!("{}", serde_json::to_string_pretty(item)?),
        (Some(item), false) => println!("{}", item.pretty_print()),
        (None, true) => println!("null"),
        (None, false) => println!("No data returned ({})", response.meta.status),
    }
    Ok(())
}

fn output_done(meta: &ResponseMeta, message: &str, json: bool) -> crispapi::Result<()> {
    if json {
        let report = serde_json::json!({ "status": meta.status.as_u16() });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{message}");
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct WebsiteRow {
    #[tabled(rename = "website id")]
    website_id: String,
}

impl From<String> for WebsiteRow {
    fn from(website_id: String) -> Self {
        Self { website_id }
    }
}
