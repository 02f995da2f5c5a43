pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod matching;
pub mod output;
pub mod rate_limiter;
pub mod rating;
pub mod services;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use log::info;
use std::path::Path;

use crate::api::UtrClient;
use crate::cli::{Cli, Command};
use crate::config::settings::AppConfig;
use crate::config::{Credentials, load_roster};
use crate::services::{ReportService, ResolutionService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_report(roster: Option<&Path>) -> Result<()> {
    let config = AppConfig::new();
    let teams = load_roster(roster)?;
    let credentials = Credentials::from_env()?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let client = logged_in_client(&config, &credentials).await?;
        let mut service = ReportService::new(client, config.area.clone());

        for team in &teams {
            let report = service.build_team_report(team).await;
            output::print_team_report(&report);
        }

        let client = service.into_directory();
        info!("Done, {} requests sent", client.request_count());
        Ok(())
    })
}

pub fn handle_resolve(name: &str) -> Result<()> {
    let config = AppConfig::new();
    let credentials = Credentials::from_env()?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let client = logged_in_client(&config, &credentials).await?;
        let mut service = ResolutionService::new(client, config.area.clone());
        let report = service.explain(name).await?;
        output::print_lines(&output::render_resolution(&report));
        Ok(())
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let bin_name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, bin_name, &mut std::io::stdout());
    Ok(())
}

async fn logged_in_client(config: &AppConfig, credentials: &Credentials) -> Result<UtrClient> {
    let mut client = UtrClient::new(&config.api)?;
    client
        .login(credentials)
        .await
        .context("Unable to proceed without a valid token")?;
    Ok(client)
}
