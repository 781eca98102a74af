//! `derbydesk` - race-day check-in CLI
//!
//! This binary provides the command-line interface for checking scouts in,
//! viewing the roster, and inspecting race-day configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;

use derbydesk::checkin::CheckinForm;
use derbydesk::cli::{CheckinCommand, Cli, Command, ConfigCommand, RaceCommand};
use derbydesk::store::{RosterStore, SqliteRoster};
use derbydesk::{init_logging, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Checkin(cmd) => handle_checkin(&config, cmd).await,
        Command::Roster(cmd) => handle_roster(&config, cmd.json).await,
        Command::NextNumber => handle_next_number(&config).await,
        Command::Status(cmd) => handle_status(&config, cmd.json).await,
        Command::Race(cmd) => {
            handle_race(&cmd);
            Ok(())
        }
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

/// Open the configured roster database.
fn open_store(config: &Config) -> derbydesk::Result<SqliteRoster> {
    Ok(SqliteRoster::open(config.database_path())?.with_race_defaults(config.race.clone()))
}

async fn handle_checkin(config: &Config, cmd: CheckinCommand) -> anyhow::Result<()> {
    let store = open_store(config)?;

    let mut form = CheckinForm::new();
    form.initialize(&store).await;
    if let Some(message) = form.error.take() {
        anyhow::bail!(message);
    }

    form.name = cmd.name;
    form.den = cmd.den.into();
    if let Some(number) = cmd.car_number {
        form.car_number = number;
    }
    form.car_weight = cmd.car_weight;

    form.submit(&store).await;

    if let Some(message) = &form.error {
        anyhow::bail!("{message}");
    }

    let entry = form
        .roster
        .first()
        .context("check-in succeeded but produced no entry")?;
    println!(
        "Checked in: #{} {} ({}) {:.2} oz",
        entry.car_number,
        entry.name,
        entry.den,
        entry.car_weight
    );
    println!("Next car number: {}", form.car_number);
    Ok(())
}

async fn handle_roster(config: &Config, json: bool) -> anyhow::Result<()> {
    let store = open_store(config)?;
    store.initialize().await?;
    let entries = store.list_checked_in().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Checked-In Scouts ({})", entries.len());
    println!("---------------------");
    if entries.is_empty() {
        println!("No scouts checked in yet");
    } else {
        for entry in &entries {
            println!(
                "#{:<4} {:<24} {:<16} {:>5.2} oz",
                entry.car_number,
                entry.name,
                entry.den.to_string(),
                entry.car_weight
            );
        }
    }
    Ok(())
}

async fn handle_next_number(config: &Config) -> anyhow::Result<()> {
    let store = open_store(config)?;
    store.initialize().await?;
    println!("{}", store.next_car_number().await?);
    Ok(())
}

async fn handle_status(config: &Config, json: bool) -> anyhow::Result<()> {
    let store = open_store(config)?;
    store.initialize().await?;
    let count = store.count().await?;
    let race = store.race_config().await?;

    if json {
        let status = serde_json::json!({
            "database_path": config.database_path(),
            "checked_in": count,
            "race": race,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("derbydesk status");
        println!("----------------");
        println!("Database:        {}", config.database_path().display());
        println!("Checked in:      {count}");
        println!();
        println!("[Race]");
        println!("  Lanes:            {}", race.num_lanes);
        println!("  Heats per scout:  {}", race.heats_per_scout);
        println!("  Scoring:          {}", race.scoring_method);
        println!(
            "  Timer port:       {}",
            race.timer_port.as_deref().unwrap_or("(none)")
        );
    }
    Ok(())
}

fn handle_race(cmd: &RaceCommand) {
    match cmd {
        RaceCommand::Start => {
            println!("Starting race day...");
            println!("[Race day mode not yet implemented]");
        }
    }
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:    {}", config.database_path().display());
                println!();
                println!("[Race]");
                println!("  Lanes:            {}", config.race.num_lanes);
                println!("  Heats per scout:  {}", config.race.heats_per_scout);
                println!("  Scoring:          {}", config.race.scoring_method);
                println!(
                    "  Timer port:       {}",
                    config.race.timer_port.as_deref().unwrap_or("(none)")
                );
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
