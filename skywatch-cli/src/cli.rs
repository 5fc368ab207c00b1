use anyhow::Context;
use chrono::{Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use skywatch_core::{Config, LunarState, lore};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skywatch", version, about = "Daily weather & moon webhook reporter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch today's report and post it to the configured webhook.
    Send,

    /// Fetch today's report and print it, without posting anywhere.
    Preview,

    /// Print the lunar state and lore note for a date.
    Moon {
        /// Date as YYYY-MM-DD; if absent, means "today".
        #[arg(long)]
        date: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Send => {
                let config = Config::from_env();
                let outcome =
                    skywatch_core::run(&config, Utc::now(), Local::now().date_naive()).await?;
                println!("{outcome}");
            }
            Command::Preview => {
                let config = Config::from_env();
                let description =
                    skywatch_core::preview(&config, Local::now().date_naive()).await?;
                println!("{description}");
            }
            Command::Moon { date } => {
                let date = parse_date(date.as_deref())?;
                let moon = LunarState::for_date(date);

                println!(
                    "{} {} ({}% lit)",
                    moon.phase.icon(),
                    moon.phase.label(),
                    moon.illumination
                );
                println!("{}", lore::werewolf_note(moon.phase));
            }
        }

        Ok(())
    }
}

fn parse_date(raw: Option<&str>) -> anyhow::Result<NaiveDate> {
    match raw {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{raw}', expected YYYY-MM-DD")),
        None => Ok(Local::now().date_naive()),
    }
}
