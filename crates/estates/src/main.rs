use std::io;

use anyhow::Context;
use clap::Parser;
use estates_core::{AreaKind, EstatesConsole, SessionEnd, Settings};

/// Text-menu console for gym and swimming pool occupancy and lighting.
#[derive(Parser, Debug)]
#[command(name = "estates")]
#[command(about = "Estates manager console")]
struct Args {
    /// Facility name shown in the startup banner
    #[arg(long)]
    facility_name: Option<String>,

    /// Area active at startup (gym or pool)
    #[arg(long, value_parser = parse_area, default_value = "gym")]
    area: AreaKind,

    /// Omit emoji from console messages
    #[arg(long)]
    plain: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_area(s: &str) -> Result<AreaKind, String> {
    match s.to_lowercase().as_str() {
        "gym" | "g" => Ok(AreaKind::Gym),
        "pool" | "p" | "swimming-pool" => Ok(AreaKind::SwimmingPool),
        _ => Err(format!("Invalid area: {} (expected gym or pool)", s)),
    }
}

impl Args {
    fn settings(&self) -> Settings {
        let mut settings = Settings {
            initial_area: self.area,
            plain_output: self.plain,
            ..Settings::default()
        };
        if let Some(name) = &self.facility_name {
            settings.facility_name = name.clone();
        }
        settings
    }

    fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the menu on stdout
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    let settings = args.settings();
    settings.validate().context("Invalid console settings")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = EstatesConsole::new(settings, stdin.lock(), stdout.lock());

    match console.run().context("Console session failed")? {
        SessionEnd::Quit => log::debug!("Session ended by quit command"),
        SessionEnd::InputClosed => log::info!("Session ended at end of input"),
    }
    Ok(())
}
