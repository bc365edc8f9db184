use anyhow::{Context, Result};
use dawndoor_panel::{AppConfig, Panel, PanelCommand};
use env_logger::{Builder, Env, Target};
use log::{error, info};
use std::{env, io::Write};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("application error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    initialize();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = PanelCommand::parse(&args)?;

    let config = AppConfig::load().context("failed to load configuration")?;
    info!("talking to door controller at {}", config.device.url);

    let mut panel = Panel::new(&config).context("failed to create panel")?;
    panel.run(command).await?;

    println!("{}", panel.screen());

    Ok(())
}

fn initialize() {
    log_panics::init();

    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    builder.format(|f, record| match record.level() {
        log::Level::Error => {
            eprintln!("{}", record.args());
            Ok(())
        }
        _ => {
            writeln!(f, "{}", record.args())
        }
    });

    builder.target(Target::Stdout).init();

    info!("dawndoor-panel version: {}", env!("CARGO_PKG_VERSION"));
}
