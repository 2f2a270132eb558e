//! Bridge Bidding Tutor terminal client.

use bidding_client::view::{self, TITLE};
use bidding_client::{execute, Args, ClientConfig, Command, GameStore, HttpApi, Outcome};
use bidding_core::Palette;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they stay out of the rendered screen
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from(Args::parse());
    let palette = if config.color {
        Palette::ansi()
    } else {
        Palette::plain()
    };

    let api = HttpApi::new(config.api_url.clone());
    info!("Connecting to {}", api.base_url());
    let mut store = GameStore::new(api, config.training_mode, config.bidding_system.clone());

    println!("{}", view::render(&store, palette));
    store.load_game_state().await;
    println!("{}", view::render(&store, palette));
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print_prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match execute(&mut store, command, palette).await {
            Outcome::Render => println!("{}", view::render(&store, palette)),
            Outcome::Message(text) => println!("{}", text),
            Outcome::Quit => break,
        }
    }

    info!("{} client exiting", TITLE);
    Ok(())
}

fn print_prompt() -> std::io::Result<()> {
    use std::io::Write;

    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()
}
