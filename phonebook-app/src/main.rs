use anyhow::Result;
use clap::Parser;
use std::io::Write;
use tracing_subscriber::prelude::*;

mod config;
mod controller;
mod prompt;
mod store;
mod views;

use controller::Phonebook;
use prompt::TerminalPrompt;
use store::HttpContactStore;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base address of the remote contact store; overrides the config file
    #[arg(long)]
    store_url: Option<String>,

    #[arg(long)]
    log_file_path: Option<String>,
}

const HELP: &str = "\
Commands:
  filter <text>   set the filter (empty to clear)
  name <text>     set the pending name
  number <text>   set the pending number
  add             submit the form (add or update)
  delete <id>     delete the contact with the given id
  list            redraw the page
  help            show this help
  quit            exit";

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = args.log_file_path {
        let log_path = std::path::Path::new(&log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("phonebook.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // Load config
    let (config, config_path) = config::AppConfig::load().expect("Failed to load config");
    tracing::info!("Config loaded from {:?}", config_path);

    let base_url = args.store_url.unwrap_or_else(|| config.store_base_url());
    tracing::info!("Using contact store at {}", base_url);

    let store = HttpContactStore::new(&base_url);
    let phonebook = Phonebook::new(store, TerminalPrompt);

    // The collection is fetched once; everything after this is incremental.
    phonebook.load().await?;

    let stdin = std::io::stdin();
    loop {
        println!("\n{}", views::render_page(&phonebook.view_props().await));
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        let (command, argument) = match line.split_once(' ') {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        match command {
            "" | "list" => {}
            "filter" => phonebook.set_filter(argument).await,
            "name" => phonebook.set_pending_name(argument).await,
            "number" => phonebook.set_pending_number(argument).await,
            "add" => phonebook.submit().await?,
            "delete" => phonebook.delete(argument).await?,
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            other => println!("Unknown command: {other} (try 'help')"),
        }
    }

    Ok(())
}
