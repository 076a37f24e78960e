//! Tinkoff acquiring command-line client
//!
//! Creates payments through `Init` and shows request tokens for debugging.

mod config;
mod request;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use config::{ConfigLoader, CredentialOverrides, LoadedConfig};
use request::{PaymentArgs, build_init_request};
use time::OffsetDateTime;
use tinkoff_sdk::client::{CallError, Client};
use tinkoff_sdk::objects::TokenValues;
use tinkoff_sdk::token::generate_token;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Tinkoff acquiring API client
#[derive(Parser, Debug)]
#[command(name = "tinkoff")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "./tinkoff.toml")]
    config: PathBuf,

    /// Override the terminal key from the config file
    #[arg(long, env = "TINKOFF_TERMINAL_KEY")]
    terminal_key: Option<String>,

    /// Override the terminal password from the config file
    #[arg(long, env = "TINKOFF_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a payment and print its payment page URL
    Init(PaymentArgs),
    /// Print the token input and token of a payment without sending it
    Token(PaymentArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let loader = ConfigLoader::new(
        &cli.config,
        CredentialOverrides {
            terminal_key: cli.terminal_key,
            password: cli.password,
        },
    );
    let loaded = loader.load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;
    tracing::debug!("Configuration loaded from {:?}", cli.config);

    match cli.command {
        Command::Init(args) => run_init(&loaded, &args).await,
        Command::Token(args) => {
            print_token(&loaded, &args);
            Ok(())
        }
    }
}

async fn run_init(loaded: &LoadedConfig, args: &PaymentArgs) -> anyhow::Result<()> {
    let client = Client::from_config(&loaded.terminal);
    let request = build_init_request(args, &loaded.defaults, OffsetDateTime::now_utc());

    match client.init(&request).await {
        Ok(response) => {
            tracing::info!(payment_id = %response.payment_id, "Payment created");
            println!("payment id:  {}", response.payment_id);
            println!("status:      {}", response.status);
            println!("payment url: {}", response.payment_url.unwrap_or_default());
            Ok(())
        }
        Err(CallError::Rejected(rejected)) => {
            for cause in &rejected.causes {
                eprintln!("error: {cause}");
            }
            eprintln!("{}", serde_json::to_string_pretty(&rejected.response)?);
            Err(CallError::Rejected(rejected).into())
        }
        Err(err) => Err(err.into()),
    }
}

fn print_token(loaded: &LoadedConfig, args: &PaymentArgs) {
    let request = build_init_request(args, &loaded.defaults, OffsetDateTime::now_utc());
    let values = request.values_for_token();

    for (key, value) in &values {
        println!("{key:<16} {value}");
    }
    let token = generate_token(
        values,
        &loaded.terminal.terminal_key,
        &loaded.terminal.password,
    );
    println!("{:<16} {}", "Token", token);
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
