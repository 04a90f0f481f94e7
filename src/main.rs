use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotcli::{cli, config::CredentialStore, parse::SpotClient, types::Credentials, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Path to the keys file (appID, jsKey, clientKey)
    #[clap(long, global = true)]
    keys: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List all spots
    Spots,

    /// Show a single spot
    Spot(SpotOptions),

    /// Log in and list spots
    Login(UserOptions),

    /// Create an account and list spots
    Signup(UserOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SpotOptions {
    /// objectId of the spot
    pub object_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct UserOptions {
    #[clap(long)]
    pub username: String,

    #[clap(long)]
    pub password: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn load_credentials(keys: Option<PathBuf>) -> Credentials {
    let store = CredentialStore::new(keys.unwrap_or_else(CredentialStore::default_location));
    match store.load() {
        Ok(credentials) => credentials,
        Err(e) => {
            warning!(
                "Cannot load credentials, every API call will fail until this is fixed. Err: {}",
                e
            );
            Credentials::default()
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let client = SpotClient::new(load_credentials(cli.keys));

    match cli.command {
        Command::Spots => cli::list_spots(&client).await,
        Command::Spot(opt) => cli::show_spot(&client, &opt.object_id).await,
        Command::Login(opt) => {
            cli::login(&client, &opt.username, &opt.password).await;
            cli::list_spots(&client).await;
        }
        Command::Signup(opt) => {
            cli::sign_up(&client, &opt.username, &opt.password).await;
            cli::list_spots(&client).await;
        }
        Command::Completions(_) => {}
    }
}
