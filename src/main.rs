use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use mixupcli::{cli, config::Config, error};

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
    /// Path to the configuration file
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with the Mixcloud API
    Auth,

    /// Watch the upload folder and upload new shows
    Watch,

    /// Upload a single file
    Upload(UploadOptions),

    /// List the show metadata catalog
    Shows(ShowsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct UploadOptions {
    /// The MP3 file to upload
    file: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowsOptions {
    /// Search for shows
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
        command => {
            let config = match Config::load(cli.config).await {
                Ok(config) => config,
                Err(e) => error!("Cannot load configuration. Err: {}", e),
            };

            match command {
                Command::Auth => cli::auth(&config).await,
                Command::Watch => cli::watch(&config).await,
                Command::Upload(opt) => cli::upload(&config, opt.file).await,
                Command::Shows(opt) => cli::shows(&config, opt.search).await,
                Command::Completions(_) => unreachable!(),
            }
        }
    }
}
