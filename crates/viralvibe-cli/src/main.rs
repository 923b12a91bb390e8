use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::generate::GenerateArgs;
use commands::history::HistoryAction;

#[derive(Parser)]
#[command(name = "viralvibe")]
#[command(about = "ViralVibe - 커뮤니티 맞춤 홍보글 생성기", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate community-tailored promotional posts
    Generate(GenerateArgs),
    /// List the available target communities
    Communities,
    /// Manage the saved request history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(args).await,
        Commands::Communities => commands::communities::run(),
        Commands::History { action } => commands::history::run(action).await,
    };

    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
