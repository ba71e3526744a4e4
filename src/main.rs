use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use medibuddy::cli::Commands;
use medibuddy::connector::api::{http, Container, ContainerConfig, Router};

#[derive(Parser)]
#[command(name = "medibuddy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Serve { addr, mock } => {
            let config = ContainerConfig {
                mock_generation: mock,
                ..ContainerConfig::from_env()
            };
            if !mock && config.api_key.is_none() {
                info!("No GEMINI_API_KEY set; advice requests will be rejected");
            }

            let container = Arc::new(Container::new(config));
            let app = http::app(container);

            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!("Advice service listening on {addr}");
            axum::serve(listener, app).await?;
            Ok(())
        }
        command => {
            let router = Router::new();
            let output = router.route(command).await?;
            println!("{output}");
            Ok(())
        }
    }
}
