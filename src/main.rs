use clap::Parser;
use trade_gate::cli::{Cli, Commands};
use trade_gate::config::Config;
use trade_gate::risk::RiskLimits;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load_or_default(&cli.config)?;

    // Initialize telemetry
    trade_gate::telemetry::init_telemetry(&config.telemetry)?;
    if !std::path::Path::new(&cli.config).exists() {
        tracing::warn!(path = %cli.config, "Config file not found, using defaults");
    }

    match cli.command {
        Commands::Replay(args) => {
            args.execute(&config).await?;
        }
        Commands::Check(args) => {
            args.execute(&config).await?;
        }
        Commands::Paper(args) => {
            tracing::info!("Starting paper trading mode");
            args.execute(&config).await?;
        }
        Commands::Size(args) => {
            args.execute()?;
        }
        Commands::Config => {
            let limits = RiskLimits::from_config(&config.risk)?;
            println!("Current configuration:");
            println!("  Max daily loss: {}", limits.max_daily_loss());
            println!(
                "  Max position: {} of {} (notional limit {})",
                limits.max_position_fraction(),
                limits.reference_account_size(),
                limits.notional_limit()
            );
            if config.market.supported_symbols.is_empty() {
                println!("  Symbols: any");
            } else {
                println!("  Symbols: {}", config.market.supported_symbols.join(", "));
            }
            println!(
                "  Logging: {} ({:?})",
                config.telemetry.log_level, config.telemetry.log_format
            );
            match config.telemetry.metrics_port {
                Some(port) => println!("  Metrics: port {}", port),
                None => println!("  Metrics: disabled"),
            }
        }
    }

    Ok(())
}
