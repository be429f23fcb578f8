use clap::Parser;
use rec_client::utils::{logger, validation::Validate};
use rec_client::{
    CliConfig, Command, ConfigProvider, LogObserver, RecommendationClient, RecommendationObserver,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting rec-client");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let command = config.command.clone();
    let client = RecommendationClient::new(LogObserver, config);

    match run(&client, &command).await {
        Ok(output) => {
            tracing::info!("✅ Request completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!("❌ Request failed: {} (Severity: {:?})", e, e.severity());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                rec_client::utils::error::ErrorSeverity::Low => 0,
                rec_client::utils::error::ErrorSeverity::Medium => 2,
                rec_client::utils::error::ErrorSeverity::High => 1,
                rec_client::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run<O: RecommendationObserver, C: ConfigProvider>(
    client: &RecommendationClient<O, C>,
    command: &Command,
) -> rec_client::Result<String> {
    match command {
        Command::Recommend {
            user_id,
            method,
            count,
        } => {
            let items = client.fetch_recommendations(user_id, method, *count).await?;
            tracing::info!("Received {} recommendations for user {}", items.len(), user_id);
            Ok(serde_json::to_string_pretty(&items)?)
        }
        Command::Stats => {
            let stats = client.fetch_stats().await?;
            Ok(serde_json::to_string_pretty(&stats)?)
        }
    }
}
