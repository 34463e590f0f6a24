use clap::Parser;
use std::io::{self, BufRead, Write};
use stockpulse::render::report;
use stockpulse::utils::{logger, validation::Validate};
use stockpulse::{
    AnalysisEngine, CliConfig, HostedSentimentModel, MentionPipeline, Secrets, StockIndex,
    YouTubeClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting stockpulse");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.finalize() {
        tracing::error!("❌ Configuration failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // The platform key must be present before any fetch can happen.
    let secrets = match Secrets::from_env() {
        Ok(secrets) => secrets,
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 Set YOUTUBE_API_KEY in the environment or a .env file");
            std::process::exit(1);
        }
    };

    // Process-wide state, built once and passed by reference into each query.
    let index = StockIndex::with_default_table()?;
    let platform = YouTubeClient::new(
        secrets.youtube_api_key.clone(),
        config.youtube_api_base.clone(),
    )?;
    let model = HostedSentimentModel::new(
        config.inference_api_base.clone(),
        config.sentiment_model.clone(),
        secrets.hf_api_token.clone(),
    )?;
    let pipeline = MentionPipeline::new(platform, model, config);
    let engine = AnalysisEngine::new(pipeline);

    println!("Financial News Sentiment Analysis");
    println!("Covered companies: {}", index.company_names().join(", "));
    println!();

    let stdin = io::stdin();
    loop {
        print!("Enter a stock symbol or company name (blank to quit): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            break;
        }

        // An unresolved input short-circuits here: no network or model call.
        let Some(stock) = index.resolve(input) else {
            println!("{}", report::no_data_message(input));
            continue;
        };

        match engine.run(stock).await {
            Ok(mentions) if mentions.is_empty() => {
                println!(
                    "{}",
                    report::no_mentions_message(&stock.symbol, &stock.company_name)
                );
            }
            Ok(mentions) => {
                println!("{}", report::mention_table(&mentions));
                println!();
                println!("{}", report::label_chart(&mentions));
            }
            Err(e) => {
                tracing::error!("❌ Analysis failed: {}", e);
                eprintln!("❌ {}", e);
            }
        }
    }

    Ok(())
}
