use clap::Parser;
use mold_match::domain::model::VesselObservation;
use mold_match::utils::{logger, validation::Validate};
use mold_match::{
    CliConfig, ConfigProvider, CsvCatalog, MatchError, MatchScorer, MoldCatalog, RestCatalog,
    SuggestionEngine, TomlConfig,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting mold-match CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&cli).await {
        match &e {
            MatchError::NoMoldsAvailable => {
                tracing::error!("No molds available in the catalog");
                eprintln!("❌ No molds available — add active molds to the catalog first");
            }
            _ => {
                tracing::error!("Mold suggestion failed: {}", e);
                eprintln!("❌ {}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: &CliConfig) -> mold_match::Result<()> {
    let observation = cli.observation();

    if let Some(csv_path) = &cli.csv {
        let catalog = CsvCatalog::new(csv_path);
        return suggest_and_print(catalog, MatchScorer::default(), &observation, cli.json).await;
    }

    if let Some(config_path) = &cli.config {
        let config = TomlConfig::from_file(config_path)?;
        config.validate()?;

        let timeout = Duration::from_secs(config.catalog.timeout_seconds.unwrap_or(10));
        let catalog = RestCatalog::with_timeout(
            config.catalog_endpoint(),
            config.api_key().map(str::to_string),
            timeout,
        )?;
        let scorer = MatchScorer::new(config.scoring_weights());
        return suggest_and_print(catalog, scorer, &observation, cli.json).await;
    }

    let catalog = RestCatalog::new(cli.endpoint.as_str(), cli.api_key.clone());
    suggest_and_print(catalog, MatchScorer::default(), &observation, cli.json).await
}

async fn suggest_and_print<C: MoldCatalog>(
    catalog: C,
    scorer: MatchScorer,
    observation: &VesselObservation,
    as_json: bool,
) -> mold_match::Result<()> {
    let engine = SuggestionEngine::with_scorer(catalog, scorer);
    let result = engine.suggest(observation).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "✅ Suggested mold: {} (confidence {:.0}%)",
            result.suggested_mold.id, result.confidence
        );
        println!(
            "   Considered {} active molds for a {} vessel",
            result.all_candidates.len(),
            observation.shape
        );
    }

    Ok(())
}
