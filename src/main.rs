use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use recipe_synth::analysis::analyze_nutrition;
use recipe_synth::cli::{parse_args, Command};
use recipe_synth::config::{EngineConfig, LogFormat};
use recipe_synth::recipe::Recipe;
use recipe_synth::request::RecipeRequest;
use recipe_synth::engine::BatchEntry;
use recipe_synth::RecipeEngine;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tokio::fs;
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &EngineConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {} file '{}'", what, path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} JSON from '{}'", what, path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", rendered);
    Ok(())
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = parse_args();
    let config = EngineConfig::from_env()?
        .with_catalog_csv(cli_args.catalog.clone())
        .with_seed(cli_args.command.seed());
    init_tracing(&config);

    let catalog = config.load_catalog()?;
    tracing::debug!(entries = catalog.len(), "catalog ready");
    let engine = RecipeEngine::with_catalog(catalog);

    match cli_args.command {
        Command::Generate { request, .. } => {
            let request: RecipeRequest = read_json(&request, "request").await?;
            let mut rng = rng_for(config.seed);
            let recipe = engine
                .generate(&request, &mut rng)
                .context("Recipe generation failed")?;
            print_json(&recipe)?;
        }
        Command::Scale { recipe, servings } => {
            let recipe: Recipe = read_json(&recipe, "recipe").await?;
            let scaled = engine
                .scale(&recipe, servings)
                .with_context(|| format!("Failed to scale recipe '{}'", recipe.id))?;
            print_json(&scaled)?;
        }
        Command::Substitute { ingredient, budget, dietary } => {
            let suggestions = engine.suggest_substitutions(&ingredient, &dietary, budget);
            if suggestions.is_empty() {
                tracing::info!(ingredient = %ingredient, "no substitutions found");
            }
            print_json(&suggestions)?;
        }
        Command::Analyze { recipe } => {
            let recipe: Recipe = read_json(&recipe, "recipe").await?;
            print_json(&analyze_nutrition(&recipe))?;
        }
        Command::Batch { requests, .. } => {
            let requests: Vec<RecipeRequest> = read_json(&requests, "batch request").await?;
            let seed = config.seed.unwrap_or_default();
            let entries: Vec<BatchEntry> = engine
                .generate_batch(&requests, seed)
                .into_iter()
                .enumerate()
                .map(|(i, result)| BatchEntry::from_result(i, result))
                .collect();
            for entry in &entries {
                if let Some(error) = &entry.error {
                    tracing::warn!(index = entry.index, error = %error, "request failed");
                }
            }
            let generated = entries.iter().filter(|e| e.recipe.is_some()).count();
            tracing::info!(requested = requests.len(), generated, "batch complete");
            print_json(&entries)?;
        }
    }

    Ok(())
}
