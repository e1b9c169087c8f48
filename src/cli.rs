use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Constraint-driven recipe synthesis and rescaling", long_about = None)]
pub struct Cli {
    /// Ingredient catalog CSV replacing the built-in catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a recipe from a JSON request file
    Generate {
        #[arg(short, long)]
        request: PathBuf,
        /// RNG seed for a reproducible recipe
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Rescale a JSON recipe file to a new serving count
    Scale {
        #[arg(short, long)]
        recipe: PathBuf,
        #[arg(short = 'n', long)]
        servings: u32,
    },
    /// Suggest cheaper or diet-compatible substitutes for an ingredient
    Substitute {
        /// Catalog identifier, e.g. "paneer" or "basmati_rice"
        #[arg(short, long)]
        ingredient: String,
        #[arg(short, long)]
        budget: f64,
        #[arg(short, long = "dietary")]
        dietary: Vec<String>,
    },
    /// Print the nutrition analysis of a JSON recipe file
    Analyze {
        #[arg(short, long)]
        recipe: PathBuf,
    },
    /// Generate recipes for a JSON array of requests in parallel
    Batch {
        #[arg(short, long)]
        requests: PathBuf,
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

impl Command {
    /// The `--seed` given to a generating subcommand, if any.
    pub fn seed(&self) -> Option<u64> {
        match self {
            Command::Generate { seed, .. } | Command::Batch { seed, .. } => *seed,
            Command::Scale { .. } | Command::Substitute { .. } | Command::Analyze { .. } => None,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
