// Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nutrimatch")]
#[command(about = "Nutrimatch - content-based recipe recommendations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend recipes for a nutrition target
    Recommend {
        /// Nine nutrition values: calories, fat, saturated fat,
        /// cholesterol, sodium, carbohydrates, fiber, sugar, protein
        #[arg(long, value_delimiter = ',', num_args = 9)]
        nutrition: Vec<f64>,

        /// Required ingredients, separated by ";"
        #[arg(short, long)]
        ingredients: Option<String>,

        /// Number of recommendations
        #[arg(short, long)]
        neighbors: Option<usize>,

        /// Include search distances in the output
        #[arg(long)]
        distances: bool,

        /// Dataset path (overrides DATASET_PATH)
        #[arg(long, env = "DATASET_PATH")]
        dataset: Option<PathBuf>,
    },

    /// Show catalog statistics
    Stats {
        /// Dataset path (overrides DATASET_PATH)
        #[arg(long, env = "DATASET_PATH")]
        dataset: Option<PathBuf>,
    },

    /// Validate a dataset file
    Validate {
        /// Dataset path to validate
        path: PathBuf,
    },
}
