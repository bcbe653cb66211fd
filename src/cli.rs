use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "hubscout", version, about = "Hugging Face Hub model scout")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Directory holding processed_models.json"
    )]
    pub output_dir: String,
    #[arg(
        long,
        global = true,
        help = "Maximum number of hub results to inspect"
    )]
    pub limit: Option<usize>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List convertible candidates from the hub, most downloaded first.
    Scan {
        /// Free-text model name search; omit to browse a whole category.
        query: Option<String>,
        #[arg(long, help = "Pipeline tag filter, e.g. fill-mask")]
        category: Option<String>,
    },
    /// Fetch one model's metadata and classify its architecture.
    Show { model_id: String },
    /// Classify a local config.json without touching the network.
    Classify { config_path: String },
    /// Record a conversion outcome in the ledger.
    Mark {
        model_id: String,
        #[arg(long, help = "Conversion stage, e.g. nlp/fill_mask")]
        application: String,
        #[arg(long, default_value_t = false)]
        failed: bool,
        #[arg(long, help = "Failure reason, kept alongside failed entries")]
        reason: Option<String>,
        #[arg(long, default_value_t = 0, help = "Converted artifact size in bytes")]
        size: u64,
        #[arg(long, help = "Model revision; looked up from the hub when omitted")]
        sha: Option<String>,
    },
    /// Print the processed-models ledger, or a single entry.
    Ledger { model_id: Option<String> },
}
