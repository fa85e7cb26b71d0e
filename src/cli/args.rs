use std::path::PathBuf;

use clap::Args;

/// Where the graph comes from and where the walk starts
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Built-in sample graph (see `graphwalk samples`)
    #[arg(long, conflicts_with = "graph")]
    pub sample: Option<String>,

    /// Adjacency file (.json, .toml, .yaml or .yml)
    #[arg(long, short)]
    pub graph: Option<PathBuf>,

    /// Source vertex key (defaults to the sample's suggested source)
    #[arg(long, short)]
    pub source: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DijkstraArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Fail on negative edge weights instead of computing unspecified estimates
    #[arg(long)]
    pub reject_negative_weights: bool,
}
