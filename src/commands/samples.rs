//! `graphwalk samples` - list the built-in sample graphs

use serde::Serialize;

use crate::commands::dispatch::CommandContext;
use graphwalk_core::error::Result;
use graphwalk_core::format::{escape_record_value, OutputFormat};
use graphwalk_core::graph::samples::{Sample, SAMPLES};

#[derive(Debug, Serialize)]
struct SampleEntry {
    name: &'static str,
    description: &'static str,
    source: &'static str,
    weighted: bool,
    vertices: usize,
}

impl From<&Sample> for SampleEntry {
    fn from(sample: &Sample) -> Self {
        let spec = sample.spec();
        Self {
            name: sample.name,
            description: sample.description,
            source: sample.source,
            weighted: spec.is_weighted(),
            vertices: spec.len(),
        }
    }
}

/// Execute the samples command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let entries: Vec<SampleEntry> = SAMPLES.iter().map(SampleEntry::from).collect();

    match ctx.format {
        OutputFormat::Human => {
            let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
            for entry in &entries {
                println!(
                    "{:<width$}  {} (source {})",
                    entry.name,
                    entry.description,
                    entry.source,
                    width = width
                );
            }
            if !ctx.cli.quiet {
                println!();
                println!("Run e.g. `graphwalk dijkstra --sample clrs-dijkstra`.");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Records => {
            println!("H graphwalk=1 records=1 mode=samples count={}", entries.len());
            for entry in &entries {
                println!(
                    "S {} source={} weighted={} vertices={} description={}",
                    entry.name,
                    escape_record_value(entry.source),
                    entry.weighted,
                    entry.vertices,
                    escape_record_value(entry.description)
                );
            }
        }
    }

    Ok(())
}
