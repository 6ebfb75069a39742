//! CLI for the Zootopia page generator: one prompt, one lookup, one page.

mod prompt;

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use zootopia_core::config::{self, ZooConfig};
use zootopia_core::fetcher::Transport;
use zootopia_core::filter::unique_skin_types;
use zootopia_core::pipeline::{PagePipeline, PageReport};

pub use prompt::{prompt_animal_name, prompt_skin_selection};

/// Top-level CLI. Every flag is optional; with none, paths come from config.toml.
#[derive(Debug, Parser)]
#[command(name = "zootopia")]
#[command(about = "Zootopia: look up an animal and render it into an HTML page", long_about = None)]
#[command(version)]
pub struct Cli {
    /// HTML template containing the placeholder token.
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Where to write the generated page (overwritten).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Offer the skin-type filter after the lookup.
    #[arg(long)]
    pub skin_filter: bool,
}

impl Cli {
    /// Applies flag overrides on top of the loaded config.
    pub fn apply(&self, mut cfg: ZooConfig) -> ZooConfig {
        if let Some(t) = &self.template {
            cfg.template_path = t.clone();
        }
        if let Some(o) = &self.output {
            cfg.output_path = o.clone();
        }
        cfg.filter_by_skin_type |= self.skin_filter;
        cfg
    }
}

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    Written(PageReport),
    Quit,
}

pub fn run_from_args() -> Result<Outcome> {
    let cli = Cli::parse();
    let cfg = cli.apply(config::load_or_init()?);
    tracing::debug!("loaded config: {:?}", cfg);

    let pipeline = PagePipeline::from_config(&cfg);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&cfg, &pipeline, &mut stdin.lock(), &mut stdout.lock())
}

/// Prompt → lookup → (optional skin filter) → page. Fetch problems are
/// reported and rendered as "not found"; template/output failures are errors.
pub fn run<T, R, W>(cfg: &ZooConfig, pipeline: &PagePipeline<T>, input: &mut R, out: &mut W) -> Result<Outcome>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    let Some(name) = prompt_animal_name(input, out)? else {
        return Ok(Outcome::Quit);
    };

    let lookup = pipeline.lookup(&name);
    if let Some(err) = &lookup.fetch_error {
        match err.status() {
            Some(_) => writeln!(out, "Error: {}", err)?,
            None => writeln!(out, "Error: could not reach the animal service: {}", err)?,
        }
    }
    for (idx, err) in &lookup.skipped {
        writeln!(out, "Error parsing animal data (record {}): {}", idx, err)?;
    }

    let skin_types = unique_skin_types(&lookup.records);
    let report = if cfg.filter_by_skin_type && !skin_types.is_empty() {
        let Some(selection) = prompt_skin_selection(input, out, &skin_types)? else {
            return Ok(Outcome::Quit);
        };
        pipeline.write_filtered(&lookup, &selection)?
    } else {
        pipeline.write_results(&lookup)?
    };

    writeln!(
        out,
        "Website was successfully generated to the file {}.",
        report.path.display()
    )?;
    Ok(Outcome::Written(report))
}

#[cfg(test)]
mod tests;
