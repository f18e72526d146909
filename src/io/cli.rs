//! Command-line interface for generating outfits from a catalog file

use crate::algorithm::orchestrator::{
    DedupScope, Generation, GenerationConfig, GenerationOrchestrator, GenerationReport,
};
use crate::algorithm::random::RandomSelector;
use crate::io::catalog::{CredentialContext, ItemCatalog, JsonFileCatalog};
use crate::io::configuration::{
    API_BASE_ENV, DEFAULT_DEDUP_CAPACITY, DEFAULT_HARMONY_ITERATIONS, DEFAULT_SEED, Origin,
    TOKEN_ENV, resolve_api_base,
};
use crate::io::error::{EngineError, Result, WithPath, invalid_parameter};
use crate::io::progress::AttemptProgress;
use crate::io::share::{DirectorySharePublisher, SharePublisher, share_url};
use crate::wardrobe::palette::{curated_palettes, load_palettes};
use crate::wardrobe::{ClothingItem, DedupKey, OutfitCandidate, Palette};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Output rendering
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One block per outfit
    Text,
    /// A single JSON document
    Json,
}

#[derive(Parser)]
#[command(name = "outfitgen")]
#[command(
    author,
    version,
    about = "Generate outfits from a tagged wardrobe catalog"
)]
/// Command-line arguments for the outfit generator
pub struct Cli {
    /// JSON catalog of tagged items
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// JSON palette table replacing the curated one
    #[arg(short, long, value_name = "FILE")]
    pub palettes: Option<PathBuf>,

    /// Random-derived outfits to stop at (default: smallest required slot)
    #[arg(short, long)]
    pub target: Option<usize>,

    /// Random attempts to stop at (default: max(50, target * 20))
    #[arg(short = 'a', long)]
    pub max_attempts: Option<usize>,

    /// Harmony refinement iterations per random outfit
    #[arg(long, default_value_t = DEFAULT_HARMONY_ITERATIONS)]
    pub harmony_iterations: usize,

    /// Output rendering
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Publish the N-th generated outfit (1-based)
    #[arg(long, value_name = "N")]
    pub share: Option<usize>,

    /// Directory receiving share records
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub share_dir: PathBuf,

    /// Bearer token passed to collaborators
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// Only use catalog items belonging to this owner
    #[arg(long)]
    pub owner: Option<String>,

    /// Backend base URL used for share links
    #[arg(long, env = API_BASE_ENV)]
    pub api_base: Option<String>,

    /// Origin the links will be opened from, e.g. `http://localhost:3000`
    #[arg(long)]
    pub origin: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log engine decisions at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Credentials threaded into catalog and publisher calls
    pub fn credentials(&self) -> CredentialContext {
        let mut credentials = CredentialContext::anonymous();
        if let Some(token) = &self.token {
            credentials = credentials.with_token(token.clone());
        }
        if let Some(owner) = &self.owner {
            credentials = credentials.with_owner(owner.clone());
        }
        credentials
    }

    /// Generation bounds from the arguments
    pub const fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            target: self.target,
            max_attempts: self.max_attempts,
            harmony_iterations: self.harmony_iterations,
            dedup_capacity: DEFAULT_DEDUP_CAPACITY,
            dedup_scope: DedupScope::PerRun,
        }
    }

    /// Backend base URL for share links
    ///
    /// # Errors
    ///
    /// Returns an error if `--origin` is not a `scheme://host` URL
    pub fn api_base(&self) -> Result<String> {
        let origin = match self.origin.as_deref() {
            Some(raw) => Some(Origin::parse(raw).ok_or_else(|| {
                invalid_parameter("origin", &raw, &"expected scheme://host[:port]")
            })?),
            None => None,
        };
        Ok(resolve_api_base(self.api_base.as_deref(), origin.as_ref()))
    }

    /// Palette table from `--palettes`, or the curated one
    ///
    /// # Errors
    ///
    /// Returns an error if the palette file cannot be loaded
    pub fn palettes(&self) -> Result<Vec<Palette>> {
        self.palettes
            .as_deref()
            .map_or_else(|| Ok(curated_palettes()), load_palettes)
    }
}

#[derive(Serialize)]
struct RenderedOutfit<'c, 'a> {
    number: usize,
    key: DedupKey,
    #[serde(flatten)]
    candidate: &'c OutfitCandidate<'a>,
}

#[derive(Serialize)]
struct RenderedRun<'c, 'a> {
    outfits: Vec<RenderedOutfit<'c, 'a>>,
    report: GenerationReport,
}

/// Loads the catalog, runs generation, and renders or shares the result
pub struct OutfitRunner {
    cli: Cli,
}

impl OutfitRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run with output going to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if loading, sharing, or writing output fails
    pub fn process(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.process_into(&mut out)
    }

    /// Run with output going to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the palette table or catalog cannot be loaded, the
    /// share request is rejected, or `out` cannot be written
    pub fn process_into(&self, out: &mut dyn Write) -> Result<()> {
        let palettes = self.cli.palettes()?;
        let api_base = self.cli.api_base()?;
        let credentials = self.cli.credentials();

        let catalog = JsonFileCatalog::new(&self.cli.catalog);
        let items = catalog.fetch_items(&credentials)?;

        let mut orchestrator = GenerationOrchestrator::new(palettes, self.cli.generation_config());
        let mut random = RandomSelector::new(self.cli.seed);
        let mut progress = if self.cli.should_show_progress() {
            AttemptProgress::new()
        } else {
            AttemptProgress::hidden()
        };
        let generation = orchestrator.generate_with_observer(&items, &mut random, &mut progress);

        match self.cli.format {
            OutputFormat::Text => write_text(out, &generation),
            OutputFormat::Json => write_json(out, &generation),
        }?;

        if let Some(number) = self.cli.share {
            let candidate = number
                .checked_sub(1)
                .and_then(|index| generation.candidates.get(index))
                .ok_or_else(|| {
                    invalid_parameter(
                        "share",
                        &number,
                        &format!("only {} outfits were generated", generation.candidates.len()),
                    )
                })?;

            let mut publisher = DirectorySharePublisher::new(&self.cli.share_dir);
            let share_id = publisher.publish(&credentials, &candidate.item_ids())?;
            writeln!(
                out,
                "Shared outfit {number} as {share_id}: {}",
                share_url(&api_base, &share_id)
            )
            .with_path(Path::new("<output>"), "write share link")?;
        }

        Ok(())
    }
}

fn describe_item(item: &ClothingItem) -> String {
    let vibes = item.vibes.iter().cloned().collect::<Vec<_>>().join(", ");
    format!(
        "  {:<12} {}  (id {}) {vibes}",
        item.slot.as_str(),
        item.color,
        item.id
    )
}

fn write_text(out: &mut dyn Write, generation: &Generation<'_>) -> Result<()> {
    let output = Path::new("<output>");

    if generation.candidates.is_empty() {
        writeln!(out, "No outfits could be assembled from this catalog")
            .with_path(output, "write outfits")?;
        return Ok(());
    }

    for (index, candidate) in generation.candidates.iter().enumerate() {
        let vibe = candidate
            .vibe
            .as_deref()
            .map(|vibe| format!(" vibe {vibe}"))
            .unwrap_or_default();
        writeln!(
            out,
            "Outfit {} [{}]{vibe} key {}",
            index + 1,
            candidate.strategy,
            candidate.dedup_key()
        )
        .with_path(output, "write outfits")?;

        for item in &candidate.items {
            writeln!(out, "{}", describe_item(item)).with_path(output, "write outfits")?;
        }
    }

    let report = &generation.report;
    writeln!(
        out,
        "{} palette + {} random outfits in {}/{} attempts",
        report.palette_candidates, report.random_candidates, report.attempts, report.attempt_ceiling
    )
    .with_path(output, "write outfits")?;

    Ok(())
}

/// Writer failures stay I/O errors; anything else failed to render
fn output_error(source: serde_json::Error) -> EngineError {
    if source.is_io() {
        EngineError::FileSystem {
            path: PathBuf::from("<output>"),
            operation: "write outfits",
            source: source.into(),
        }
    } else {
        EngineError::Serialization {
            target: PathBuf::from("<output>"),
            source,
        }
    }
}

fn write_json(out: &mut dyn Write, generation: &Generation<'_>) -> Result<()> {
    let rendered = RenderedRun {
        outfits: generation
            .candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| RenderedOutfit {
                number: index + 1,
                key: candidate.dedup_key(),
                candidate,
            })
            .collect(),
        report: generation.report,
    };

    serde_json::to_writer_pretty(&mut *out, &rendered).map_err(output_error)?;
    writeln!(out).with_path(Path::new("<output>"), "write outfits")?;
    Ok(())
}
