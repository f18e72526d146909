use crate::algorithm::{
    assembler::assemble_one, dedup::DedupRegistry, harmony::HarmonyOptimizer,
    palette_matcher::match_palettes, random::RandomSelector, vibe::VibeTable,
};
use crate::io::configuration::{
    ATTEMPTS_PER_TARGET, DEFAULT_DEDUP_CAPACITY, DEFAULT_HARMONY_ITERATIONS, MIN_ATTEMPT_CEILING,
};
use crate::wardrobe::{ClothingItem, OutfitCandidate, Palette, SlotPools, palette::curated_palettes};
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// Lifecycle of an orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    /// No run has started yet
    Idle,
    /// A run is in progress
    Generating,
    /// The last run completed and its result is authoritative
    Ready,
}

/// How long outfit keys are remembered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupScope {
    /// Every run starts with an empty registry
    #[default]
    PerRun,
    /// One registry is shared by successive runs, so regeneration avoids
    /// outfits shown recently
    Session,
}

/// Bounds and tuning for a generation run
#[derive(Clone, Copy, Debug)]
pub struct GenerationConfig {
    /// Random-derived candidates to stop at; defaults to the smallest required pool
    pub target: Option<usize>,
    /// Random attempts to stop at; defaults to `max(50, target * 20)`
    pub max_attempts: Option<usize>,
    /// Harmony iterations per random candidate
    pub harmony_iterations: usize,
    /// Configured registry capacity
    pub dedup_capacity: usize,
    /// Registry lifetime
    pub dedup_scope: DedupScope,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            target: None,
            max_attempts: None,
            harmony_iterations: DEFAULT_HARMONY_ITERATIONS,
            dedup_capacity: DEFAULT_DEDUP_CAPACITY,
            dedup_scope: DedupScope::PerRun,
        }
    }
}

impl GenerationConfig {
    /// Random-pass target for a catalog
    pub fn target_for(&self, pools: &SlotPools<'_>) -> usize {
        self.target.unwrap_or_else(|| pools.required_capacity())
    }

    /// Random-pass attempt ceiling for a target
    pub fn attempt_ceiling(&self, target: usize) -> usize {
        self.max_attempts
            .unwrap_or_else(|| default_attempt_ceiling(target))
    }
}

/// `max(50, target * 20)`
pub const fn default_attempt_ceiling(target: usize) -> usize {
    let scaled = target.saturating_mul(ATTEMPTS_PER_TARGET);
    if scaled > MIN_ATTEMPT_CEILING {
        scaled
    } else {
        MIN_ATTEMPT_CEILING
    }
}

/// Shareable flag requesting that a run stop between random attempts
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    /// Create an unset flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the current run to stop
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether a stop was requested
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Progress hooks for a run
pub trait GenerationObserver {
    /// Called once the palette pass is done
    fn on_palette_pass(&mut self, _accepted: usize) {}

    /// Called after every random attempt
    fn on_attempt(&mut self, _attempt: usize, _ceiling: usize, _accepted: usize) {}

    /// Called when the run completes
    fn on_finish(&mut self, _report: &GenerationReport) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {}

/// Statistics for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    /// Candidates kept from the palette pass
    pub palette_candidates: usize,
    /// Candidates kept from the random pass
    pub random_candidates: usize,
    /// Random-pass target
    pub target: usize,
    /// Random attempts made
    pub attempts: usize,
    /// Random attempts allowed
    pub attempt_ceiling: usize,
    /// Assemblies rejected as duplicates
    pub duplicates: usize,
    /// Whether the run stopped on request
    pub cancelled: bool,
}

/// Result of one run
#[derive(Debug, Clone)]
pub struct Generation<'a> {
    /// Palette candidates in table order, then random candidates in generation order
    pub candidates: Vec<OutfitCandidate<'a>>,
    /// Run statistics
    pub report: GenerationReport,
}

/// Sequences the palette and random passes under attempt and target bounds
pub struct GenerationOrchestrator {
    config: GenerationConfig,
    palettes: Vec<Palette>,
    state: GenerationState,
    session_registry: Option<DedupRegistry>,
    cancellation: CancellationFlag,
    runs: usize,
}

impl GenerationOrchestrator {
    /// Create an orchestrator over a palette table
    pub fn new(palettes: Vec<Palette>, config: GenerationConfig) -> Self {
        Self {
            config,
            palettes,
            state: GenerationState::Idle,
            session_registry: None,
            cancellation: CancellationFlag::new(),
            runs: 0,
        }
    }

    /// Create an orchestrator over the curated palette table
    pub fn with_curated_palettes(config: GenerationConfig) -> Self {
        Self::new(curated_palettes(), config)
    }

    /// Current lifecycle state
    pub const fn state(&self) -> GenerationState {
        self.state
    }

    /// Run configuration
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Palette table in use
    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// Completed runs so far
    pub const fn runs(&self) -> usize {
        self.runs
    }

    /// Handle for cancelling a run from another thread
    pub fn cancellation_flag(&self) -> CancellationFlag {
        self.cancellation.clone()
    }

    /// Generate (or regenerate) outfits from a catalog snapshot
    pub fn generate<'a, R: Rng>(
        &mut self,
        items: &'a [ClothingItem],
        random: &mut RandomSelector<R>,
    ) -> Generation<'a> {
        self.generate_with_observer(items, random, &mut NoopObserver)
    }

    /// Generate outfits while reporting progress
    ///
    /// Never fails: an empty catalog or an empty required slot yields an empty
    /// result.
    pub fn generate_with_observer<'a, R: Rng>(
        &mut self,
        items: &'a [ClothingItem],
        random: &mut RandomSelector<R>,
        observer: &mut dyn GenerationObserver,
    ) -> Generation<'a> {
        self.state = GenerationState::Generating;
        self.cancellation.reset();
        debug!(items = items.len(), run = self.runs + 1, "generation started");

        let mut run_registry = DedupRegistry::new(self.config.dedup_capacity);
        let registry = match self.config.dedup_scope {
            DedupScope::PerRun => &mut run_registry,
            DedupScope::Session => self
                .session_registry
                .get_or_insert_with(|| DedupRegistry::new(self.config.dedup_capacity)),
        };

        let generation = run_passes(
            &self.palettes,
            &self.config,
            registry,
            &self.cancellation,
            items,
            random,
            observer,
        );

        self.cancellation.reset();
        self.runs += 1;
        self.state = GenerationState::Ready;
        observer.on_finish(&generation.report);

        info!(
            palette = generation.report.palette_candidates,
            random = generation.report.random_candidates,
            attempts = generation.report.attempts,
            cancelled = generation.report.cancelled,
            "generation finished"
        );
        generation
    }
}

fn run_passes<'a, R: Rng>(
    palettes: &[Palette],
    config: &GenerationConfig,
    registry: &mut DedupRegistry,
    cancellation: &CancellationFlag,
    items: &'a [ClothingItem],
    random: &mut RandomSelector<R>,
    observer: &mut dyn GenerationObserver,
) -> Generation<'a> {
    let pools = SlotPools::from_items(items);
    let target = config.target_for(&pools);
    let attempt_ceiling = config.attempt_ceiling(target);
    let duplicates_before = registry.stats.duplicates;

    // A single run must never evict its own keys
    registry.reserve_capacity(palettes.len().saturating_add(target));

    let mut candidates = match_palettes(&pools, palettes, registry);
    let palette_candidates = candidates.len();
    observer.on_palette_pass(palette_candidates);

    let vibes = VibeTable::from_items(items);
    let harmony = HarmonyOptimizer::new(config.harmony_iterations);
    let mut random_candidates = 0;
    let mut attempts = 0;
    let mut cancelled = false;

    while random_candidates < target && attempts < attempt_ceiling {
        if cancellation.is_cancelled() {
            cancelled = true;
            break;
        }
        attempts += 1;

        let vibe = vibes.sample(random);
        if let Some(mut candidate) = assemble_one(&pools, vibe, random) {
            harmony.optimize(&mut candidate, &pools, random);
            if candidate.is_valid() && registry.add(candidate.dedup_key()) {
                candidates.push(candidate);
                random_candidates += 1;
            }
        }

        observer.on_attempt(attempts, attempt_ceiling, random_candidates);
    }

    debug!(
        random_target = target,
        attempts,
        attempt_ceiling,
        random_candidates,
        "random pass finished"
    );

    Generation {
        candidates,
        report: GenerationReport {
            palette_candidates,
            random_candidates,
            target,
            attempts,
            attempt_ceiling,
            duplicates: registry.stats.duplicates - duplicates_before,
            cancelled,
        },
    }
}
