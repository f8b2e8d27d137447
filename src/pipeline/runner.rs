//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed set of pipeline stages.
//! Calling [`Pipeline::run`] executes them in order, threading artifacts
//! between stages and notifying an optional [`PipelineObserver`] at each
//! boundary.
//!
//! # Static dispatch
//!
//! `Pipeline` is generic over all stage types, so the compiler monomorphizes
//! each stage combination into a unique concrete type. Zero-sized default
//! stages (e.g., [`NgramGenerator`], [`SuppressingRanker`]) add zero bytes
//! and zero runtime cost.
//!
//! # Factory methods
//!
//! Use [`PhraseFreqPipeline::standard()`] to build the default pipeline
//! without spelling out the generics manually.

use crate::nlp::tokenizer::SentenceTokenizer;
use crate::pipeline::artifacts::FormattedResult;
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_CANDIDATES, STAGE_COUNT,
    STAGE_FORMAT, STAGE_RANK, STAGE_TOKENIZE,
};
use crate::pipeline::traits::{
    CandidateGenerator, Counter, FrequencyCounter, NgramGenerator, Ranker, ResultFormatter,
    StandardResultFormatter, SuppressingRanker, Tokenizer,
};
use crate::types::PhraseConfig;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline — statically-composed stage container
// ============================================================================

/// A pipeline composed of concrete stage implementations.
///
/// All type parameters have trait bounds enforced at the `impl` level, so the
/// struct itself is unconditionally constructible (useful for builders).
///
/// # Type parameters
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `Tok` | [`Tokenizer`] | [`SentenceTokenizer`] |
/// | `Gen` | [`CandidateGenerator`] | [`NgramGenerator`] |
/// | `Cnt` | [`Counter`] | [`FrequencyCounter`] |
/// | `Rnk` | [`Ranker`] | [`SuppressingRanker`] |
/// | `Fmt` | [`ResultFormatter`] | [`StandardResultFormatter`] |
#[derive(Debug, Clone)]
pub struct Pipeline<Tok, Gen, Cnt, Rnk, Fmt> {
    pub tokenizer: Tok,
    pub generator: Gen,
    pub counter: Cnt,
    pub ranker: Rnk,
    pub formatter: Fmt,
}

/// Type alias for the default phrase-frequency pipeline.
pub type PhraseFreqPipeline =
    Pipeline<SentenceTokenizer, NgramGenerator, FrequencyCounter, SuppressingRanker, StandardResultFormatter>;

impl PhraseFreqPipeline {
    /// Build the standard phrase-frequency pipeline.
    ///
    /// All stages use their defaults:
    /// - Sentence splitting on `. ! ? ;` with lowercased, punctuation-stripped
    ///   tokens
    /// - Per-sentence n-gram candidate enumeration
    /// - Hash-map frequency accumulation
    /// - Proper-prefix suppression plus count-descending ranking
    /// - Standard `#rank:  (count) phrase` formatting
    pub fn standard() -> Self {
        Pipeline {
            tokenizer: SentenceTokenizer::new(),
            generator: NgramGenerator,
            counter: FrequencyCounter,
            ranker: SuppressingRanker,
            formatter: StandardResultFormatter,
        }
    }
}

// ============================================================================
// Pipeline::run — execute stages in order
// ============================================================================

impl<Tok, Gen, Cnt, Rnk, Fmt> Pipeline<Tok, Gen, Cnt, Rnk, Fmt>
where
    Tok: Tokenizer,
    Gen: CandidateGenerator,
    Cnt: Counter,
    Rnk: Ranker,
    Fmt: ResultFormatter,
{
    /// Execute the pipeline, producing a [`FormattedResult`].
    ///
    /// Stages run in order:
    /// 1. Tokenize (text → sentences)
    /// 2. Generate candidates (sentences → bounded n-grams)
    /// 3. Count (candidates → frequency table)
    /// 4. Rank (suppress proper prefixes, sort by count, truncate to top-K)
    /// 5. Format result
    ///
    /// The whole run is single-threaded and synchronous; every artifact is
    /// derived from `text` alone and dropped when the result is returned.
    /// The `observer` receives callbacks at each stage boundary. Pass
    /// [`NoopObserver`](crate::pipeline::observer::NoopObserver) for
    /// zero-overhead execution.
    ///
    /// Assumes `cfg` has already been validated (see
    /// [`super::validation::ValidationEngine`]); the stages do not re-check
    /// the bounds.
    pub fn run(
        &self,
        text: &str,
        cfg: &PhraseConfig,
        observer: &mut impl PipelineObserver,
    ) -> FormattedResult {
        // Stage 1: Tokenize
        trace_stage!(STAGE_TOKENIZE);
        observer.on_stage_start(STAGE_TOKENIZE);
        let clock = StageClock::start();
        let sentences = self.tokenizer.tokenize(text, cfg);
        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(sentences.len())
            .tokens(sentences.total_tokens())
            .build();
        observer.on_stage_end(STAGE_TOKENIZE, &report);
        observer.on_sentences(&sentences);

        // Stage 2: Generate candidates
        trace_stage!(STAGE_CANDIDATES);
        observer.on_stage_start(STAGE_CANDIDATES);
        let clock = StageClock::start();
        let candidates = self.generator.generate(&sentences, cfg);
        let report = StageReportBuilder::new(clock.elapsed())
            .candidates(candidates.len())
            .build();
        observer.on_stage_end(STAGE_CANDIDATES, &report);
        observer.on_candidates(&candidates);

        // Stage 3: Count
        trace_stage!(STAGE_COUNT);
        observer.on_stage_start(STAGE_COUNT);
        let clock = StageClock::start();
        let table = self.counter.count(candidates, cfg);
        let report = StageReportBuilder::new(clock.elapsed())
            .distinct(table.len())
            .build();
        observer.on_stage_end(STAGE_COUNT, &report);
        observer.on_table(&table);

        // Stage 4: Rank
        trace_stage!(STAGE_RANK);
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let ranked = self.ranker.rank(&table, cfg);
        let report = StageReportBuilder::new(clock.elapsed())
            .suppressed(table.len().saturating_sub(ranked.len()))
            .emitted(ranked.len())
            .build();
        observer.on_stage_end(STAGE_RANK, &report);
        observer.on_ranked(&ranked);

        // Stage 5: Format result
        trace_stage!(STAGE_FORMAT);
        observer.on_stage_start(STAGE_FORMAT);
        let clock = StageClock::start();
        let result = self.formatter.format(&ranked, cfg);
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_FORMAT, &report);

        result
    }
}

// ============================================================================
// PipelineBuilder — fluent construction with custom stages
// ============================================================================

/// Fluent builder for constructing a [`Pipeline`] with custom stages.
///
/// Starts from the default stage set and allows overriding individual
/// stages.
///
/// ```
/// use phrasefreq::pipeline::runner::PipelineBuilder;
/// use phrasefreq::nlp::tokenizer::SentenceTokenizer;
///
/// let pipeline = PipelineBuilder::new()
///     .tokenizer(SentenceTokenizer::new().with_terminators(&['.']))
///     .build();
/// ```
pub struct PipelineBuilder<
    Tok = SentenceTokenizer,
    Gen = NgramGenerator,
    Cnt = FrequencyCounter,
    Rnk = SuppressingRanker,
    Fmt = StandardResultFormatter,
> {
    tokenizer: Tok,
    generator: Gen,
    counter: Cnt,
    ranker: Rnk,
    formatter: Fmt,
}

impl PipelineBuilder {
    /// Start building from the default stages.
    pub fn new() -> Self {
        PipelineBuilder {
            tokenizer: SentenceTokenizer::new(),
            generator: NgramGenerator,
            counter: FrequencyCounter,
            ranker: SuppressingRanker,
            formatter: StandardResultFormatter,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tok, Gen, Cnt, Rnk, Fmt> PipelineBuilder<Tok, Gen, Cnt, Rnk, Fmt> {
    /// Override the tokenizer stage.
    pub fn tokenizer<T: Tokenizer>(self, t: T) -> PipelineBuilder<T, Gen, Cnt, Rnk, Fmt> {
        PipelineBuilder {
            tokenizer: t,
            generator: self.generator,
            counter: self.counter,
            ranker: self.ranker,
            formatter: self.formatter,
        }
    }

    /// Override the candidate generator stage.
    pub fn generator<G: CandidateGenerator>(self, g: G) -> PipelineBuilder<Tok, G, Cnt, Rnk, Fmt> {
        PipelineBuilder {
            tokenizer: self.tokenizer,
            generator: g,
            counter: self.counter,
            ranker: self.ranker,
            formatter: self.formatter,
        }
    }

    /// Override the counter stage.
    pub fn counter<C: Counter>(self, c: C) -> PipelineBuilder<Tok, Gen, C, Rnk, Fmt> {
        PipelineBuilder {
            tokenizer: self.tokenizer,
            generator: self.generator,
            counter: c,
            ranker: self.ranker,
            formatter: self.formatter,
        }
    }

    /// Override the ranker stage.
    pub fn ranker<R: Ranker>(self, r: R) -> PipelineBuilder<Tok, Gen, Cnt, R, Fmt> {
        PipelineBuilder {
            tokenizer: self.tokenizer,
            generator: self.generator,
            counter: self.counter,
            ranker: r,
            formatter: self.formatter,
        }
    }

    /// Override the result formatter stage.
    pub fn formatter<F: ResultFormatter>(self, f: F) -> PipelineBuilder<Tok, Gen, Cnt, Rnk, F> {
        PipelineBuilder {
            tokenizer: self.tokenizer,
            generator: self.generator,
            counter: self.counter,
            ranker: self.ranker,
            formatter: f,
        }
    }

    /// Consume the builder and produce a [`Pipeline`].
    pub fn build(self) -> Pipeline<Tok, Gen, Cnt, Rnk, Fmt> {
        Pipeline {
            tokenizer: self.tokenizer,
            generator: self.generator,
            counter: self.counter,
            ranker: self.ranker,
            formatter: self.formatter,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
