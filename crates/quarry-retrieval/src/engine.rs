//! AnswerEngine: implements IAnswerPipeline, orchestrates the full pipeline.
//!
//! cache lookup → hybrid search (concurrent sources → RRF fusion) →
//! optional re-rank → context assembly → generation → cache write,
//! recording per-stage timings.

use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, info};

use quarry_core::config::QuarryConfig;
use quarry_core::constants::{NO_INFORMATION_ANSWER, SYSTEM_INSTRUCTION};
use quarry_core::errors::{QuarryResult, RerankError};
use quarry_core::models::{AnswerReport, StageTimings};
use quarry_core::traits::{
    IAnswerGenerator, IAnswerPipeline, ICandidateSource, IRelevanceScorer,
};

use crate::cache::AnswerCache;
use crate::context;
use crate::ranking::reranker;
use crate::search::HybridSearcher;

/// The main answer engine. Composes the pipeline stages in fixed order.
///
/// All collaborators are injected by reference; the engine holds no
/// backend state of its own beyond the answer cache. One instance may
/// serve concurrent queries sharing that cache.
pub struct AnswerEngine<'a> {
    sources: Vec<&'a dyn ICandidateSource>,
    generator: &'a dyn IAnswerGenerator,
    scorer: Option<&'a dyn IRelevanceScorer>,
    cache: AnswerCache,
    config: QuarryConfig,
}

impl<'a> AnswerEngine<'a> {
    pub fn new(
        sources: Vec<&'a dyn ICandidateSource>,
        generator: &'a dyn IAnswerGenerator,
        config: QuarryConfig,
    ) -> Self {
        let cache = AnswerCache::from_config(&config.cache);
        Self {
            sources,
            generator,
            scorer: None,
            cache,
            config,
        }
    }

    /// Wire a pairwise relevance scorer for the re-ranking stage.
    ///
    /// Required when `rerank.enabled` is set; re-ranking without a scorer
    /// is a configuration error, not a silent fallback.
    pub fn with_scorer(mut self, scorer: &'a dyn IRelevanceScorer) -> Self {
        self.scorer = Some(scorer);
        self
    }

    /// The engine's answer cache (for observability: hit rate, entry count).
    pub fn cache(&self) -> &AnswerCache {
        &self.cache
    }

    async fn run(&self, query: &str) -> QuarryResult<AnswerReport> {
        let started = Instant::now();

        // Step 1: cache lookup. A hit skips every later stage.
        if let Some(answer) = self.cache.get(query) {
            info!(query_len = query.len(), "cache hit, skipping pipeline");
            return Ok(AnswerReport {
                answer,
                cache_hit: true,
                timings: StageTimings::default(),
            });
        }

        // A blank query cannot match anything; skip the sources entirely.
        if query.trim().is_empty() {
            return Ok(no_information_report(started));
        }

        // Step 2: hybrid retrieval — concurrent sources, then RRF fusion.
        let retrieval_started = Instant::now();
        let searcher = HybridSearcher::new(&self.sources, self.config.retrieval.rrf_k);
        let fused = searcher
            .search(query, self.config.retrieval.retrieval_top_k)
            .await?;
        let retrieval_ms = elapsed_ms(retrieval_started);

        info!(candidates = fused.len(), retrieval_ms, "hybrid search complete");

        // Nothing to ground an answer in — never generate from empty context.
        if fused.is_empty() {
            let mut report = no_information_report(started);
            report.timings.retrieval_ms = retrieval_ms;
            return Ok(report);
        }

        // Step 3: re-rank when enabled, else keep the fused order.
        let top_n = self.config.rerank.top_n;
        let rerank_started = Instant::now();
        let selected = if self.config.rerank.enabled {
            let scorer = self.scorer.ok_or(RerankError::ScorerMissing)?;
            reranker::rerank(scorer, query, fused, top_n).await?
        } else {
            reranker::truncate_to_top_n(fused, top_n)
        };
        let rerank_ms = elapsed_ms(rerank_started);

        debug!(kept = selected.len(), top_n, "candidate selection complete");

        // Step 4: context assembly + generation. Never retried here.
        let context_text = context::assemble(&selected);
        let generation_started = Instant::now();
        let answer = self
            .generator
            .generate(SYSTEM_INSTRUCTION, &context_text, query)
            .await?;
        let generation_ms = elapsed_ms(generation_started);

        // Step 5: cache write, strictly after a successful generation.
        self.cache.put(query, &answer);

        let timings = StageTimings {
            retrieval_ms,
            rerank_ms,
            generation_ms,
            total_ms: elapsed_ms(started),
        };
        info!(
            retrieval_ms = timings.retrieval_ms,
            rerank_ms = timings.rerank_ms,
            generation_ms = timings.generation_ms,
            total_ms = timings.total_ms,
            "query answered"
        );

        Ok(AnswerReport {
            answer,
            cache_hit: false,
            timings,
        })
    }
}

#[async_trait]
impl IAnswerPipeline for AnswerEngine<'_> {
    async fn answer(&self, query: &str) -> QuarryResult<AnswerReport> {
        self.run(query).await
    }
}

fn elapsed_ms(since: Instant) -> u64 {
    since.elapsed().as_millis() as u64
}

fn no_information_report(started: Instant) -> AnswerReport {
    AnswerReport {
        answer: NO_INFORMATION_ANSWER.to_string(),
        cache_hit: false,
        timings: StageTimings {
            total_ms: elapsed_ms(started),
            ..StageTimings::default()
        },
    }
}
