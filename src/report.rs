//! One-shot document analysis
//!
//! [`analyze`] runs every post-processing stage over a parsed document and
//! collects the results into an owned, serialisable [`DocumentReport`].
//! Token references are flattened to indices so reports can cross thread and
//! language boundaries.

use crate::document::Document;
use crate::errors::Result;
use crate::export::{dep_frequencies, pos_frequencies, pos_transitions};
use crate::export::{CategoryCount, TransitionHistogram};
use crate::negation::{NegationDetector, NegationMatch};
use crate::phrase::bunsetu_attachments;
use crate::select::{select_group, select_meaningful, select_relation_group, DepGroup, PosGroup};
use crate::types::{AnalysisConfig, DepRel, PosTag, Token};
use crate::walk::{chain_indices, AncestorWalker};
use rayon::prelude::*;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for an analysis stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("analysis_stage", stage = $name).entered();
    };
}

pub const STAGE_SELECT: &str = "select";
pub const STAGE_NEGATION: &str = "negation";
pub const STAGE_WALK: &str = "walk";
pub const STAGE_ATTACH: &str = "attach";
pub const STAGE_FREQUENCY: &str = "frequency";

// ============================================================================
// Report types
// ============================================================================

/// A dependency edge as token indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Relation {
    pub dependent: usize,
    pub head: usize,
    pub dep: DepRel,
}

impl Relation {
    fn from_pair((dependent, head): (&Token, &Token)) -> Self {
        Self {
            dependent: dependent.index,
            head: head.index,
            dep: dependent.dep,
        }
    }
}

/// Token indices selected by one POS group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSelection {
    pub group: PosGroup,
    pub tokens: Vec<usize>,
}

/// Ancestor chain as indices, closest ancestor first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainReport {
    /// Token the chain belongs to (the span root for entities and chunks)
    pub token: usize,
    pub ancestors: Vec<usize>,
}

/// Ancestor chain of a labelled span
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanChainReport {
    pub start_token: usize,
    pub end_token: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub root: usize,
    pub ancestors: Vec<usize>,
}

/// A token attaching into a later bunsetu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttachmentReport {
    pub dependent: usize,
    pub chunk_start: usize,
    pub chunk_end: usize,
}

/// Everything the analysis stages produce for one document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentReport {
    pub token_count: usize,
    pub sentence_count: usize,
    pub is_negative: bool,
    pub negation: Option<NegationMatch>,
    pub roots: Vec<Relation>,
    pub meaningful: Vec<usize>,
    pub groups: Vec<GroupSelection>,
    pub max_depth: usize,
    pub token_chains: Vec<ChainReport>,
    /// Complete chains up to the root; only filled when configured
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub full_chains: Vec<ChainReport>,
    pub entity_chains: Vec<SpanChainReport>,
    pub noun_chunk_chains: Vec<SpanChainReport>,
    pub attachments: Vec<AttachmentReport>,
    pub pos_frequencies: Vec<CategoryCount<PosTag>>,
    pub dep_frequencies: Vec<CategoryCount<DepRel>>,
    pub pos_transitions: TransitionHistogram,
}

impl DocumentReport {
    /// Serialize the report as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// ============================================================================
// Analysis
// ============================================================================

/// Run every analysis stage over `doc`.
///
/// Fails only when the config is invalid or when full chains are requested
/// and some token never reaches a root.
pub fn analyze(doc: &Document, config: &AnalysisConfig) -> Result<DocumentReport> {
    config.validate()?;

    let (roots, meaningful, groups) = {
        trace_stage!(STAGE_SELECT);
        let roots: Vec<Relation> = select_relation_group(doc, DepGroup::Root)
            .into_iter()
            .map(Relation::from_pair)
            .collect();
        let meaningful: Vec<usize> = select_meaningful(doc).iter().map(|t| t.index).collect();
        let groups: Vec<GroupSelection> = PosGroup::ALL
            .iter()
            .map(|&group| GroupSelection {
                group,
                tokens: select_group(doc, group).iter().map(|t| t.index).collect(),
            })
            .collect();
        (roots, meaningful, groups)
    };

    let negation = {
        trace_stage!(STAGE_NEGATION);
        NegationDetector::new().first_match(doc)
    };

    let (token_chains, full_chains, entity_chains, noun_chunk_chains) = {
        trace_stage!(STAGE_WALK);
        let walker = AncestorWalker::with_max_depth(config.max_depth);
        let token_chains = walker
            .token_chains(doc)
            .iter()
            .map(|c| ChainReport {
                token: c.token.index,
                ancestors: chain_indices(&c.ancestors),
            })
            .collect();
        let full_chains = if config.include_full_chains {
            AncestorWalker::full_token_chains(doc)?
                .iter()
                .map(|c| ChainReport {
                    token: c.token.index,
                    ancestors: chain_indices(&c.ancestors),
                })
                .collect()
        } else {
            Vec::new()
        };
        let entity_chains = walker
            .entity_chains(doc)
            .iter()
            .map(|c| SpanChainReport {
                start_token: c.entity.start_token,
                end_token: c.entity.end_token,
                label: Some(c.entity.label.clone()),
                root: c.root.index,
                ancestors: chain_indices(&c.ancestors),
            })
            .collect();
        let noun_chunk_chains = walker
            .noun_chunk_chains(doc)
            .iter()
            .map(|c| SpanChainReport {
                start_token: c.chunk.start_token,
                end_token: c.chunk.end_token,
                label: None,
                root: c.root.index,
                ancestors: chain_indices(&c.ancestors),
            })
            .collect();
        (token_chains, full_chains, entity_chains, noun_chunk_chains)
    };

    let attachments = {
        trace_stage!(STAGE_ATTACH);
        bunsetu_attachments(doc)
            .iter()
            .map(|a| AttachmentReport {
                dependent: a.dependent.index,
                chunk_start: a.chunk.start_token,
                chunk_end: a.chunk.end_token,
            })
            .collect()
    };

    trace_stage!(STAGE_FREQUENCY);
    Ok(DocumentReport {
        token_count: doc.len(),
        sentence_count: doc.sentences().len(),
        is_negative: negation.is_some(),
        negation,
        roots,
        meaningful,
        groups,
        max_depth: config.max_depth,
        token_chains,
        full_chains,
        entity_chains,
        noun_chunk_chains,
        attachments,
        pos_frequencies: pos_frequencies(doc),
        dep_frequencies: dep_frequencies(doc),
        pos_transitions: pos_transitions(doc),
    })
}

/// Analyze many documents in parallel. Reports come back in input order;
/// the first failure aborts the batch.
pub fn analyze_batch(docs: &[Document], config: &AnalysisConfig) -> Result<Vec<DocumentReport>> {
    docs.par_iter().map(|doc| analyze(doc, config)).collect()
}
