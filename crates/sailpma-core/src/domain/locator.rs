//! Structural anchor location.
//!
//! Insertion points are found by matching literal anchor lines — a fragile
//! but deliberate stand-in for real structural parsing. Keeping the matching
//! behind these two functions means a future YAML/PHP-aware locator could
//! replace them without touching the orchestrator.
//!
//! Anchors are expected to appear exactly once in well-formed input; when
//! duplicated, the first match wins (documented ambiguity).

use crate::domain::{DomainError, LineSequence};

/// Anchor marking the end of the `services:` mapping in docker-compose.yml.
pub const COMPOSE_ANCHOR: &str = "networks:";

/// Anchor closing the `$services` array in the Sail services trait
/// (matched after trimming the line's indentation).
pub const SERVICE_LIST_ANCHOR: &str = "];";

/// Index of the top-level `networks:` line in a docker-compose document.
///
/// The new service block is spliced onto the line immediately preceding
/// this anchor. Exact match — an indented `networks:` inside a service
/// definition does not count.
pub fn find_compose_anchor(lines: &LineSequence) -> Result<usize, DomainError> {
    lines
        .lines()
        .iter()
        .position(|line| line == COMPOSE_ANCHOR)
        .ok_or_else(|| DomainError::AnchorNotFound {
            anchor: COMPOSE_ANCHOR.to_string(),
        })
}

/// Index of the `];` line closing the service-name array, matched after
/// trimming leading/trailing whitespace from each line.
pub fn find_service_list_anchor(lines: &LineSequence) -> Result<usize, DomainError> {
    lines
        .lines()
        .iter()
        .position(|line| line.trim() == SERVICE_LIST_ANCHOR)
        .ok_or_else(|| DomainError::AnchorNotFound {
            anchor: SERVICE_LIST_ANCHOR.to_string(),
        })
}

/// The line the orchestrator actually splices onto: the one just before the
/// anchor. An anchor on the first line leaves nothing to splice onto.
pub fn splice_target(anchor_index: usize, anchor: &str) -> Result<usize, DomainError> {
    anchor_index
        .checked_sub(1)
        .ok_or_else(|| DomainError::AnchorAtFileStart {
            anchor: anchor.to_string(),
        })
}

// ── tests ─────────────────────────────────────────────────────────────────────
