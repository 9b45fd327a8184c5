//! Command handlers: one module per top-level action.
//!
//! Each handler translates configuration into core types, drives the
//! `PatchService` over the local filesystem, and reports the outcome.
//! No patch logic lives here.

pub mod add;
pub mod inject;
pub mod restore;

use sailpma_adapters::LocalFilesystem;
use sailpma_core::application::PatchService;

/// Patch service wired to the production filesystem adapter.
pub(crate) fn patch_service() -> PatchService {
    PatchService::new(Box::new(LocalFilesystem::new()))
}
