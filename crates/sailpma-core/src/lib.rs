//! sailpma core - hexagonal architecture implementation.
//!
//! This crate provides the domain and application layers for the sailpma
//! tool, which patches a Laravel Sail project's docker-compose.yml (or its
//! services trait) to add a phpMyAdmin web service, with copy-based
//! backup/restore.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          sailpma-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Services             │
//! │      (PatchService, BackupManager)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Application Ports (Filesystem)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    sailpma-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (LineSequence, locator, ServiceTemplate)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use sailpma_core::{application::PatchService, domain::ServiceTemplate};
//! # fn fs() -> Box<dyn sailpma_core::application::ports::Filesystem> { unimplemented!() }
//!
//! let service = PatchService::new(fs());
//! service.inject(Path::new("docker-compose.yml"), &ServiceTemplate::new("5.2.1", "8080"))?;
//! # Ok::<(), sailpma_core::error::SailPmaError>(())
//! ```

// Domain layer (pure line manipulation, no I/O)
pub mod domain;

// Application layer (orchestration over the filesystem port)
pub mod application;

// Error types
pub mod error;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
