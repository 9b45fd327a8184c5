//! Application services (use-case orchestration).

mod patch_service;

pub use patch_service::{PatchService, RestoreTarget};
