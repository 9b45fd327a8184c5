//! Application layer: orchestration of the patch actions over the
//! filesystem port. Business rules live in `crate::domain`; everything
//! here is sequencing and error mapping.

pub mod backup;
mod error;
pub mod ports;
pub mod services;

pub use backup::{BackupManager, backup_path};
pub use error::ApplicationError;
pub use services::{PatchService, RestoreTarget};
