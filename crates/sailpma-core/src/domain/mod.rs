//! Domain layer: pure line manipulation, anchor location, and the service
//! template. No I/O and no external dependencies beyond error/tracing
//! plumbing — everything here is deterministic and directly unit-testable.

mod error;
pub mod lines;
pub mod locator;
pub mod template;

pub use error::{DomainError, ErrorCategory};
pub use lines::LineSequence;
pub use template::{
    DEFAULT_PORT, DEFAULT_VERSION, INJECTED_MARKER, SERVICE_LIST_ENTRY, STUB_FILE_NAME,
    ServiceTemplate,
};
