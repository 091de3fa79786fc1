// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod error;
pub mod hal_traits;
pub mod record;
pub mod timing;

// --- Re-export key types/traits/functions for easier access ---

// From error.rs
pub use error::HttpError;

// From hal_traits.rs
pub use hal_traits::{NetInstant, NetTimer, StatusDisplay, TcpSocket};

// From record.rs
pub use record::{parse_record, write_record, RecordError, RecordParts};

// From timing.rs (constants - users can access via common::timing::*)
// No re-exports by default.
