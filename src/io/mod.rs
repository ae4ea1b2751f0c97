//! IO modules - external interface concerns
//!
//! The engine itself performs no network calls; this module holds the typed
//! edges the console's transport layer feeds into it:
//! - `server_reply` - parsing submission endpoint replies and re-hydrating
//!   the server's authoritative geofence echo

pub mod server_reply;

// Re-export commonly used types
pub use server_reply::{parse_reply, RejectionBody, SubmitReply};
