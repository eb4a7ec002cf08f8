//! `trove-client` — the presentation tier's half of the system.
//!
//! Three pieces: an HTTP [`ApiClient`] whose every failure degrades to a
//! non-success envelope (never an error the caller must catch), the
//! session-scoped [`SessionState`] holding the authoritative in-memory item
//! collection with a static fallback dataset, and the [`EnquiryRelay`]
//! client for the external form-relay service.

pub mod api;
pub mod enquiry;
pub mod fallback;
pub mod forms;
pub mod state;

pub use api::ApiClient;
pub use enquiry::{EnquiryForm, EnquiryRelay, RelayOutcome};
pub use forms::{ItemFormData, ItemUpdateData, UploadFile};
pub use state::{Phase, RefreshTicket, SessionState};
