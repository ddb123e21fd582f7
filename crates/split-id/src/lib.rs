//! Composite identifier parsing.
//!
//! Records handled by `idpair-core` carry a single `id` string. Many of those ids are
//! *composite*: they encode the container a record lives in, the document it belongs to and,
//! optionally, an item within that document.
//!
//! ## Canonical split-id form
//! `<container_id>/<document_id>[/<item_id>]`
//!
//! - Separator: `/`
//! - Two or three segments
//! - Every segment non-empty and free of whitespace
//! - Example: `orders/9f1c2b/line-3`
//!
//! Parsing is strict. Leading or trailing separators, doubled separators and padded segments
//! are rejected rather than normalised, so the string form of a [`SplitId`] is always the
//! string it was parsed from.

pub mod constants;
mod split_id;

pub use split_id::{document_id_of, SplitId};

/// Error type for split-id operations.
#[derive(Debug, thiserror::Error)]
pub enum SplitIdError {
    /// Invalid input provided
    #[error("Invalid split id: {0}")]
    InvalidInput(String),
}

/// Result type for split-id operations.
pub type SplitIdResult<T> = Result<T, SplitIdError>;
