//! Constants describing the split-id text format.

/// Separator between split-id segments.
pub const SPLIT_ID_SEPARATOR: char = '/';

/// Minimum number of segments (`container/document`).
pub const MIN_SPLIT_ID_SEGMENTS: usize = 2;

/// Maximum number of segments (`container/document/item`).
pub const MAX_SPLIT_ID_SEGMENTS: usize = 3;
