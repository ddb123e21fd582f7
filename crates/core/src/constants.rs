//! Constants used throughout the idpair core crate.

/// Combined list size at or below which bulk insertion uses repeated linear scans instead of a
/// hash set of existing ids.
pub const LINEAR_SCAN_THRESHOLD: usize = 16;
