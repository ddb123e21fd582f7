//! # idpair core
//!
//! Helpers for lists of id/name records.
//!
//! This crate contains:
//! - [`IdNamePair`], a plain id/name record, and [`IdNamed`], the trait the helpers are generic
//!   over
//! - [`IdNamePairSlice`]: membership checks by id and projections to ids or document ids
//! - [`IdNamePairVec`]: de-duplicated insertion of single items and ranges
//!
//! Document ids come from splitting each id with `idpair-split-id`; split errors are returned
//! unchanged as [`SplitIdError`].
//!
//! ```rust
//! use idpair_core::{IdNamePair, IdNamePairSlice, IdNamePairVec};
//!
//! let mut list = vec![IdNamePair::new("orders/1", "First order")];
//! list.add_range_if_not_exists(vec![
//!     IdNamePair::new("orders/1", "Duplicate"),
//!     IdNamePair::new("orders/2", "Second order"),
//! ]);
//!
//! assert!(list.contains_id("orders/2"));
//! assert_eq!(list.to_list_of_document_ids()?, vec!["1", "2"]);
//! # Ok::<(), idpair_core::SplitIdError>(())
//! ```

pub mod config;
pub mod constants;
pub mod lists;
pub mod pair;

pub use config::{ConfigError, DedupConfig};
pub use idpair_split_id::{SplitId, SplitIdError, SplitIdResult};
pub use lists::{DocumentIds, IdNamePairSlice, IdNamePairVec, Ids};
pub use pair::{IdNamePair, IdNamed};
