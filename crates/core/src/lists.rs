//! Extension traits over lists of [`IdNamed`] records.
//!
//! - [`IdNamePairSlice`] holds the read-only helpers and is implemented for `[T]`, so it is
//!   available on vectors, arrays and slices.
//! - [`IdNamePairVec`] holds the de-duplicating insertions and is implemented for `Vec<T>`.
//!
//! All id comparisons are ordinal: two ids match only if their bytes are equal. There is no
//! case folding or Unicode normalisation.

use crate::config::DedupConfig;
use crate::pair::IdNamed;
use idpair_split_id::{document_id_of, SplitIdResult};
use std::collections::HashSet;
use std::iter::FusedIterator;

/// Read-only helpers for a list of id/name records.
pub trait IdNamePairSlice {
    type Item: IdNamed;

    /// Returns true if some element's id is byte-equal to `id`.
    ///
    /// An empty `id` never matches, even if the list holds an element with an empty id.
    fn contains_id(&self, id: &str) -> bool;

    /// Collects the ids into a new vector, in list order.
    fn to_list_of_ids(&self) -> Vec<String>;

    /// Lazily yields the ids in list order.
    ///
    /// The iterator borrows the list and can be cloned to traverse it again from the start.
    fn ids(&self) -> Ids<'_, Self::Item>;

    /// Splits every id and collects the document ids, in list order.
    ///
    /// # Errors
    ///
    /// Returns the first [`SplitIdError`](idpair_split_id::SplitIdError) encountered, unchanged.
    fn to_list_of_document_ids(&self) -> SplitIdResult<Vec<String>>;

    /// Lazily yields the document id of each element.
    ///
    /// Ids are only split when pulled, so a malformed id surfaces as an `Err` item at its own
    /// position and does not affect the elements before it.
    fn document_ids(&self) -> DocumentIds<'_, Self::Item>;
}

impl<T: IdNamed> IdNamePairSlice for [T] {
    type Item = T;

    fn contains_id(&self, id: &str) -> bool {
        if self.is_empty() || id.is_empty() {
            return false;
        }
        has_id(self, id)
    }

    fn to_list_of_ids(&self) -> Vec<String> {
        self.iter().map(|item| item.id().to_owned()).collect()
    }

    fn ids(&self) -> Ids<'_, T> {
        Ids { inner: self.iter() }
    }

    fn to_list_of_document_ids(&self) -> SplitIdResult<Vec<String>> {
        self.document_ids().collect()
    }

    fn document_ids(&self) -> DocumentIds<'_, T> {
        DocumentIds { inner: self.iter() }
    }
}

/// De-duplicating insertion into a list of id/name records.
///
/// Items are only ever appended. Existing elements are never reordered or removed.
pub trait IdNamePairVec<T> {
    /// Appends `item` unless an element with the same id is already present.
    ///
    /// Returns `true` if the item was appended.
    fn add_if_not_exists(&mut self, item: T) -> bool;

    /// Appends each item of `range`, in order, unless its id is already present in the list
    /// (including items appended earlier in the same call).
    ///
    /// Uses [`DedupConfig::default`]. Returns the number of items appended.
    fn add_range_if_not_exists<I>(&mut self, range: I) -> usize
    where
        I: IntoIterator<Item = T>;

    /// Same as [`add_range_if_not_exists`](IdNamePairVec::add_range_if_not_exists) with an
    /// explicit strategy threshold.
    fn add_range_if_not_exists_with<I>(&mut self, range: I, config: &DedupConfig) -> usize
    where
        I: IntoIterator<Item = T>;
}

impl<T: IdNamed> IdNamePairVec<T> for Vec<T> {
    fn add_if_not_exists(&mut self, item: T) -> bool {
        if has_id(self, item.id()) {
            return false;
        }
        self.push(item);
        true
    }

    fn add_range_if_not_exists<I>(&mut self, range: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        self.add_range_if_not_exists_with(range, &DedupConfig::default())
    }

    fn add_range_if_not_exists_with<I>(&mut self, range: I, config: &DedupConfig) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let candidates: Vec<T> = range.into_iter().collect();
        if candidates.is_empty() {
            return 0;
        }

        let original_len = self.len();
        let candidate_count = candidates.len();
        let combined = original_len.saturating_add(candidate_count);

        if config.use_linear_scan(combined) {
            tracing::trace!(combined, strategy = "linear_scan", "adding range");
            for candidate in candidates {
                self.add_if_not_exists(candidate);
            }
        } else {
            tracing::trace!(combined, strategy = "hash_set", "adding range");
            let mut seen: HashSet<String> =
                self.iter().map(|item| item.id().to_owned()).collect();
            for candidate in candidates {
                if seen.insert(candidate.id().to_owned()) {
                    self.push(candidate);
                }
            }
        }

        let added = self.len() - original_len;
        tracing::debug!(
            added,
            skipped = candidate_count - added,
            "added range without duplicate ids"
        );
        added
    }
}

fn has_id<T: IdNamed>(items: &[T], id: &str) -> bool {
    items.iter().any(|item| item.id() == id)
}

/// Lazy iterator over the ids of a list. Created by [`IdNamePairSlice::ids`].
#[derive(Debug)]
pub struct Ids<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<T> Clone for Ids<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T: IdNamed> Iterator for Ids<'a, T> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.inner.next().map(T::id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: IdNamed> DoubleEndedIterator for Ids<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(T::id)
    }
}

impl<T: IdNamed> ExactSizeIterator for Ids<'_, T> {}

impl<T: IdNamed> FusedIterator for Ids<'_, T> {}

/// Lazy iterator over the document ids of a list. Created by
/// [`IdNamePairSlice::document_ids`].
#[derive(Debug)]
pub struct DocumentIds<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<T> Clone for DocumentIds<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

fn split_document_id<T: IdNamed>(item: &T) -> SplitIdResult<String> {
    document_id_of(item.id()).map_err(|err| {
        tracing::debug!(id = item.id(), error = %err, "failed to split id");
        err
    })
}

impl<T: IdNamed> Iterator for DocumentIds<'_, T> {
    type Item = SplitIdResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(split_document_id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: IdNamed> DoubleEndedIterator for DocumentIds<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(split_document_id)
    }
}

impl<T: IdNamed> ExactSizeIterator for DocumentIds<'_, T> {}

impl<T: IdNamed> FusedIterator for DocumentIds<'_, T> {}
