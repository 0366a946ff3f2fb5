//! Static site content and keyed catalogue lookup.
//!
//! DESIGN
//! ======
//! Page copy lives in `&'static` tables so pages stay pure presentation.
//! Keyed catalogues (blog posts, guides, solutions) resolve dynamic route
//! segments with `find_or_first`: an unknown key silently resolves to the
//! first record. Old or mistyped links still land on real content, at the
//! cost that a genuine "not found" looks the same as a request for the first
//! record's key.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod articles;
pub mod blog;
pub mod careers;
pub mod changelog;
pub mod faq;
pub mod features;
pub mod guides;
pub mod navigation;
pub mod pricing;
pub mod solutions;

use thiserror::Error;

/// Failure to produce page content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("the {0} catalogue is empty")]
    EmptyCatalog(&'static str),
}

/// A record addressable by a route segment.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Record whose key equals `key`, else the first record.
///
/// # Errors
///
/// Returns `PageError::EmptyCatalog` only if `catalog` has no records.
pub fn find_or_first<'a, T: Keyed>(catalog: &'a [T], name: &'static str, key: &str) -> Result<&'a T, PageError> {
    catalog
        .iter()
        .find(|record| record.key() == key)
        .or_else(|| catalog.first())
        .ok_or(PageError::EmptyCatalog(name))
}
