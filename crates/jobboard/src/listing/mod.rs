//! # Company Listing Pipeline
//!
//! Derives the visible company list from the raw records the companies slice holds:
//!
//! ```text
//! raw values ──normalize──▶ CompanyRecord ──FilterPipeline──▶ sort ──▶ visible list
//! ```
//!
//! 1. [`normalize`] fills every missing field with a display default and reconciles
//!    the field aliases different backend versions use.
//! 2. [`FilterPipeline`] applies the active [`FilterCriteria`]: AND across categories,
//!    OR within a category, empty categories pass everything.
//! 3. [`sort_records`] orders a copy of the result by a [`SortKey`].
//!
//! [`transform`] runs all three. It is pure and deterministic: the same input always
//! gives the same output. [`CompanyListView`] memoizes it so an unchanged list with
//! unchanged criteria is not recomputed.

pub mod criteria;
pub mod filters;
pub mod normalize;
pub mod options;
pub mod sort;
pub mod view;

pub use criteria::FilterCriteria;
pub use filters::{
    CompanyFilter, FilterPipeline, IndustryFilter, KeywordFilter, LocationFilter, SizeFilter,
};
pub use normalize::{normalize, normalize_all, size_bucket, SIZE_BUCKETS};
pub use options::FilterOptions;
pub use sort::{sort_records, SortKey};
pub use view::{transform, CompanyListView};
