//! # Company Slice
//!
//! Raw company records for the public companies page. The slice stores the records
//! exactly as the API returned them, behind an `Arc`; the visible list is derived by
//! the [`listing`](crate::listing) pipeline, which memoizes on that `Arc`.

pub mod entity;
pub mod error;
pub mod operations;

pub use entity::CompaniesSlice;
pub use error::*;
pub use operations::*;

use crate::clients::CompanyClient;
use slice_framework::SliceActor;

/// Creates a new company slice actor and its client.
pub fn new(buffer: usize) -> (SliceActor<CompaniesSlice>, CompanyClient) {
    let (actor, generic_client) = SliceActor::new(buffer);
    (actor, CompanyClient::new(generic_client))
}
