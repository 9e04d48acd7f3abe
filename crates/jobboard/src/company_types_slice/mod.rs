//! # Company Types Slice
//!
//! The admin-managed list of company categories. Create, rename and delete patch the
//! stored list with the server's answer, so the list never needs a reload after an
//! edit.

pub mod entity;
pub mod error;
pub mod operations;

pub use entity::CompanyTypesSlice;
pub use error::*;
pub use operations::*;

use crate::clients::CompanyTypesClient;
use slice_framework::SliceActor;

/// Creates a new company types slice actor and its client.
pub fn new(buffer: usize) -> (SliceActor<CompanyTypesSlice>, CompanyTypesClient) {
    let (actor, generic_client) = SliceActor::new(buffer);
    (actor, CompanyTypesClient::new(generic_client))
}
