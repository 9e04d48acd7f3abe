//! # Admin Slice
//!
//! Holds the admin dashboard: headline counters plus the most recent users and jobs.
//! Toggling a user's activation updates the stored dashboard in place, or loads it
//! when nothing has been loaded yet.
//!
//! - [`entity`] - [`SliceResource`](slice_framework::SliceResource) implementation for [`AdminSlice`]
//! - [`operations`] - [`AdminOperation`]
//! - [`error`] - [`AdminError`]

pub mod entity;
pub mod error;
pub mod operations;

pub use entity::AdminSlice;
pub use error::*;
pub use operations::*;

use crate::clients::AdminClient;
use slice_framework::SliceActor;

/// Creates a new admin slice actor and its client.
pub fn new(buffer: usize) -> (SliceActor<AdminSlice>, AdminClient) {
    let (actor, generic_client) = SliceActor::new(buffer);
    (actor, AdminClient::new(generic_client))
}
