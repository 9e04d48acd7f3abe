//! # Student Slice
//!
//! Client-side state for the student directory used by the admin pages and the
//! student's own profile page.
//!
//! ## Structure
//!
//! - [`entity`] - [`SliceResource`](slice_framework::SliceResource) implementation for [`StudentsSlice`]
//! - [`operations`] - [`StudentOperation`], the commands the slice accepts
//! - [`error`] - [`StudentError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jobboard::http::{HttpTransport, SharedTransport};
//! use jobboard::student_slice;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport: SharedTransport = Arc::new(HttpTransport::new(
//!         "http://localhost:5000/api",
//!         Duration::from_secs(30),
//!         None,
//!     )?);
//!
//!     let (actor, client) = student_slice::new(32);
//!     tokio::spawn(actor.run(transport));
//!
//!     let students = client.list(Some(1), Some(20), None).await?;
//!     println!("{} students", students.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Collection patching
//!
//! `Get` and `Update` upsert the returned student into the stored list and `Delete`
//! removes it, so the list page stays current without a reload. Pagination from the
//! last `List` is carried forward, with `total` adjusted on delete. The patch is made
//! to the list as it is when the response arrives, so overlapping edits and deletes
//! all land even when a newer request was sent in between.

pub mod entity;
pub mod error;
pub mod operations;

pub use entity::StudentsSlice;
pub use error::*;
pub use operations::*;

use crate::clients::StudentClient;
use slice_framework::SliceActor;

/// Creates a new student slice actor and its client.
pub fn new(buffer: usize) -> (SliceActor<StudentsSlice>, StudentClient) {
    let (actor, generic_client) = SliceActor::new(buffer);
    (actor, StudentClient::new(generic_client))
}
