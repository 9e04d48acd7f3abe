//! # Job Board Client Core
//!
//! Client-side state management for a job-board application: one slice per remote
//! resource, a derived company list, a durable notification list, and the display
//! helpers the pages share.
//!
//! ## Modules
//!
//! - **[model]**: payload types exchanged with the API
//! - **[http]**: the [`Transport`](http::Transport) seam, a `reqwest` implementation and a scripted stub
//! - **slices**: [`student_slice`], [`admin_slice`], [`company_types_slice`],
//!   [`subscription_slice`], [`company_slice`], each built on
//!   [`slice_framework::SliceActor`]
//! - **[clients]**: typed wrappers over each slice
//! - **[listing]**: normalize, filter and sort the company list
//! - **[notifications]**: the persisted notification list
//! - **[format]**: date and salary display helpers
//! - **[lifecycle]**: [`JobBoardSystem`](lifecycle::JobBoardSystem), which starts and stops everything
//!
//! ## Testing
//!
//! [`http::StubTransport`] answers requests from scripted responses, so whole slices can
//! be exercised without a server. For client-only tests see
//! [`slice_framework::mock`].

pub mod admin_slice;
pub mod clients;
pub mod company_slice;
pub mod company_types_slice;
pub mod config;
pub mod format;
pub mod http;
pub mod lifecycle;
pub mod listing;
pub mod model;
pub mod notifications;
pub mod student_slice;
pub mod subscription_slice;
