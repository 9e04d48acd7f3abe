//! # Slice Clients
//!
//! Typed wrappers over the generic [`SliceClient`](slice_framework::SliceClient), one
//! per slice. Each implements [`SliceHandle`](slice_framework::SliceHandle) for the
//! shared read interface (`state`, `subscribe`, `error_message`) and adds the domain
//! methods pages call.

pub mod admin_client;
pub mod company_client;
pub mod company_types_client;
pub mod student_client;
pub mod subscription_client;

pub use admin_client::AdminClient;
pub use company_client::CompanyClient;
pub use company_types_client::CompanyTypesClient;
pub use student_client::StudentClient;
pub use subscription_client::SubscriptionClient;
