//! # System Lifecycle
//!
//! Starts every slice, wires the shared transport into each one, and shuts them down
//! together.
//!
//! ## The JobBoardSystem Pattern
//!
//! ```rust,ignore
//! let transport: SharedTransport = Arc::new(HttpTransport::new(url, timeout, token)?);
//! let system = JobBoardSystem::new(&config, transport);
//!
//! let students = system.students.list(Some(1), Some(20), None).await?;
//!
//! system.shutdown().await?;
//! ```
//!
//! ## Dependency Injection via Context
//!
//! Slices are created without dependencies; the transport is injected when each actor
//! is started with `run(context)`. All five slices share one `Arc<dyn Transport>`,
//! so swapping in a [`StubTransport`](crate::http::StubTransport) swaps it for all of
//! them.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the command channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for every actor task to finish
//!
//! Clones of a client held elsewhere keep their slice alive, so drop them before
//! calling [`JobBoardSystem::shutdown`].

pub mod job_board_system;

pub use job_board_system::*;
