//! HTTP front door.
//!
//! Thin glue: every route hands straight off to the kernel dispatcher or
//! renders static content from settings.

pub mod dynmap;
pub mod error;
pub mod handlers;
pub mod page;
pub mod router;
pub mod server;

pub use router::{build_router, WebState};
pub use server::{ServerHandle, WebServer};
