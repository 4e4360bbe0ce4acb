pub mod config;
pub mod kernel;
pub mod services;
pub mod web;

// Re-export specific items if needed for convenient access
pub use kernel::dispatcher::WakeDispatcher;
