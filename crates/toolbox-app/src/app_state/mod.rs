//! Headless application state.
//!
//! Owns the toolbox, the preference store and the event bus, and drives
//! the toolbox with user events taken from the command line.

mod core;
mod dispatch;
mod init;
mod shutdown;


pub use self::core::ToolboxApp;
