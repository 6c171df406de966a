//! Platform service abstractions for HomeOS.
//!
//! The terminal core never talks to the OS or the UI directly; it goes
//! through the narrow service traits defined here. The desktop
//! implementations are the only ones in-tree.

mod services;

pub use services::{AppLauncher, DesktopPlatform, LoggingLauncher, SystemTime, TimeService};
