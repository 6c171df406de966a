//! Foundation types for HomeOS.
//!
//! This crate contains the platform-agnostic types shared by all HomeOS
//! crates: the error taxonomy, terminal input events, and the session
//! configuration loaded at login time.

pub mod config;
pub mod error;
pub mod input;
