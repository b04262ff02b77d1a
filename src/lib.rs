//! Clipboard Monitor
//!
//! A library for polling the system clipboard and recording every change
//! to a timestamped, leveled log file.

pub mod clipboard;
pub mod config;
pub mod logger;
pub mod monitor;
pub mod time;
