//! Verdict — homework review status watcher.
//!
//! Polls the Practicum homework status API on a fixed interval and sends a
//! Telegram message whenever the newest submission's review status changes.
//!
//! See `DESIGN.md` for the architecture notes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod credentials;
pub mod logging;

pub mod homework;
pub mod practicum;
pub mod telegram;

pub mod poller;
