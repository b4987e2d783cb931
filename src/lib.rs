//! spoolgate - HTTP-to-printer bridge.
//!
//! Accepts a document over HTTP, stages it as a transient file in the job
//! directory, hands it to the OS print spooler via its command-line interface
//! and reports submission and device status. The staged file is removed on
//! every exit path.

pub mod config;
pub mod job;
pub mod spooler;
pub mod web;
