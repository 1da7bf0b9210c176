//! Integration tests for tickema-bot.
//!
//! These tests verify the interaction between components:
//! - Poll loop over a scripted frame source
//! - Subscription and teardown against a local feed server
//! - End-to-end table and summary output

pub mod common;
