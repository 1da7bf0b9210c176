//! Shared test fixtures. Not every test binary uses every helper.
#![allow(dead_code)]

pub mod mock_ws;
pub mod scripted;
