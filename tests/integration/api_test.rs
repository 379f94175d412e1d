//! API endpoint integration tests
//!
//! Exercises the composed application router over the in-memory campaign store.

#![allow(dead_code)]

mod campaigns;
mod common;
