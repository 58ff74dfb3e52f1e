//! # OpenFolder Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by the chain, the platform modules and the
//! bridge:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `result`: The `OpenResult` payload and its JSON encoder
//!
pub mod config;
pub mod error;
pub mod result;
