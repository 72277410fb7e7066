//! Core utilities for the eNB RRC/MAC control plane
//!
//! This crate provides fundamental types and utilities used across the stack:
//! - RNTI, logical channel and radio bearer identifiers
//! - Bearer scheduling Direction
//! - Carrier limits and PCell conventions
//! - Logging setup and warning macros

pub mod debug;
pub mod direction;
pub mod lte_common;

// Re-export commonly used items
pub use direction::Direction;
pub use lte_common::*;
