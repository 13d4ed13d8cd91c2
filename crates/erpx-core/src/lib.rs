//! # erpx-core
//!
//! Core types and error types for ERPx.
//!
//! This crate provides the foundational types shared across all ERPx crates:
//! - The technology-stack decision record (`stack`), rooted at [`stack::ErpxStack`]
//! - Closed enumerations used by the stack record and the ERP entities
//! - ERP entity structs (resources, inventory items, transactions)
//! - Snapshot and report types returned by the engine and the CLI
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod stack;
