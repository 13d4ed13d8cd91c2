//! # erpx-schema
//!
//! JSON Schema generation, conformance checking, and document loading for ERPx.
//!
//! This crate provides:
//! - `SchemaRegistry`: central store of all JSON Schemas in the system
//! - Conformance checks for stack decision documents and ERP snapshots
//! - JSON / TOML document reading and rendering
//! - Starter stack documents for `erpx template`
//!
//! ## Architecture
//!
//! Record types are defined in `erpx-core` with `#[derive(JsonSchema)]`.
//! This crate imports those types and provides the registry, validation, and
//! export layer. The CLI depends on erpx-schema for every document it reads.

pub mod conformance;
pub mod document;
mod error;
mod registry;
pub mod templates;

pub use conformance::{check_snapshot, check_stack, load_snapshot, load_stack};
pub use document::DocumentFormat;
pub use error::SchemaError;
pub use registry::{SNAPSHOT_SCHEMA, STACK_SCHEMA, SchemaRegistry};
