use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List registered JSON Schemas, or print one.
    Schema(SchemaArgs),
    /// Check a stack decision document (JSON or TOML) for conformance.
    Validate(ValidateArgs),
    /// Print a starter stack decision document.
    Template(TemplateArgs),
    /// Summarise an ERP snapshot.
    Status(SnapshotArgs),
    /// Run the decision rules over an ERP snapshot.
    Recommend(SnapshotArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (e.g. `erpx_stack`); omit to list all names.
    pub name: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Path to a `.json` or `.toml` stack document.
    pub file: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct TemplateArgs {
    /// Fill in every optional section.
    #[arg(long)]
    pub full: bool,

    /// Emit TOML instead of JSON.
    #[arg(long)]
    pub toml: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SnapshotArgs {
    /// Path to an ERP snapshot JSON document.
    pub snapshot: PathBuf,
}
