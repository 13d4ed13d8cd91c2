use std::path::Path;

use anyhow::Context;
use erpx_config::ErpxConfig;
use erpx_engine::ErpSystem;
use erpx_schema::{SchemaRegistry, load_snapshot};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SnapshotArgs;
use crate::output::output;

/// Handle `erpx status`.
pub fn handle(args: &SnapshotArgs, config: &ErpxConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let system = load_system(&args.snapshot, config)?;
    output(&system.status(), flags.format)
}

/// Read a snapshot file into an `ErpSystem` configured from `config`.
pub fn load_system(path: &Path, config: &ErpxConfig) -> anyhow::Result<ErpSystem> {
    let snapshot = load_snapshot(&SchemaRegistry::new(), path)
        .with_context(|| format!("failed to load snapshot {}", path.display()))?;
    Ok(ErpSystem::from_snapshot(snapshot, config))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn snapshot_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("tempfile should create");
        file.write_all(contents.as_bytes()).expect("write should succeed");
        file
    }

    #[test]
    fn status_uses_configured_company_when_snapshot_has_none() {
        let file = snapshot_file(
            r#"{
                "resources": [{"id": "r1", "name": "Press", "type": "equipment", "utilization": 40.0}],
                "inventory": [{"id": "i1", "name": "Sheet", "category": "raw", "quantity": 4, "unit_cost": 2.5}],
                "transactions": [{"id": "t1", "type": "purchase", "amount": 10.0, "description": "Sheets"}]
            }"#,
        );

        let status = load_system(file.path(), &ErpxConfig::default())
            .unwrap()
            .status();
        assert_eq!(status.company, "My Company");
        assert_eq!(status.resources.available, 1);
        assert_eq!(status.inventory.items_needing_reorder, 1);
        assert!((status.inventory.total_value - 10.0).abs() < f64::EPSILON);
        assert_eq!(status.transactions.pending, 1);
    }

    #[test]
    fn snapshot_with_bad_status_is_rejected() {
        let file = snapshot_file(
            r#"{"transactions": [{"id": "t1", "type": "purchase", "amount": 1.0, "description": "x", "status": "lost"}]}"#,
        );
        let err = load_system(file.path(), &ErpxConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load snapshot"));
    }
}
