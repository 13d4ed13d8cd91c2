use erpx_config::ErpxConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SnapshotArgs;
use crate::commands::status::load_system;
use crate::output::output;

/// Handle `erpx recommend`.
pub fn handle(args: &SnapshotArgs, config: &ErpxConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let system = load_system(&args.snapshot, config)?;
    let report = system.recommendations();
    tracing::debug!(
        total = report.summary.total_recommendations,
        critical = report.summary.critical_items,
        "recommendations computed"
    );
    output(&report, flags.format)
}
