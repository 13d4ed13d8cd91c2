use std::path::Path;

use anyhow::Context;
use erpx_config::ErpxConfig;

/// Load `.env` from the project root (or the usual dotenv search), then
/// the layered configuration.
pub fn load_config(project_root: &Path) -> anyhow::Result<ErpxConfig> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    } else {
        dotenvy::dotenv().ok();
    }

    let config = ErpxConfig::load_from(project_root).with_context(|| {
        format!(
            "failed to load configuration for project at {}",
            project_root.display()
        )
    })?;
    tracing::debug!(
        company = %config.general.company_name,
        budget = config.general.budget_usd,
        "configuration loaded"
    );
    Ok(config)
}
