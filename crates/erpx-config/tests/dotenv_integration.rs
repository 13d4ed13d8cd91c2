//! Integration tests proving `.env` values flow through figment.
//!
//! `dotenvy` writes straight into the process environment and never removes
//! what it loaded, so each key a `.env` file introduces here is used by one
//! test only. Keys the jail sets itself are restored when the jail drops.

use figment::{Jail, providers::Serialized};
use pretty_assertions::assert_eq;
use erpx_config::ErpxConfig;

fn isolate_user_config(jail: &mut Jail) {
    let dir = jail.directory().join("xdg");
    jail.set_env("XDG_CONFIG_HOME", dir.display());
}

#[test]
fn dotenv_values_reach_the_config() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file(".env", "ERPX_GENERAL__COMPANY_NAME=\"Dotenv Works\"\n")?;

        let config = ErpxConfig::load_with_dotenv().map_err(|e| e.to_string())?;

        assert_eq!(config.general.company_name, "Dotenv Works");
        assert_eq!(config.thresholds.reorder_multiplier, 2);
        Ok(())
    });
}

#[test]
fn real_environment_beats_dotenv() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("ERPX_THRESHOLDS__REORDER_MULTIPLIER", "5");
        jail.create_file(".env", "ERPX_THRESHOLDS__REORDER_MULTIPLIER=3\n")?;

        let config = ErpxConfig::load_with_dotenv().map_err(|e| e.to_string())?;

        assert_eq!(config.thresholds.reorder_multiplier, 5);
        Ok(())
    });
}

#[test]
fn dotenv_beats_project_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir(".erpx")?;
        jail.create_file(
            ".erpx/config.toml",
            r"
[thresholds]
utilization_alert_pct = 70.0
capacity_alert_pct = 85.0
",
        )?;
        jail.create_file(".env", "ERPX_THRESHOLDS__CAPACITY_ALERT_PCT=95.0\n")?;

        let config = ErpxConfig::load_with_dotenv().map_err(|e| e.to_string())?;

        assert!((config.thresholds.utilization_alert_pct - 70.0).abs() < f64::EPSILON);
        assert!((config.thresholds.capacity_alert_pct - 95.0).abs() < f64::EPSILON);
        Ok(())
    });
}

#[test]
fn missing_dotenv_is_not_an_error() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);

        let config = ErpxConfig::load_with_dotenv().map_err(|e| e.to_string())?;

        assert!((config.general.budget_usd - 100_000.0).abs() < f64::EPSILON);
        Ok(())
    });
}

#[test]
fn figment_accepts_extra_providers() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("ERPX_GENERAL__COMPANY_NAME", "From Env");

        let figment =
            ErpxConfig::figment().merge(Serialized::default("general.budget_usd", 5000.0));
        let config = ErpxConfig::extract(&figment).map_err(|e| e.to_string())?;

        assert_eq!(config.general.company_name, "From Env");
        assert!((config.general.budget_usd - 5000.0).abs() < f64::EPSILON);
        Ok(())
    });
}
