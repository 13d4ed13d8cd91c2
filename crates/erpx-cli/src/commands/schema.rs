use anyhow::anyhow;
use erpx_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `erpx schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    match &args.name {
        None => output(&registry.list(), flags.format),
        Some(name) => {
            let schema = lookup(&registry, name)?;
            output(schema, flags.format)
        }
    }
}

fn lookup<'a>(registry: &'a SchemaRegistry, name: &str) -> anyhow::Result<&'a serde_json::Value> {
    registry
        .get(name)
        .ok_or_else(|| anyhow!("unknown schema '{name}'; run `erpx schema` to list names"))
}
