//! ERP entity structs.
//!
//! Resources, inventory items, and transactions managed by the in-memory
//! `ErpSystem` in `erpx-engine`. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` so they can travel inside snapshot
//! documents and be validated against the registry.

mod inventory;
mod resource;
mod transaction;

pub use inventory::InventoryItem;
pub use resource::Resource;
pub use transaction::Transaction;

/// Drop the `default` schemars evaluates for clock-stamped fields.
pub(crate) fn without_default(schema: &mut schemars::Schema) {
    schema.remove("default");
}
