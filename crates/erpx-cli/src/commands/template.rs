use erpx_schema::document::{self, DocumentFormat};
use erpx_schema::templates::{full_stack, minimal_stack};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TemplateArgs;
use crate::output::output;

/// Handle `erpx template`.
pub fn handle(args: &TemplateArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stack = if args.full { full_stack() } else { minimal_stack() };

    if args.toml {
        println!("{}", document::render(&stack, DocumentFormat::Toml)?);
        return Ok(());
    }
    output(&stack, flags.format)
}
