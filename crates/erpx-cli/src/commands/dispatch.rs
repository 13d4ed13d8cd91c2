use std::path::Path;

use crate::bootstrap;
use crate::cli::{Commands, GlobalFlags};
use crate::commands;

/// Route a parsed command to its handler. Only the snapshot commands need
/// configuration, so it is loaded for them alone.
pub fn dispatch(command: Commands, project_root: &Path, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Schema(args) => commands::schema::handle(&args, flags),
        Commands::Validate(args) => commands::validate::handle(&args, flags),
        Commands::Template(args) => commands::template::handle(&args, flags),
        Commands::Status(args) => {
            let config = bootstrap::load_config(project_root)?;
            commands::status::handle(&args, &config, flags)
        }
        Commands::Recommend(args) => {
            let config = bootstrap::load_config(project_root)?;
            commands::recommend::handle(&args, &config, flags)
        }
    }
}
