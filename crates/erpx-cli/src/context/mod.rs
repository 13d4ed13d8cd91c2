mod project_root;

pub use project_root::{PROJECT_DIR, find_project_root};
