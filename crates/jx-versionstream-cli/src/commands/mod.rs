//! Command implementations for jx-versions

pub mod catalog;
pub mod lookup;
pub mod update;
pub mod verify;

pub use catalog::{run_list, run_prefix, run_quickstarts};
pub use lookup::{run_get, run_resolve_git, run_resolve_image, run_show};
pub use update::{run_bump, run_lock};
pub use verify::run_verify;
