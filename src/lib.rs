pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{memory_store::MemoryStore, menu_file::MenuFile, toml_store::TomlStore, StoredOverrides};
pub use crate::core::{
    checklist::ChecklistBuilder, labels::LabelResolver, transformer::MenuTransformer,
};
pub use domain::model::{
    ChecklistRow, Contributions, HiddenPair, MenuEntry, MenuTree, PassReport, SettingsPage,
    SubmenuChecklist, SubmenuTree,
};
pub use domain::ports::{AllowAll, Capabilities, OverrideKey, OverrideStore};
pub use utils::error::{MenuError, Result};
