pub mod checklist;
pub mod labels;
pub mod normalize;
pub mod transformer;

pub use crate::domain::model::{
    Contributions, HiddenPair, MenuEntry, MenuTree, PassReport, SettingsPage, SubmenuTree,
};
pub use crate::domain::ports::{Capabilities, OverrideKey, OverrideStore};
pub use crate::utils::error::Result;
