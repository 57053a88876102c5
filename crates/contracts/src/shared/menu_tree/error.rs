use crate::domain::a001_menu::MenuId;
use thiserror::Error;

/// Errors while building the menu tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuTreeError {
    #[error("Assigned menu {id} has no menu record")]
    Lookup { id: MenuId },

    #[error("Menu {id} is its own ancestor")]
    Cycle { id: MenuId },
}
