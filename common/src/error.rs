use thiserror::Error;

/// Rejections raised while building a target list from user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetListError {
    #[error("target list '{name}' needs at least one port or one service keyword")]
    NoCriteria { name: String },

    #[error("target list name cannot be empty")]
    EmptyName,
}
