use changeset_core::BumpType;

use crate::Result;

#[derive(Debug, Clone)]
pub enum BumpSelection {
    Selected(BumpType),
    Cancelled,
}

#[derive(Debug, Clone)]
pub enum DescriptionInput {
    Provided(String),
    Cancelled,
}

pub trait InteractionProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn select_bump_type(&self, package_name: &str) -> Result<BumpSelection>;

    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn get_description(&self) -> Result<DescriptionInput>;
}
