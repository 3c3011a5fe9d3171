use changeset_core::BumpType;

use crate::parse::FRONT_MATTER_DELIMITER;

/// Renders a changeset in the on-disk front-matter format.
#[must_use]
pub fn serialize_changeset(package_name: &str, bump_type: BumpType, description: &str) -> String {
    let mut output = String::new();
    output.push_str(FRONT_MATTER_DELIMITER);
    output.push('\n');
    output.push('\'');
    output.push_str(package_name);
    output.push_str("': ");
    output.push_str(bump_type.as_str());
    output.push('\n');
    output.push_str(FRONT_MATTER_DELIMITER);
    output.push_str("\n\n");
    output.push_str(description.trim());
    output.push('\n');
    output
}
