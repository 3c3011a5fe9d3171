use crate::types::{ChangesetRecord, MergeResult, highest_bump};

const DESCRIPTION_SEPARATOR: &str = "\n\n";

/// Orders records oldest first, breaking modification-time ties by path.
pub fn sort_chronologically(records: &mut [ChangesetRecord]) {
    records.sort_by(|a, b| {
        a.modified_at
            .cmp(&b.modified_at)
            .then_with(|| a.source_path.cmp(&b.source_path))
    });
}

/// Combines records into a single result, oldest description first.
///
/// Records are ordered by modification time, with the source path breaking
/// ties so the result does not depend on directory enumeration order.
/// Returns `None` when `records` is empty.
#[must_use]
pub fn merge_records(mut records: Vec<ChangesetRecord>) -> Option<MergeResult> {
    if records.is_empty() {
        return None;
    }

    sort_chronologically(&mut records);

    let highest = highest_bump(records.iter().map(|r| r.bump_type));

    let descriptions: Vec<&str> = records
        .iter()
        .map(|r| r.description.as_str())
        .filter(|d| !d.trim().is_empty())
        .collect();

    Some(MergeResult {
        highest_bump: highest,
        combined_description: descriptions.join(DESCRIPTION_SEPARATOR),
        description_count: descriptions.len(),
        sources: records.into_iter().map(|r| r.source_path).collect(),
    })
}
