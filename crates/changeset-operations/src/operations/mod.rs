mod add;
mod detect;
mod merge;
mod release_notes;
mod status;
mod validate;
mod verify;
mod version;

pub use add::{AddInput, AddOperation, AddResult};
pub use detect::{ChangeDetector, Detection, DetectionStrategy, RevisionContext};
pub use merge::{MergeOperation, MergeOutcome, MergeSummary};
pub use release_notes::{ReleaseNotes, ReleaseNotesInput, ReleaseNotesOperation};
pub use status::{StatusOperation, StatusOutput};
pub use validate::{ValidationOutcome, validate_added, validate_added_with};
pub use verify::{VerifyInput, VerifyOperation, VerifyOutcome};
pub use version::{VersionInput, VersionOperation, VersionOutcome, VersionSummary};
