use changeset_operations::operations::{ValidationOutcome, VerifyOutcome};

use super::display_name;

pub(crate) trait VerifyFormatter {
    fn format_success(&self, outcome: &VerifyOutcome) -> String;
    fn format_failure(&self, outcome: &VerifyOutcome) -> String;
}

pub(crate) struct PlainTextVerifyFormatter;

impl VerifyFormatter for PlainTextVerifyFormatter {
    fn format_success(&self, outcome: &VerifyOutcome) -> String {
        let mut output = String::new();
        if let ValidationOutcome::Valid {
            path,
            bump_type,
            description,
        } = &outcome.validation
        {
            output.push_str(&format!(
                "Found changeset {} ({bump_type})\n",
                display_name(path)
            ));
            if let Some(summary) = description.lines().next() {
                output.push_str(&format!("  {summary}\n"));
            }
        }
        output.push_str(&format!("Detected via {}\n", outcome.strategy));
        output
    }

    fn format_failure(&self, outcome: &VerifyOutcome) -> String {
        let mut output = String::new();
        match &outcome.validation {
            ValidationOutcome::MissingChangeset => {
                output.push_str("No changeset was added in this pull request.\n");
                output.push_str("Run `changeset-ci add` and commit the generated file.\n");
            }
            ValidationOutcome::TooManyChangesets { files } => {
                output.push_str(&format!(
                    "This pull request adds {} changesets; exactly one is allowed:\n",
                    files.len()
                ));
                for file in files {
                    output.push_str(&format!("  {}\n", display_name(file)));
                }
            }
            ValidationOutcome::Invalid { path, reason } => {
                output.push_str(&format!(
                    "Changeset {} is invalid: {reason}\n",
                    display_name(path)
                ));
            }
            ValidationOutcome::Valid { .. } => {}
        }
        output.push_str(&format!("Detected via {}\n", outcome.strategy));
        output
    }
}
