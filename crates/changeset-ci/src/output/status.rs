use changeset_operations::operations::StatusOutput;

use super::display_name;

pub(crate) trait StatusFormatter {
    fn format_status(&self, output: &StatusOutput) -> String;
}

pub(crate) struct PlainTextStatusFormatter;

impl PlainTextStatusFormatter {
    fn format_pending(output: &mut String, status: &StatusOutput) {
        output.push_str(&format!("Pending changesets: {}\n", status.records.len()));
        for record in &status.records {
            output.push_str(&format!(
                "  {} ({})\n",
                display_name(&record.source_path),
                record.bump_type
            ));
        }
    }

    fn format_invalid(output: &mut String, status: &StatusOutput) {
        if status.invalid.is_empty() {
            return;
        }

        output.push('\n');
        output.push_str("Invalid changesets:\n");
        for skipped in &status.invalid {
            output.push_str(&format!(
                "  {}: {}\n",
                display_name(&skipped.path),
                skipped.reason
            ));
        }
    }
}

impl StatusFormatter for PlainTextStatusFormatter {
    fn format_status(&self, status: &StatusOutput) -> String {
        let mut output = format!("Package: {}\n", status.package_name);

        if status.pending_count() == 0 {
            output.push_str("No pending changesets.\n");
            return output;
        }

        Self::format_pending(&mut output, status);
        Self::format_invalid(&mut output, status);

        if let Some(bump) = status.projected_bump {
            output.push('\n');
            output.push_str(&format!("Projected bump: {bump}\n"));
        }

        output
    }
}
