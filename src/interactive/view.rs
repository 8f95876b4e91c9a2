use crate::core::wizard::{ProfileField, ProfileRecord, SubmitReceipt, WizardStep, review_sections};
use crate::ui::style as ui;

pub fn print_welcome_banner() {
    println!();
    println!("  {}", ui::accent("sparkform"));
    println!("  {}", ui::header("Skilled trades profile"));
    println!(
        "  {}",
        ui::dim("Fill in each step; long answers can be enhanced with AI.")
    );
}

pub fn step_heading(step: WizardStep) -> String {
    format!("[{}/{}] {}", step.number(), WizardStep::TOTAL, step.title())
}

pub fn print_step(step: WizardStep) {
    println!();
    println!(
        "  {} {}",
        ui::accent(format!("[{}/{}]", step.number(), WizardStep::TOTAL)),
        ui::header(step.title())
    );
    println!("  {}", ui::dim(step.description()));
    println!("  {}", ui::dim("─".repeat(50)));
}

/// Review sections as plain lines, one per row, headed by the section title.
pub fn review_lines(record: &ProfileRecord) -> Vec<String> {
    let mut lines = Vec::new();
    for section in review_sections(record) {
        lines.push(format!("{} (step {})", section.title, section.edit_step));
        for row in section.rows {
            lines.push(format!("  {}: {}", row.label, row.value));
        }
    }
    lines
}

pub fn print_review(record: &ProfileRecord) {
    for section in review_sections(record) {
        println!();
        println!(
            "  {} {}",
            ui::header(section.title),
            ui::dim(format!("(edit: step {})", section.edit_step))
        );
        for row in section.rows {
            let value = if row.provided {
                ui::value(&row.value)
            } else {
                ui::dim(&row.value)
            };
            println!("    {} {}", ui::label(format!("{}:", row.label)), value);
        }
    }
}

pub fn print_missing(missing: &[ProfileField]) {
    println!();
    println!("  {} Please fill in all required fields:", ui::warn("!"));
    for field in missing {
        println!("    {} {}", ui::warn("-"), field.label());
    }
}

pub fn print_receipt(receipt: &SubmitReceipt) {
    println!();
    println!(
        "  {} Profile submitted ({} fields) at {}",
        ui::success("✓"),
        receipt.filled_fields,
        receipt.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_counts_steps() {
        assert_eq!(
            step_heading(WizardStep::SkillsExperience),
            "[2/4] Skills & Experience"
        );
    }

    #[test]
    fn review_lines_fill_in_not_provided() {
        let mut record = ProfileRecord::default();
        record.set(ProfileField::FullName, "Dee Park");
        let lines = review_lines(&record);
        assert_eq!(lines[0], "Personal Information (step 1)");
        assert_eq!(lines[1], "  Full Name: Dee Park");
        assert_eq!(lines[2], "  Email: Not provided");
    }
}
