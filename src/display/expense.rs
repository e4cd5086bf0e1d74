//! Expense and resolution display formatting
//!
//! Formats entry previews, validation issues, and day groups for
//! terminal output.

use crate::reports::DayGroup;
use crate::resolver::Resolution;
use crate::services::entry::FieldIssue;

/// Format a resolver preview: amount, cap notice, visible fields
pub fn format_resolution(resolution: &Resolution) -> String {
    let mut output = String::new();
    output.push_str(&format!("Amount: {}\n", resolution.amount));

    if let Some(notice) = resolution.cap_notice {
        output.push_str(&format!(
            "Note: amount exceeds the maximum for this type and was reduced to {}\n",
            notice.cap
        ));
    }

    let fields: Vec<String> = resolution.fields.iter().map(|f| f.to_string()).collect();
    output.push_str(&format!("Fields: {}\n", fields.join(", ")));

    output
}

/// Format field-level validation issues as a bullet list
pub fn format_issues(issues: &[FieldIssue]) -> String {
    if issues.is_empty() {
        return "Entry is valid.".to_string();
    }

    let mut output = String::new();
    output.push_str("Entry has problems:\n");
    for issue in issues {
        output.push_str(&format!("  - {}\n", issue));
    }
    output
}

/// Format day groups the way the dashboard lists them
pub fn format_day_groups(groups: &[DayGroup]) -> String {
    if groups.is_empty() {
        return "No expenses found.".to_string();
    }

    let mut output = String::new();
    for (i, group) in groups.iter().enumerate() {
        output.push_str(&format!(
            "{} · project {} · {} entries\n",
            group.date,
            group.project_id,
            group.expenses.len()
        ));

        for expense in &group.expenses {
            output.push_str(&format!(
                "  {} {} ({})\n",
                expense.id, expense.amount, expense.status
            ));
        }

        if let Some(da) = &group.allowance {
            output.push_str(&format!("  Daily allowance: {}\n", da.amount));
        }
        output.push_str(&format!("  Day total: {}\n", group.day_total()));

        if i < groups.len() - 1 {
            output.push('\n');
        }
    }

    output
}
