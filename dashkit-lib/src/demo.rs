//! Demo user directory
//!
//! A small users dataset with its column layout, table configuration and
//! bulk action handler. The CLI runs the table view over it.

use std::collections::HashSet;

use chrono::NaiveDate;
use log::info;

use crate::config::TableConfig;
use crate::model::Record;
use crate::model::Value;
use crate::table::{ActionVariant, BulkAction, ColumnSpec, StatusOption};

const USERS: &[(&str, &str, &str, &str, &str, &str, (i32, u32, u32), (i32, u32, u32))] = &[
    ("1", "John Doe", "john.doe@example.com", "Admin", "Engineering", "active", (2023, 1, 15), (2025, 6, 1)),
    ("2", "Jane Smith", "j.doe@x.com", "Editor", "Marketing", "active", (2023, 3, 22), (2025, 5, 30)),
    ("3", "Michael Chen", "michael.chen@example.com", "Viewer", "Sales", "pending", (2024, 11, 2), (2025, 5, 12)),
    ("4", "Emily Davis", "emily.davis@example.com", "Editor", "Engineering", "active", (2022, 7, 9), (2025, 6, 2)),
    ("5", "Robert Wilson", "robert.wilson@example.com", "Viewer", "Support", "inactive", (2021, 10, 30), (2024, 12, 18)),
    ("6", "Sarah Johnson", "sarah.johnson@example.com", "Admin", "Operations", "active", (2022, 2, 14), (2025, 6, 3)),
    ("7", "David Brown", "david.brown@example.com", "Viewer", "Finance", "suspended", (2023, 8, 5), (2025, 2, 27)),
    ("8", "Lisa Anderson", "lisa.anderson@example.com", "Editor", "Marketing", "active", (2024, 1, 8), (2025, 5, 29)),
    ("9", "James Taylor", "james.taylor@example.com", "Viewer", "Sales", "pending", (2025, 4, 17), (2025, 4, 17)),
    ("10", "Maria Garcia", "maria.garcia@example.com", "Admin", "Engineering", "active", (2020, 6, 1), (2025, 6, 1)),
    ("11", "Thomas Martinez", "thomas.martinez@example.com", "Viewer", "Support", "active", (2023, 12, 11), (2025, 5, 21)),
    ("12", "Jennifer Lee", "jennifer.lee@example.com", "Editor", "Design", "inactive", (2022, 9, 19), (2025, 1, 6)),
    ("13", "Christopher White", "chris.white@example.com", "Viewer", "Finance", "active", (2024, 5, 28), (2025, 5, 31)),
    ("14", "Amanda Harris", "amanda.harris@example.com", "Editor", "Design", "suspended", (2023, 6, 3), (2025, 3, 9)),
    ("15", "Daniel Clark", "daniel.clark@example.com", "Viewer", "Operations", "active", (2024, 8, 21), (2025, 6, 2)),
    ("16", "Jessica Lewis", "jessica.lewis@example.com", "Admin", "Support", "pending", (2025, 5, 6), (2025, 5, 6)),
    ("17", "Matthew Walker", "matthew.walker@example.com", "Viewer", "Sales", "active", (2021, 3, 16), (2025, 5, 27)),
    ("18", "Ashley Hall", "ashley.hall@example.com", "Editor", "Marketing", "inactive", (2022, 11, 25), (2024, 10, 14)),
    ("19", "Joshua Young", "joshua.young@example.com", "Viewer", "Engineering", "active", (2024, 2, 29), (2025, 6, 3)),
    ("20", "Stephanie King", "stephanie.king@example.com", "Editor", "Operations", "active", (2023, 4, 10), (2025, 5, 25)),
];

fn ymd((y, m, d): (i32, u32, u32)) -> Value {
    NaiveDate::from_ymd_opt(y, m, d).map(Value::from).unwrap_or_default()
}

/// The demo user directory.
pub fn demo_users() -> Vec<Record> {
    USERS
        .iter()
        .map(|&(id, name, email, role, department, status, joined, last_active)| {
            Record::new(id)
                .set("name", name)
                .set("email", email)
                .set("role", role)
                .set("department", department)
                .set("status", status)
                .set("joinDate", ymd(joined))
                .set("lastActive", ymd(last_active))
        })
        .collect()
}

/// `Jan 15, 2023`
fn short_date(_: &Record, value: &Value) -> String {
    match value {
        Value::Date(date) => date.format("%b %-d, %Y").to_string(),
        other => other.display(),
    }
}

/// Column layout of the users page.
pub fn user_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::field("name", "Name").sortable(),
        ColumnSpec::field("email", "Email").sortable().hideable(),
        ColumnSpec::field("role", "Role").sortable().hideable(),
        ColumnSpec::field("department", "Department").sortable().hideable(),
        ColumnSpec::field("status", "Status").sortable().hideable(),
        ColumnSpec::field("joinDate", "Join Date")
            .sortable()
            .hideable()
            .format(short_date),
        ColumnSpec::field("lastActive", "Last Active")
            .sortable()
            .hideable()
            .format(short_date),
    ]
}

/// Table configuration of the users page.
pub fn users_config() -> TableConfig {
    TableConfig::new()
        .with_search_fields(["name", "email", "department"])
        .with_search_placeholder("Search users by name, email, or department...")
        .with_status_options(vec![
            StatusOption::new("active", "Active"),
            StatusOption::new("inactive", "Inactive"),
            StatusOption::new("pending", "Pending"),
            StatusOption::new("suspended", "Suspended"),
        ])
        .with_bulk_actions(vec![
            BulkAction::new("Activate", "activate"),
            BulkAction::new("Suspend", "suspend"),
            BulkAction::new("Delete", "delete").variant(ActionVariant::Destructive),
        ])
        .with_display_name("joinDate", "Join Date")
        .with_display_name("lastActive", "Last Active")
}

/// Applies a users-page bulk action to `users` and returns the outcome
/// message.
///
/// `activate` and `suspend` set the status of the matching users, `delete`
/// removes them. Any other action changes nothing.
pub fn apply_user_action(users: &mut Vec<Record>, action: &str, ids: &[String]) -> String {
    let targets: HashSet<&str> = ids.iter().map(String::as_str).collect();
    let count = ids.len();

    let message = match action {
        "activate" | "suspend" => {
            let status = if action == "activate" { "active" } else { "suspended" };
            for user in users.iter_mut().filter(|u| targets.contains(u.id())) {
                user.insert("status", status);
            }
            format!("{count} user(s) {}", past_tense(action))
        }
        "delete" => {
            users.retain(|u| !targets.contains(u.id()));
            format!("{count} user(s) deleted")
        }
        other => format!("Bulk action: {other}"),
    };
    info!("{message}");
    message
}

fn past_tense(action: &str) -> &'static str {
    match action {
        "activate" => "activated",
        "suspend" => "suspended",
        _ => "updated",
    }
}
