use std::fmt::Write;

use dashkit_lib::table::{Alignment, RenderedPage, SortDirection, TableBody};

const CHECKBOX_WIDTH: usize = 3;

fn pad(text: &str, width: usize, align: Alignment) -> String {
    match align {
        Alignment::Left => format!("{text:<width$}"),
        Alignment::Center => format!("{text:^width$}"),
        Alignment::Right => format!("{text:>width$}"),
    }
}

fn header_label(label: &str, sorted: Option<SortDirection>) -> String {
    match sorted {
        Some(SortDirection::Asc) => format!("{label} ↑"),
        Some(SortDirection::Desc) => format!("{label} ↓"),
        None => label.to_string(),
    }
}

/// Plain-text rendering of one table frame.
pub fn render_table(page: &RenderedPage) -> String {
    let labels: Vec<String> = page
        .headers
        .iter()
        .map(|h| header_label(&h.label, h.sorted))
        .collect();

    let mut widths: Vec<usize> = labels.iter().map(|l| l.chars().count()).collect();
    for row in page.rows() {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "Search: {}", page.search.text());

    if let Some(bar) = &page.bulk_bar {
        let actions: Vec<&str> = bar.actions.iter().map(|a| a.label.as_str()).collect();
        let _ = writeln!(out, "{} [{}]", bar.label(), actions.join("] ["));
    }

    let header: Vec<String> = page
        .headers
        .iter()
        .zip(&labels)
        .zip(&widths)
        .map(|((h, label), &w)| pad(label, w, h.align))
        .collect();
    let _ = writeln!(out, "{}  {}", pad("", CHECKBOX_WIDTH, Alignment::Left), header.join("  "));

    match &page.body {
        TableBody::Loading { skeleton_rows } => {
            let skeleton: Vec<String> = widths.iter().map(|&w| "░".repeat(w.max(1))).collect();
            for _ in 0..*skeleton_rows {
                let _ = writeln!(out, "{}  {}", pad("", CHECKBOX_WIDTH, Alignment::Left), skeleton.join("  "));
            }
        }
        TableBody::Empty { placeholder } => {
            let _ = writeln!(out, "{placeholder}");
        }
        TableBody::Rows(rows) => {
            for row in rows {
                let check = if row.selected { "[x]" } else { "[ ]" };
                let cells: Vec<String> = page
                    .headers
                    .iter()
                    .zip(&row.cells)
                    .zip(&widths)
                    .map(|((h, cell), &w)| pad(cell, w, h.align))
                    .collect();
                let _ = writeln!(out, "{check}  {}", cells.join("  ").trim_end());
            }
        }
    }

    let _ = writeln!(out, "{}  {}", page.selection_summary, page.page.label());
    out
}

#[cfg(test)]
mod tests {
    use dashkit_lib::TabularView;
    use dashkit_lib::demo::{demo_users, user_columns, users_config};

    use super::*;

    #[test]
    fn test_render_empty_table() {
        let mut view = TabularView::new(user_columns(), demo_users(), users_config());
        view.set_global_query("no such user");
        let text = render_table(&view.render());
        assert!(text.starts_with("Search: no such user\n"));
        assert!(text.contains("No results."));
        assert!(text.ends_with("0 of 0 row(s) selected.  Page 1 of 1\n"));
    }

    #[test]
    fn test_render_selected_row_and_sort_marker() {
        let mut view = TabularView::new(user_columns(), demo_users(), users_config());
        view.set_sort("name", SortDirection::Desc).unwrap();
        view.select_row("10");
        let text = render_table(&view.render());
        assert!(text.contains("Name ↓"));
        assert!(text.contains("[x]  Maria Garcia"));
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Search: Search users by name, email, or department..."));
        assert_eq!(lines.next(), Some("1 row(s) selected [Activate] [Suspend] [Delete]"));
    }
}
