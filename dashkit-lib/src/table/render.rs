//! Snapshot of everything a renderer needs to draw one table frame.

use super::sort::SortDirection;
use super::view::TabularView;
use super::{Alignment, BulkAction};

/// Text shown in place of rows when nothing matches.
pub const EMPTY_PLACEHOLDER: &str = "No results.";

/// Skeleton rows drawn while loading.
pub const SKELETON_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub id: String,
    pub label: String,
    pub align: Alignment,
    pub sortable: bool,
    /// Direction when this column drives the sort.
    pub sorted: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub id: String,
    pub cells: Vec<String>,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub filtered: usize,
    pub total: usize,
    pub can_previous: bool,
    pub can_next: bool,
}

impl PageInfo {
    /// `"Page 1 of 3"`. An empty table still reads as page 1.
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page_index + 1, self.page_count.max(1))
    }
}

/// Bar shown above the table while rows are selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkBar {
    pub selected: usize,
    pub actions: Vec<BulkAction>,
}

impl BulkBar {
    pub fn label(&self) -> String {
        format!("{} row(s) selected", self.selected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Loading { skeleton_rows: usize },
    Empty { placeholder: &'static str },
    Rows(Vec<RenderedRow>),
}

/// Toolbar search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBox {
    pub query: String,
    pub placeholder: String,
}

impl SearchBox {
    /// The query, or the placeholder while the query is empty.
    pub fn text(&self) -> &str {
        if self.query.is_empty() { &self.placeholder } else { &self.query }
    }
}

/// One frame of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub search: SearchBox,
    pub headers: Vec<HeaderCell>,
    pub body: TableBody,
    pub page: PageInfo,
    pub selection_summary: String,
    pub bulk_bar: Option<BulkBar>,
    pub export_enabled: bool,
}

impl RenderedPage {
    pub fn is_empty(&self) -> bool {
        matches!(self.body, TableBody::Empty { .. })
    }

    pub fn rows(&self) -> &[RenderedRow] {
        match &self.body {
            TableBody::Rows(rows) => rows,
            _ => &[],
        }
    }
}

impl TabularView {
    /// Build the current frame.
    pub fn render(&self) -> RenderedPage {
        let columns = self.visible_columns();
        let sort = self.sort_state();

        let headers = columns
            .iter()
            .map(|c| HeaderCell {
                id: c.id.clone(),
                label: c.header.clone(),
                align: c.align,
                sortable: c.sortable,
                sorted: (sort.column_id.as_deref() == Some(c.id.as_str())).then_some(sort.direction),
            })
            .collect();

        let page_rows = self.page_rows();
        let body = if self.is_loading() {
            TableBody::Loading {
                skeleton_rows: SKELETON_ROWS,
            }
        } else if page_rows.is_empty() {
            TableBody::Empty {
                placeholder: EMPTY_PLACEHOLDER,
            }
        } else {
            TableBody::Rows(
                page_rows
                    .iter()
                    .map(|record| RenderedRow {
                        id: record.id().to_string(),
                        cells: columns.iter().map(|c| c.cell(record)).collect(),
                        selected: self.is_selected(record.id()),
                    })
                    .collect(),
            )
        };

        let filtered = self.filtered_count();
        let page = PageInfo {
            page_index: self.page_index(),
            page_count: self.page_count(),
            page_size: self.page_size(),
            filtered,
            total: self.rows().len(),
            can_previous: self.can_previous_page(),
            can_next: self.can_next_page(),
        };

        let selected = self.selected_count();
        let bulk_bar = (selected > 0).then(|| BulkBar {
            selected,
            actions: self.bulk_actions(),
        });

        RenderedPage {
            search: SearchBox {
                query: self.global_query().to_string(),
                placeholder: self.config().search_placeholder.clone(),
            },
            headers,
            body,
            page,
            selection_summary: self.selection_summary(),
            bulk_bar,
            export_enabled: self.config().enable_export,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableConfig;
    use crate::model::Record;
    use crate::table::ColumnSpec;

    fn view(n: usize) -> TabularView {
        let rows = (0..n)
            .map(|i| Record::new(format!("r{i}")).set("name", format!("row {i}")))
            .collect();
        TabularView::new(
            vec![ColumnSpec::field("name", "Name").sortable()],
            rows,
            TableConfig::default(),
        )
    }

    #[test]
    fn test_render_rows_and_page_label() {
        let mut view = view(12);
        view.toggle_row("r1");
        view.toggle_sort("name").unwrap();
        let page = view.render();
        assert_eq!(page.rows().len(), 10);
        assert!(page.rows()[1].selected);
        assert_eq!(page.headers[0].sorted, Some(SortDirection::Asc));
        assert_eq!(page.page.label(), "Page 1 of 2");
        assert_eq!(page.bulk_bar.unwrap().label(), "1 row(s) selected");
    }

    #[test]
    fn test_render_empty_placeholder() {
        let mut view = view(3);
        view.set_global_query("zzz");
        let page = view.render();
        assert!(page.is_empty());
        assert_eq!(page.body, TableBody::Empty { placeholder: "No results." });
        assert_eq!(page.page.page_count, 0);
        assert_eq!(page.page.label(), "Page 1 of 1");
        assert!(page.bulk_bar.is_none());
    }

    #[test]
    fn test_render_search_box() {
        let mut view = view(3);
        view.set_global_query("");
        let search = view.render().search;
        assert_eq!(search.placeholder, "Search...");
        assert_eq!(search.text(), "Search...");

        view.set_global_query("row 1");
        let search = view.render().search;
        assert_eq!(search.query, "row 1");
        assert_eq!(search.text(), "row 1");
    }

    #[test]
    fn test_render_loading_skeleton() {
        let mut view = view(3);
        view.set_loading(true);
        assert_eq!(view.render().body, TableBody::Loading { skeleton_rows: 5 });
    }
}
