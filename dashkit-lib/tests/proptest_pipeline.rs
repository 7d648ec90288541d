use dashkit_lib::TabularView;
use dashkit_lib::config::TableConfig;
use dashkit_lib::model::Record;
use dashkit_lib::table::{
    ColumnSpec, FilterState, PaginationState, SearchMode, SortDirection, filter_rows, sort_indices,
};
use proptest::prelude::*;

// Rows with a small key space so sorts see plenty of ties.
fn arb_rows() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(("[a-c]{0,2}", 0i64..5), 0..60).prop_map(|cells| {
        cells
            .into_iter()
            .enumerate()
            .map(|(i, (name, rank))| Record::new(i.to_string()).set("name", name).set("rank", rank))
            .collect()
    })
}

fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::field("name", "Name").sortable(),
        ColumnSpec::field("rank", "Rank").sortable(),
    ]
}

proptest! {
    /// Property: filtering the filtered rows again changes nothing
    #[test]
    fn prop_filter_idempotent(rows in arb_rows(), query in "[a-c]{0,2}") {
        let columns = columns();
        let state = FilterState { global_query: query, column_filter: None };
        let once = filter_rows(&rows, &columns, &state, &[], SearchMode::Substring);
        let kept: Vec<Record> = once.iter().map(|&i| rows[i].clone()).collect();
        let twice = filter_rows(&kept, &columns, &state, &[], SearchMode::Substring);
        prop_assert_eq!(twice, (0..kept.len()).collect::<Vec<_>>());
    }

    /// Property: sorting is deterministic and stable
    #[test]
    fn prop_sort_stable(rows in arb_rows(), desc in any::<bool>()) {
        let columns = columns();
        let direction = if desc { SortDirection::Desc } else { SortDirection::Asc };

        let mut first: Vec<usize> = (0..rows.len()).collect();
        sort_indices(&mut first, &rows, &columns[1], direction);
        let mut second: Vec<usize> = (0..rows.len()).collect();
        sort_indices(&mut second, &rows, &columns[1], direction);
        prop_assert_eq!(&first, &second);

        // Equal keys keep source order.
        for pair in first.windows(2) {
            let (a, b) = (&rows[pair[0]], &rows[pair[1]]);
            if a.get("rank") == b.get("rank") {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }

    /// Property: page count is ceil(n / size) and the last page holds the remainder
    #[test]
    fn prop_page_counts(len in 0usize..500, size in 1usize..60) {
        let mut pagination = PaginationState::new(size);
        let pages = pagination.page_count(len);
        prop_assert_eq!(pages, len.div_ceil(size));

        if len > 0 {
            pagination.set_page_index(pages - 1, len);
            let window = pagination.window(len);
            let expected = if len % size == 0 { size } else { len % size };
            prop_assert_eq!(window.len(), expected);
        }
    }

    /// Property: the query never changes which ids are selected
    #[test]
    fn prop_selection_survives_query(rows in arb_rows(), query in "[a-c]{0,2}", picks in prop::collection::vec(any::<prop::sample::Index>(), 0..10)) {
        prop_assume!(!rows.is_empty());
        let mut view = TabularView::new(columns(), rows.clone(), TableConfig::default());
        for pick in &picks {
            view.select_row(rows[pick.index(rows.len())].id());
        }
        let before = view.selection().selected();
        view.set_global_query(query);
        view.toggle_sort("name").unwrap();
        view.set_global_query("");
        prop_assert_eq!(view.selection().selected(), before);
        prop_assert_eq!(view.page_index(), 0);
    }
}
