//! CSV export of the filtered, sorted rows.

use std::io::Write;

use log::info;

use super::view::TabularView;
use crate::error::TableError;

impl TabularView {
    /// Writes every filtered row (all pages, display order) as CSV over the
    /// visible columns. Headers use the column display names. Returns the
    /// number of data rows written.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize, TableError> {
        let columns = self.visible_columns();
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record(columns.iter().map(|c| self.column_display_name(&c.id)))?;

        let rows = self.filtered_rows();
        for record in &rows {
            csv.write_record(columns.iter().map(|c| c.value(record).display()))?;
        }
        csv.flush()?;

        info!("exported {} row(s) over {} column(s)", rows.len(), columns.len());
        Ok(rows.len())
    }
}
