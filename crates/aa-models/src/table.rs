//! Columnar result table accumulated across report pages

use crate::report::ReportPage;
use aa_core::{Error, Result};
use std::io::Write;

/// Columnar result of a report: one `dimension` column of row labels plus
/// one `f64` column per metric, accumulated page by page.
///
/// Invariant: every metric column holds exactly as many entries as the
/// dimension column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportTable {
  dimension: Vec<String>,
  column_ids: Vec<String>,
  columns: Vec<Vec<f64>>,
}

impl ReportTable {
  /// Create an empty table; the column layout is fixed by the first page
  pub fn new() -> Self {
    Self::default()
  }

  /// Append one page of results.
  ///
  /// The first page fixes the set of metric columns; later pages must carry
  /// the same `columnIds`, and every row's `data` must be index-aligned with
  /// them.
  pub fn push_page(&mut self, page: &ReportPage) -> Result<()> {
    page.check_row_width()?;

    if self.column_ids.is_empty() && self.columns.is_empty() {
      self.column_ids = page.columns.column_ids.clone();
      self.columns = vec![Vec::new(); self.column_ids.len()];
    } else if self.column_ids != page.columns.column_ids {
      return Err(Error::InvalidResponse(format!(
        "page {} changed columnIds from {:?} to {:?}",
        page.number, self.column_ids, page.columns.column_ids
      )));
    }

    for row in &page.rows {
      self.dimension.push(row.value.clone());
      for (column, value) in self.columns.iter_mut().zip(&row.data) {
        column.push(*value);
      }
    }

    Ok(())
  }

  /// Number of accumulated rows
  pub fn row_count(&self) -> usize {
    self.dimension.len()
  }

  /// Whether the table holds no rows
  pub fn is_empty(&self) -> bool {
    self.dimension.is_empty()
  }

  /// The dimension column
  pub fn dimension(&self) -> &[String] {
    &self.dimension
  }

  /// Ids of the metric columns, in response order
  pub fn column_ids(&self) -> &[String] {
    &self.column_ids
  }

  /// A metric column by index
  pub fn column(&self, index: usize) -> Option<&[f64]> {
    self.columns.get(index).map(Vec::as_slice)
  }

  /// Write the table as CSV: a `dimension` header column followed by one
  /// column per metric id.
  pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(self.column_ids.len() + 1);
    header.push("dimension".to_string());
    header.extend(self.column_ids.iter().cloned());
    csv.write_record(&header).map_err(|e| Error::InvalidResponse(e.to_string()))?;

    for (i, value) in self.dimension.iter().enumerate() {
      let mut record = Vec::with_capacity(self.columns.len() + 1);
      record.push(value.clone());
      for column in &self.columns {
        record.push(column[i].to_string());
      }
      csv.write_record(&record).map_err(|e| Error::InvalidResponse(e.to_string()))?;
    }

    csv.flush()?;
    Ok(())
  }
}
