//! Ledger table model and codec.
//!
//! The persisted ledger is a flat text file: one header line of column
//! labels (`Category` followed by month names), then one comma-separated
//! row per category. Month columns appear in the order they were first
//! logged, not calendar order. Decoding keeps every cell as a raw string;
//! numeric meaning is applied at the point of use via [`parse_or_zero`].
//!
//! The format does no quoting, so a category name containing a comma
//! corrupts its row shape. Use the export service for data that has to
//! survive such names.

use std::collections::BTreeMap;

/// Label of the leading header column.
pub const CATEGORY_COLUMN: &str = "Category";

/// Parse a ledger cell as a number, coercing anything unparseable to 0.0.
///
/// Malformed or missing values are never an error anywhere in the ledger;
/// this helper is the one place that policy lives.
pub fn parse_or_zero(field: &str) -> f64 {
    field.trim().parse::<f64>().unwrap_or(0.0)
}

/// Render an amount the way ledger cells store numbers: whole numbers keep
/// a trailing `.0` (`"20.0"`), fractional values print minimally (`"12.5"`).
fn format_cell(value: f64) -> String {
    let rendered = value.to_string();
    if rendered.contains('.') {
        rendered
    } else {
        format!("{rendered}.0")
    }
}

/// In-memory form of the persisted ledger: ordered column labels plus raw
/// cell values keyed by category name. Categories iterate in sorted order
/// by construction, which is what makes encoding deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerTable {
    columns: Vec<String>,
    rows: BTreeMap<String, Vec<String>>,
}

impl LedgerTable {
    /// Decode persisted ledger text.
    ///
    /// Blank text decodes to an empty table (nothing logged yet). The first
    /// non-blank line is the header; every later non-blank line is a data
    /// row whose first field is the category name. Row width is not
    /// validated against the header. Short rows read as zero downstream.
    pub fn decode(text: &str) -> Self {
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());
        let Some(header) = lines.next() else {
            return Self::default();
        };
        let columns = header.split(',').map(str::to_string).collect();
        let mut rows = BTreeMap::new();
        for line in lines {
            let mut fields = line.split(',').map(str::to_string);
            let Some(category) = fields.next() else { continue };
            rows.insert(category, fields.collect());
        }
        Self { columns, rows }
    }

    /// Encode the table back to ledger text.
    ///
    /// Rows are emitted in sorted category order and right-padded with
    /// `"0.0"` to one field per month column, so re-encoding a decoded
    /// table is byte-stable after the first normalization pass.
    pub fn encode(&self) -> String {
        if self.columns.is_empty() && self.rows.is_empty() {
            return String::new();
        }
        let mut out = String::new();
        out.push_str(&self.columns.join(","));
        out.push('\n');
        let width = self.columns.len().saturating_sub(1);
        for (category, values) in &self.rows {
            out.push_str(category);
            for value in values {
                out.push(',');
                out.push_str(value);
            }
            for _ in values.len()..width {
                out.push_str(",0.0");
            }
            out.push('\n');
        }
        out.trim().to_string()
    }

    /// Accumulate `amount` into the cell for `category` under `month`,
    /// creating the month column and/or category row on demand.
    ///
    /// A new month column lands at the end of the header, so a month logged
    /// late appears after months that came before it chronologically.
    /// Repeated calls for the same cell sum rather than overwrite.
    pub fn record(&mut self, category: &str, month: &str, amount: f64) {
        if self.columns.is_empty() {
            self.columns.push(CATEGORY_COLUMN.to_string());
        }
        // Value slots start one left of the header: position 0 is the
        // category label, not a month.
        let slot = match self.columns.iter().position(|label| label == month) {
            Some(index) => index - 1,
            None => {
                self.columns.push(month.to_string());
                self.columns.len() - 2
            }
        };
        let values = self.rows.entry(category.to_string()).or_default();
        while values.len() <= slot {
            values.push("0.0".to_string());
        }
        let total = parse_or_zero(&values[slot]) + amount;
        values[slot] = format_cell(total);
    }

    /// Sum of the column for `month` across all categories; 0.0 when the
    /// month has no column. Only the exactly matching label contributes.
    pub fn month_total(&self, month: &str) -> f64 {
        let Some(slot) = self.month_slot(month) else {
            return 0.0;
        };
        self.rows
            .values()
            .map(|values| values.get(slot).map(|v| parse_or_zero(v)).unwrap_or(0.0))
            .sum()
    }

    /// The cell for `(category, month)` as a number; 0.0 when the month,
    /// the category, or the cell itself is absent or unparseable.
    pub fn month_value(&self, category: &str, month: &str) -> f64 {
        let Some(slot) = self.month_slot(month) else {
            return 0.0;
        };
        self.rows
            .get(category)
            .and_then(|values| values.get(slot))
            .map(|v| parse_or_zero(v))
            .unwrap_or(0.0)
    }

    /// Header labels, leading `Category` column included.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Month labels in first-logged order.
    pub fn month_labels(&self) -> &[String] {
        if self.columns.is_empty() {
            &[]
        } else {
            &self.columns[1..]
        }
    }

    /// Category names in sorted order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// Raw cell values for `category`, right-padded to one per month column.
    pub fn padded_values(&self, category: &str) -> Vec<String> {
        let width = self.columns.len().saturating_sub(1);
        let mut values = self.rows.get(category).cloned().unwrap_or_default();
        while values.len() < width {
            values.push("0.0".to_string());
        }
        values
    }

    /// Raw cell for `(category, month)`, if both exist and the row reaches
    /// that slot.
    pub fn raw_value(&self, category: &str, month: &str) -> Option<&str> {
        let slot = self.month_slot(month)?;
        self.rows
            .get(category)
            .and_then(|values| values.get(slot))
            .map(String::as_str)
    }

    /// True when nothing has ever been logged.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }

    fn month_slot(&self, month: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|label| label == month)
            .and_then(|index| index.checked_sub(1))
    }
}
