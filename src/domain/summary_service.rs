//! Spending summary domain logic.
//!
//! Everything here is a pure query over a decoded [`LedgerTable`] and the
//! budget plan: month totals, per-category progress against budgets, the
//! three-tier standing classification behind the mood indicator, and the
//! recent-months projection used by the dashboard table.

use serde::{Deserialize, Serialize};

use crate::domain::models::ledger::{parse_or_zero, LedgerTable, CATEGORY_COLUMN};
use crate::domain::models::plan::BudgetPlan;

/// Three-tier classification of a spend/budget ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStanding {
    /// Ratio at or below 0.9.
    OnTrack,
    /// Ratio above 0.9, at or below 1.0.
    Warning,
    /// Ratio above 1.0.
    OverBudget,
}

/// Overall mood indicator graphic selected from the aggregate standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoodIndicator {
    Happy,
    Nervous,
    Sad,
}

/// Color tier for the overall progress gauge. Thresholds sit below the
/// standing tiers so the gauge turns before the mood does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GaugeTone {
    Green,
    Yellow,
    Red,
}

/// Progress of one category against its budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProgress {
    /// Unclamped spend/budget ratio; drives the standing tiers.
    pub ratio: f64,
    /// Ratio clamped to [0, 1] for the progress-bar fill.
    pub fill: f64,
    pub standing: BudgetStanding,
}

/// The ledger projected onto a handful of months for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    /// Kept column labels: `Category` plus the requested months that exist
    /// in the table, in the table's own column order.
    pub columns: Vec<String>,
    /// One row per category, cells aligned to `columns[1..]`. Cells stay
    /// raw strings; a missing cell projects as an empty string.
    pub rows: Vec<RecentActivityRow>,
    /// Numeric total per kept month column, bad cells coerced to zero.
    pub totals: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivityRow {
    pub category: String,
    pub cells: Vec<String>,
}

/// Stateless query service over ledger tables and budget plans.
#[derive(Clone, Default)]
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Total spend in `month` across all categories; 0.0 when the month has
    /// no column yet. Other months never contribute.
    pub fn month_total(&self, table: &LedgerTable, month: &str) -> f64 {
        table.month_total(month)
    }

    /// Classify an unclamped spend/budget ratio.
    pub fn standing(&self, ratio: f64) -> BudgetStanding {
        if ratio > 1.0 {
            BudgetStanding::OverBudget
        } else if ratio > 0.9 {
            BudgetStanding::Warning
        } else {
            BudgetStanding::OnTrack
        }
    }

    /// Progress of one category against its budget, or `None` when the
    /// category is unbudgeted (budget at or below zero) and no indicator
    /// should be rendered. Unbudgeted is distinct from 0% used.
    pub fn category_progress(&self, spend: f64, budget: f64) -> Option<CategoryProgress> {
        if budget <= 0.0 {
            return None;
        }
        let ratio = spend / budget;
        Some(CategoryProgress {
            ratio,
            fill: ratio.clamp(0.0, 1.0),
            standing: self.standing(ratio),
        })
    }

    /// Progress of `category` for `month`, looked up from the table and
    /// the plan's budget for that category.
    pub fn category_month_progress(
        &self,
        table: &LedgerTable,
        plan: &BudgetPlan,
        category: &str,
        month: &str,
    ) -> Option<CategoryProgress> {
        self.category_progress(table.month_value(category, month), plan.budget_for(category))
    }

    /// Overall mood for the month's aggregate spend against the plan's
    /// total budget. No budget at all reads as on-track.
    pub fn mood(&self, spend: f64, total_budget: f64) -> MoodIndicator {
        let ratio = if total_budget > 0.0 { spend / total_budget } else { 0.0 };
        match self.standing(ratio) {
            BudgetStanding::OverBudget => MoodIndicator::Sad,
            BudgetStanding::Warning => MoodIndicator::Nervous,
            BudgetStanding::OnTrack => MoodIndicator::Happy,
        }
    }

    /// Color tier for the overall progress gauge.
    pub fn gauge_tone(&self, ratio: f64) -> GaugeTone {
        if ratio > 0.9 {
            GaugeTone::Red
        } else if ratio > 0.75 {
            GaugeTone::Yellow
        } else {
            GaugeTone::Green
        }
    }

    /// Project the table onto the requested months.
    ///
    /// Keeps the category column plus every requested month that actually
    /// has a column, preserving the table's column order. Rows keep their
    /// raw cell text so the display shows exactly what is stored.
    pub fn recent_activity(&self, table: &LedgerTable, months: &[String]) -> RecentActivity {
        let mut columns = vec![CATEGORY_COLUMN.to_string()];
        columns.extend(
            table
                .month_labels()
                .iter()
                .filter(|label| months.iter().any(|m| m == *label))
                .cloned(),
        );
        let kept_months = &columns[1..];

        let rows: Vec<RecentActivityRow> = table
            .categories()
            .map(|category| RecentActivityRow {
                category: category.to_string(),
                cells: kept_months
                    .iter()
                    .map(|month| {
                        table
                            .raw_value(category, month)
                            .unwrap_or_default()
                            .to_string()
                    })
                    .collect(),
            })
            .collect();

        let totals = kept_months
            .iter()
            .enumerate()
            .map(|(slot, _)| {
                rows.iter()
                    .map(|row| row.cells.get(slot).map(|c| parse_or_zero(c)).unwrap_or(0.0))
                    .sum()
            })
            .collect();

        RecentActivity {
            columns,
            rows,
            totals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(text: &str) -> LedgerTable {
        LedgerTable::decode(text)
    }

    #[test]
    fn month_total_matches_column_sum() {
        let service = SummaryService::new();
        let table = table("Category,January\nFood,10\nTransportation,5\n");
        assert_eq!(service.month_total(&table, "January"), 15.0);
        assert_eq!(service.month_total(&table, "February"), 0.0);
    }

    #[test]
    fn standing_tiers_split_at_ninety_percent_and_budget() {
        let service = SummaryService::new();
        assert_eq!(service.standing(0.5), BudgetStanding::OnTrack);
        assert_eq!(service.standing(0.9), BudgetStanding::OnTrack);
        assert_eq!(service.standing(0.95), BudgetStanding::Warning);
        assert_eq!(service.standing(1.0), BudgetStanding::Warning);
        assert_eq!(service.standing(1.01), BudgetStanding::OverBudget);
    }

    #[test]
    fn category_progress_tiers() {
        let service = SummaryService::new();

        let warning = service.category_progress(95.0, 100.0).unwrap();
        assert_eq!(warning.standing, BudgetStanding::Warning);
        assert_eq!(warning.ratio, 0.95);

        let over = service.category_progress(101.0, 100.0).unwrap();
        assert_eq!(over.standing, BudgetStanding::OverBudget);
        assert_eq!(over.fill, 1.0);
        assert!(over.ratio > 1.0);
    }

    #[test]
    fn unbudgeted_category_has_no_indicator() {
        let service = SummaryService::new();
        assert_eq!(service.category_progress(5.0, 0.0), None);
        assert_eq!(service.category_progress(5.0, -1.0), None);
    }

    #[test]
    fn mood_follows_aggregate_standing() {
        let service = SummaryService::new();
        assert_eq!(service.mood(50.0, 100.0), MoodIndicator::Happy);
        assert_eq!(service.mood(95.0, 100.0), MoodIndicator::Nervous);
        assert_eq!(service.mood(101.0, 100.0), MoodIndicator::Sad);
        assert_eq!(service.mood(50.0, 0.0), MoodIndicator::Happy);
    }

    #[test]
    fn gauge_tone_turns_before_the_mood() {
        let service = SummaryService::new();
        assert_eq!(service.gauge_tone(0.5), GaugeTone::Green);
        assert_eq!(service.gauge_tone(0.8), GaugeTone::Yellow);
        assert_eq!(service.gauge_tone(0.95), GaugeTone::Red);
    }

    #[test]
    fn category_month_progress_reads_table_and_plan() {
        let service = SummaryService::new();
        let table = table("Category,January\nFood,95\n");
        let mut plan = BudgetPlan::default();
        plan.budgets.insert("Food".to_string(), 100.0);

        let progress = service
            .category_month_progress(&table, &plan, "Food", "January")
            .unwrap();
        assert_eq!(progress.standing, BudgetStanding::Warning);

        // Groceries has budget 0 in the default plan: no indicator.
        assert_eq!(
            service.category_month_progress(&table, &plan, "Groceries", "January"),
            None
        );
    }

    #[test]
    fn recent_activity_keeps_only_requested_months_in_table_order() {
        let service = SummaryService::new();
        let table = table("Category,November,December,January\nFood,1,2,3\nRent,4,5\n");
        let months = vec!["January".to_string(), "December".to_string()];

        let activity = service.recent_activity(&table, &months);
        assert_eq!(activity.columns, ["Category", "December", "January"]);
        assert_eq!(activity.rows.len(), 2);
        assert_eq!(activity.rows[0].category, "Food");
        assert_eq!(activity.rows[0].cells, ["2", "3"]);
        // Rent's short row projects the missing January cell as empty text.
        assert_eq!(activity.rows[1].cells, ["5", ""]);
        assert_eq!(activity.totals, [7.0, 3.0]);
    }

    #[test]
    fn recent_activity_on_empty_table_is_bare() {
        let service = SummaryService::new();
        let activity = service.recent_activity(&LedgerTable::default(), &["January".to_string()]);
        assert_eq!(activity.columns, ["Category"]);
        assert!(activity.rows.is_empty());
        assert!(activity.totals.is_empty());
    }
}
