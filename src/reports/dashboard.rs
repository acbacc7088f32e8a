//! Dashboard Report
//!
//! Everything the dashboard shows for one pair of filters: the filtered view,
//! its summary and category breakdown, the monthly trend and the month
//! picker. Rebuilt from scratch whenever the store or the filters change.

use crate::config::Settings;
use crate::display::expense::format_expense_table;
use crate::display::report::{format_breakdown, format_stat_cards};
use crate::models::{Expense, Money, MonthKey};

use super::filter::ExpenseFilter;
use super::months::{month_options, MonthOption};
use super::summary::{CategoryShare, SpendingSummary};
use super::trend::{MonthlyTrend, TrendTone};

/// One headline figure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub helper: String,
    /// `None` for cards that carry no good/bad reading
    pub tone: Option<TrendTone>,
}

/// Dashboard Report
#[derive(Debug, Clone)]
pub struct DashboardReport {
    /// Filters the view was built with
    pub filter: ExpenseFilter,
    /// Matching expenses in store order
    pub view: Vec<Expense>,
    pub summary: SpendingSummary,
    /// Category rows, largest first
    pub breakdown: Vec<CategoryShare>,
    /// Trend for the selected month, or for `today` when all months are shown
    pub trend: MonthlyTrend,
    /// Months available in the whole store
    pub months: Vec<MonthOption>,
}

impl DashboardReport {
    /// Generate the dashboard for `filter`
    ///
    /// `today` is the month used as the trend reference when the month filter
    /// is `all`. The trend and month list always look at the whole store.
    pub fn generate(expenses: &[Expense], filter: ExpenseFilter, today: MonthKey) -> Self {
        let view = filter.apply(expenses);
        let summary = SpendingSummary::from_expenses(&view);
        let breakdown = summary.breakdown();
        let trend = MonthlyTrend::calculate(expenses, filter.month.selected_or(today));

        tracing::debug!(
            month = %filter.month,
            category = %filter.category,
            matched = view.len(),
            "generated dashboard"
        );

        Self {
            filter,
            view,
            summary,
            breakdown,
            trend,
            months: month_options(expenses),
        }
    }

    /// The four headline cards
    pub fn stat_cards(&self, currency_symbol: &str) -> Vec<StatCard> {
        let money = |m: Money| m.format_with_symbol(currency_symbol);

        let largest = if self.summary.is_empty() {
            "-".to_string()
        } else {
            money(self.summary.max)
        };
        let top = match self.summary.top_category() {
            Some(category) => format!("Category: {}", category),
            None => "No data".to_string(),
        };
        let trend_helper = if self.trend.has_baseline() {
            format!(
                "{} → {}",
                money(self.trend.previous_total),
                money(self.trend.current_total)
            )
        } else {
            "Add previous month data".to_string()
        };

        vec![
            StatCard {
                label: "Total spent",
                value: money(self.summary.total),
                helper: format!("Across {} expenses", self.summary.count),
                tone: None,
            },
            StatCard {
                label: "Average expense",
                value: money(self.summary.average),
                helper: "Per logged entry".to_string(),
                tone: None,
            },
            StatCard {
                label: "Largest expense",
                value: largest,
                helper: top,
                tone: None,
            },
            StatCard {
                label: "Monthly trend",
                value: self.trend.format_delta(),
                helper: trend_helper,
                tone: Some(self.trend.tone()),
            },
        ]
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Expense Dashboard: month {}, category {}\n",
            self.filter.month, self.filter.category
        ));
        output.push_str(&"=".repeat(60));
        output.push_str("\n\n");

        output.push_str(&format_stat_cards(&self.stat_cards(&settings.currency_symbol)));
        output.push('\n');

        output.push_str("Category Breakdown\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format_breakdown(&self.breakdown, &settings.currency_symbol));
        output.push('\n');

        output.push_str("Expenses\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format_expense_table(&self.view, settings));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::reports::test_support::{expense, sample_expenses};

    fn key(s: &str) -> MonthKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_month_filter_drives_trend_reference() {
        let expenses = sample_expenses();
        let filter = ExpenseFilter::new().month(key("2024-04"));
        let report = DashboardReport::generate(&expenses, filter, key("2026-10"));

        assert_eq!(report.view.len(), 6);
        assert_eq!(report.trend.reference, key("2024-04"));
        assert_eq!(report.trend.format_delta(), "+427.2%");
    }

    #[test]
    fn test_all_months_uses_today() {
        let expenses = sample_expenses();
        let report = DashboardReport::generate(&expenses, ExpenseFilter::new(), key("2026-10"));

        assert_eq!(report.view.len(), 10);
        assert_eq!(report.trend.reference, key("2026-10"));
        assert!(!report.trend.has_baseline());
    }

    #[test]
    fn test_trend_ignores_category_filter() {
        let expenses = sample_expenses();
        let filter = ExpenseFilter::new()
            .month(key("2024-04"))
            .category(Category::Food);
        let report = DashboardReport::generate(&expenses, filter, key("2026-10"));

        assert_eq!(report.view.len(), 2);
        assert_eq!(report.trend.current_total.to_string(), "$1,506.55");
        assert_eq!(report.months.len(), 2);
    }

    #[test]
    fn test_stat_cards() {
        let expenses = vec![
            expense("Rent", Category::Housing, "1200", "2024-04-01"),
            expense("Groceries", Category::Food, "164.25", "2024-04-06"),
        ];
        let report = DashboardReport::generate(&expenses, ExpenseFilter::new(), key("2024-04"));
        let cards = report.stat_cards("$");

        assert_eq!(cards[0].value, "$1,364.25");
        assert_eq!(cards[0].helper, "Across 2 expenses");
        assert_eq!(cards[1].value, "$682.13");
        assert_eq!(cards[2].value, "$1,200.00");
        assert_eq!(cards[2].helper, "Category: Housing");
        assert_eq!(cards[3].value, "N/A");
        assert_eq!(cards[3].helper, "Add previous month data");
        assert_eq!(cards[3].tone, Some(TrendTone::Positive));
    }

    #[test]
    fn test_stat_cards_with_baseline() {
        let filter = ExpenseFilter::new().month(key("2024-04"));
        let report = DashboardReport::generate(&sample_expenses(), filter, key("2026-10"));
        let trend = &report.stat_cards("$")[3];

        assert_eq!(trend.value, "+427.2%");
        assert_eq!(trend.helper, "$285.79 → $1,506.55");
        assert_eq!(trend.tone, Some(TrendTone::Negative));
    }

    #[test]
    fn test_empty_view() {
        let filter = ExpenseFilter::new().month(key("2023-01"));
        let report = DashboardReport::generate(&sample_expenses(), filter, key("2026-10"));
        let cards = report.stat_cards("$");

        assert!(report.view.is_empty());
        assert!(report.breakdown.is_empty());
        assert_eq!(cards[0].value, "$0.00");
        assert_eq!(cards[2].value, "-");
        assert_eq!(cards[2].helper, "No data");

        let text = report.format_terminal(&Settings::default());
        assert!(text.contains("No expenses logged for this view."));
        assert!(text.contains("Add expenses or adjust the filters to see category insights."));
    }

    #[test]
    fn test_format_terminal() {
        let filter = ExpenseFilter::new().month(key("2024-04"));
        let report = DashboardReport::generate(&sample_expenses(), filter, key("2026-10"));
        let text = report.format_terminal(&Settings::default());

        assert!(text.contains("month 2024-04, category all"));
        assert!(text.contains("Total spent"));
        assert!(text.contains("$1,506.55"));
        assert!(text.contains("Housing"));
        assert!(text.contains("Apr 1"));
    }
}
