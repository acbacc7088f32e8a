//! Report formatting utilities for terminal output
//!
//! Stat cards, breakdown bars and small text helpers.

use crate::reports::{CategoryShare, StatCard, TrendTone};

const BAR_WIDTH: usize = 20;

/// Hint shown in place of the breakdown when the view is empty
pub const EMPTY_BREAKDOWN: &str = "Add expenses or adjust the filters to see category insights.";

/// Create a simple bar chart representation of a whole-number percentage
pub fn format_bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format the headline cards, one per line
pub fn format_stat_cards(cards: &[StatCard]) -> String {
    let mut output = String::new();
    for card in cards {
        let marker = match card.tone {
            Some(TrendTone::Negative) => " ▲",
            Some(TrendTone::Positive) => " ▼",
            None => "",
        };
        output.push_str(&format!(
            "{:<18} {:>14}{:<2}  {}\n",
            card.label, card.value, marker, card.helper
        ));
    }
    output
}

/// Format category rows with amount, share and bar
pub fn format_breakdown(rows: &[CategoryShare], currency_symbol: &str) -> String {
    if rows.is_empty() {
        return format!("{}\n", EMPTY_BREAKDOWN);
    }

    let mut output = String::new();
    for row in rows {
        output.push_str(&format!(
            "{:<16} {:>12} {:>4}% {}\n",
            row.category.name(),
            row.total.format_with_symbol(currency_symbol),
            row.percent,
            format_bar(row.percent, BAR_WIDTH)
        ));
    }
    output
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50, 10).chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0, 4), "░░░░");
        assert_eq!(format_bar(100, 4), "████");
        assert_eq!(format_bar(88, 10).chars().filter(|c| *c == '█').count(), 9);
    }

    #[test]
    fn test_breakdown_rows() {
        let rows = vec![
            CategoryShare {
                category: Category::Housing,
                total: Money::new(dec!(1200)),
                percent: 88,
            },
            CategoryShare {
                category: Category::Food,
                total: Money::new(dec!(164.25)),
                percent: 12,
            },
        ];
        let text = format_breakdown(&rows, "$");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Housing"));
        assert!(lines[0].contains("$1,200.00"));
        assert!(lines[0].contains("88%"));
        assert!(lines[1].contains("$164.25"));
    }

    #[test]
    fn test_empty_breakdown() {
        assert_eq!(format_breakdown(&[], "$").trim_end(), EMPTY_BREAKDOWN);
    }

    #[test]
    fn test_stat_card_markers() {
        let cards = vec![
            StatCard {
                label: "Total spent",
                value: "$10.00".to_string(),
                helper: "Across 1 expenses".to_string(),
                tone: None,
            },
            StatCard {
                label: "Monthly trend",
                value: "+10.0%".to_string(),
                helper: "$10.00 → $11.00".to_string(),
                tone: Some(TrendTone::Negative),
            },
        ];
        let text = format_stat_cards(&cards);

        assert!(text.lines().next().unwrap().contains("Across 1 expenses"));
        assert!(text.lines().nth(1).unwrap().contains("+10.0% ▲"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Café au lait", 7), "Café...");
    }
}
