use super::dto::{ChartSegment, Macro, MacroSlice, PieChart, Summary};
use crate::journal::LogEntry;

pub const PALETTE: [&str; 4] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042"];

/// Totals over the whole log. Recomputed from scratch on every call.
pub fn summarize(entries: &[LogEntry]) -> Summary {
    let total_calories = entries.iter().map(LogEntry::total_calories).sum();
    let macro_breakdown = Macro::ORDER.map(|m| MacroSlice {
        label: m.label().to_string(),
        value: entries.iter().map(|e| macro_grams(e, m)).sum(),
    });
    Summary {
        total_calories,
        macro_breakdown,
    }
}

fn macro_grams(entry: &LogEntry, m: Macro) -> f64 {
    match m {
        Macro::Protein => entry.total_protein(),
        Macro::Carbs => entry.total_carbs(),
        Macro::Fat => entry.total_fat(),
    }
}

impl Summary {
    pub fn chart(&self) -> PieChart {
        let total: f64 = self.macro_breakdown.iter().map(|s| s.value).sum();
        let segments = self
            .macro_breakdown
            .iter()
            .enumerate()
            .map(|(i, slice)| ChartSegment {
                label: slice.label.clone(),
                value: slice.value,
                color: PALETTE[i % PALETTE.len()].to_string(),
                share: if total > 0.0 { slice.value / total } else { 0.0 },
                tooltip: format!("{}: {}", slice.label, format_amount(slice.value)),
            })
            .collect();
        PieChart { segments }
    }
}

/// Prints at most two decimals and drops trailing zeros: `190`, `0.6`, `4.35`.
pub fn format_amount(value: f64) -> String {
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}
