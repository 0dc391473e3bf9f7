//! Rendering of dedup reports for the terminal

use crate::core::config::OutputConfig;
use crate::core::dedup::DedupReport;

pub const ORIGINAL_LABEL: &str = "Original Array: ";

/// `[1, 2, 3]`, matching the usual bracketed list layout
pub fn format_values(values: &[i32]) -> String {
    let joined = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

/// Label left-aligned and padded to `width` columns, followed by the values.
/// Labels longer than `width` are not truncated.
pub fn format_line(label: &str, values: &[i32], width: usize) -> String {
    format!("{:<width$}{}", label, format_values(values), width = width)
}

pub fn render_text(report: &DedupReport, output: &OutputConfig) -> String {
    let mut lines = Vec::with_capacity(report.results.len() + 1);

    if output.show_original {
        lines.push(format_line(ORIGINAL_LABEL, &report.original, output.label_width));
    }
    for result in &report.results {
        lines.push(format_line(
            result.method.label(),
            &result.values,
            output.label_width,
        ));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

pub fn render_json(report: &DedupReport) -> Result<String, crate::DedupError> {
    Ok(serde_json::to_string_pretty(report)?)
}
