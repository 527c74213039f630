//! Patch formatting: JSON, Table, and HTML output.

use std::str::FromStr;

use crate::patch::{Patch, Target};

/// Output format for hydration patches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
    Html,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            "html" => Ok(Self::Html),
            other => Err(format!("unknown format '{other}' (expected json, table or html)")),
        }
    }
}

/// Format patches in the specified output format.
#[must_use]
pub fn format_patches(patches: &[Patch], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(patches),
        OutputFormat::Table => format_table(patches),
        OutputFormat::Html => format_html(patches),
    }
}

fn format_json(patches: &[Patch]) -> String {
    serde_json::to_string_pretty(patches).unwrap_or_else(|_| "[]".to_string())
}

fn format_table(patches: &[Patch]) -> String {
    if patches.is_empty() {
        return "(no patches)".to_string();
    }

    let columns = ["selector", "target", "value"];
    let rows: Vec<[String; 3]> = patches
        .iter()
        .map(|p| [p.selector.clone(), p.target.to_string(), one_line(&p.value)])
        .collect();

    // Calculate column widths
    let mut widths: Vec<usize> = columns.iter().map(|c| c.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut output = String::new();

    // Header
    let header: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:width$}", c, width = widths[i]))
        .collect();
    output.push_str(header.join(" | ").trim_end());
    output.push('\n');

    // Separator
    let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    output.push_str(&sep.join("-+-"));
    output.push('\n');

    // Rows
    for row in &rows {
        let vals: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:width$}", cell, width = widths[i]))
            .collect();
        output.push_str(vals.join(" | ").trim_end());
        output.push('\n');
    }

    output
}

fn format_html(patches: &[Patch]) -> String {
    let mut output = String::new();
    for patch in patches.iter().filter(|p| p.target == Target::Html) {
        output.push_str(&format!("<!-- {} -->\n", patch.selector));
        output.push_str(&patch.value);
        if !patch.value.ends_with('\n') {
            output.push('\n');
        }
    }
    if output.is_empty() {
        return "<!-- no html patches -->\n".to_string();
    }
    output
}

/// Collapse a multi-line value into one table cell, truncated.
fn one_line(value: &str) -> String {
    const MAX: usize = 60;
    let flat: String = value.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= MAX {
        return flat;
    }
    let cut: String = flat.chars().take(MAX - 3).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_patches() -> Vec<Patch> {
        vec![
            Patch::text(".hero-title", "Ada Lovelace"),
            Patch::attr(".resume-btn", "href", "/cv.pdf"),
            Patch::html(".skills-grid", "<div class=\"skill-card\">\n  Rust\n</div>\n"),
        ]
    }

    #[test]
    fn format_as_json() {
        let output = format_patches(&sample_patches(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 3);
        assert_eq!(parsed[0]["selector"], ".hero-title");
        assert_eq!(parsed[1]["target"]["attr"], "href");
    }

    #[test]
    fn format_as_table() {
        let output = format_patches(&sample_patches(), OutputFormat::Table);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("selector"));
        assert!(lines[1].contains("-+-"));
        assert!(output.contains("attr:href"));
        assert!(output.contains("<div class=\"skill-card\"> Rust </div>"));
    }

    #[test]
    fn format_as_html_keeps_only_fragments() {
        let output = format_patches(&sample_patches(), OutputFormat::Html);
        assert!(output.starts_with("<!-- .skills-grid -->\n"));
        assert!(output.contains("skill-card"));
        assert!(!output.contains("Ada Lovelace"));
    }

    #[test]
    fn format_empty_patches() {
        assert_eq!(format_patches(&[], OutputFormat::Table), "(no patches)");
        assert_eq!(format_patches(&[], OutputFormat::Json), "[]");
        assert_eq!(
            format_patches(&[], OutputFormat::Html),
            "<!-- no html patches -->\n"
        );
    }

    #[test]
    fn long_values_are_truncated_in_tables() {
        let long = "x".repeat(100);
        let output = format_patches(&[Patch::text(".a", long)], OutputFormat::Table);
        assert!(output.contains(&format!("{}...", "x".repeat(57))));
    }

    #[test]
    fn parse_output_format() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("html".parse::<OutputFormat>(), Ok(OutputFormat::Html));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
