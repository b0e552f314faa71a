// Result Rendering
// Plain-text presentation of the classified, ordered panel result

use crate::models::{AnalysisResult, DisplayEntry, Judgement};
use crate::services::aggregation::aggregate;
use crate::services::classify::to_display_entry;
use std::fmt::Write;

const SECTION_WIDTH: usize = 80;

/// Transform a service result into the displayable sequence: best judgement
/// first, every entry labeled and clamped. Empty input means "no result to
/// show", not an error.
pub fn display_entries(result: &AnalysisResult) -> Vec<DisplayEntry> {
    aggregate(&result.per_model)
        .into_iter()
        .map(to_display_entry)
        .collect()
}

fn section(out: &mut String, title: &str) {
    let bar = "=".repeat(SECTION_WIDTH);
    let _ = writeln!(out, "{}", bar);
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", bar);
}

fn model_line(judgement: &Judgement) -> String {
    match (judgement.provider.as_deref(), judgement.model.as_deref()) {
        (Some(provider), Some(model)) => format!("{} / {}", provider, model),
        (Some(provider), None) => provider.to_string(),
        (None, Some(model)) => model.to_string(),
        (None, None) => "(unknown)".to_string(),
    }
}

fn render_entry(out: &mut String, entry: &DisplayEntry, title: &str) {
    section(out, title);
    let _ = writeln!(out, "Label     : {}", entry.label);
    let _ = writeln!(out, "Score     : {}%", entry.clamped_score);
    let _ = writeln!(out, "Model     : {}", model_line(&entry.judgement));
    let _ = writeln!(
        out,
        "Reasoning : {}",
        entry.judgement.reasoning.as_deref().unwrap_or("-")
    );
    if !entry.judgement.signals.is_empty() {
        let _ = writeln!(out, "Signals:");
        for signal in &entry.judgement.signals {
            let _ = writeln!(out, "  - {}", signal);
        }
    }
    if !entry.judgement.evidence.is_empty() {
        let _ = writeln!(out, "Evidence:");
        for excerpt in &entry.judgement.evidence {
            let _ = writeln!(out, "  - \"{}\"", excerpt);
        }
    }
}

/// Render the full sectioned report: top judgement first, then the rest.
pub fn render_report(entries: &[DisplayEntry]) -> String {
    let mut out = String::new();

    if entries.is_empty() {
        let _ = writeln!(out, "No result to show. Run an analysis to see judgements.");
        return out;
    }

    render_entry(&mut out, &entries[0], "Top Judgement");
    for (idx, entry) in entries.iter().enumerate().skip(1) {
        render_entry(&mut out, entry, &format!("Judgement {}", idx + 1));
    }
    out
}

/// Render the service's own unified summary when the envelope carries one.
pub fn render_unified_summary(result: &AnalysisResult) -> Option<String> {
    result.final_label.as_deref()?;

    let mut out = String::new();
    section(&mut out, "Unified Result");
    let _ = writeln!(
        out,
        "Label      : {}",
        result.final_label.as_deref().unwrap_or("-")
    );
    if let Some(score) = result.final_score {
        let _ = writeln!(out, "Score      : {}", score);
    }
    if let Some(confidence) = result.confidence.as_deref() {
        let _ = writeln!(out, "Confidence : {}", confidence);
    }
    if let Some(notes) = result.aggregation_notes.as_deref() {
        let _ = writeln!(out, "Notes      : {}", notes);
    }
    Some(out)
}

/// Render the single error panel shown when a request fails.
pub fn render_error(message: &str) -> String {
    let mut out = String::new();
    section(&mut out, "Request failed");
    let _ = writeln!(out, "{}", message);
    out
}
