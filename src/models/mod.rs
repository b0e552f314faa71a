// Panelscope Data Models
// Wire types for the analysis service plus display-side derived types

use serde::{Deserialize, Serialize};
use std::fmt;

// ============ Analyze Request ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

// ============ Per-Model Judgement ============

/// One contributing model's assessment of the submitted text.
/// Deserialized leniently: the service may omit any field, and even a
/// missing score must not fail the display (it reads as 0).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Judgement {
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub ai_likelihood_score: Option<f64>,
    #[serde(default)]
    pub reasoning: Option<String>,
    #[serde(default)]
    pub signals: Vec<String>,
    #[serde(default)]
    pub evidence: Vec<String>,
}

// ============ Analysis Result Envelope ============

/// Response envelope from the analysis service. Only `per_model` drives the
/// client; the unified fields are computed server-side and passed through.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnalysisResult {
    #[serde(default)]
    pub per_model: Vec<Judgement>,
    #[serde(default)]
    pub final_label: Option<String>,
    #[serde(default)]
    pub final_score: Option<i32>,
    #[serde(default)]
    pub confidence: Option<String>,
    #[serde(default)]
    pub aggregation_notes: Option<String>,
}

// ============ Risk Label ============

/// Discrete risk bucket derived from a clamped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLabel {
    Red,
    Yellow,
    Green,
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLabel::Red => write!(f, "RED"),
            RiskLabel::Yellow => write!(f, "YELLOW"),
            RiskLabel::Green => write!(f, "GREEN"),
        }
    }
}

// ============ Display Entry ============

/// A judgement paired with its display-ready derived values.
/// Built fresh per response, never deserialized.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayEntry {
    pub judgement: Judgement,
    pub clamped_score: i32,
    pub label: RiskLabel,
}
