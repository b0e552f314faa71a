// Score Classification
// Maps raw likelihood scores to clamped display scores and risk labels

use crate::models::{DisplayEntry, Judgement, RiskLabel};

/// Label thresholds are fixed: >= RED_THRESHOLD is RED, >= YELLOW_THRESHOLD
/// is YELLOW, everything below is GREEN.
const RED_THRESHOLD: i32 = 70;
const YELLOW_THRESHOLD: i32 = 40;

/// Clamp a raw likelihood score into the displayable [0,100] range.
/// A missing or non-finite score reads as 0 (lowest risk) rather than
/// failing the display.
pub fn clamp_score(score: Option<f64>) -> i32 {
    let raw = match score {
        Some(s) if s.is_finite() => s,
        _ => 0.0,
    };
    (raw.round() as i64).clamp(0, 100) as i32
}

/// Map a clamped score to its risk bucket. Total over all inputs.
pub fn classify(clamped_score: i32) -> RiskLabel {
    if clamped_score >= RED_THRESHOLD {
        RiskLabel::Red
    } else if clamped_score >= YELLOW_THRESHOLD {
        RiskLabel::Yellow
    } else {
        RiskLabel::Green
    }
}

/// Pair a judgement with its derived display values.
pub fn to_display_entry(judgement: Judgement) -> DisplayEntry {
    let clamped_score = clamp_score(judgement.ai_likelihood_score);
    DisplayEntry {
        label: classify(clamped_score),
        clamped_score,
        judgement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_in_range_is_identity() {
        assert_eq!(clamp_score(Some(0.0)), 0);
        assert_eq!(clamp_score(Some(42.0)), 42);
        assert_eq!(clamp_score(Some(100.0)), 100);
    }

    #[test]
    fn test_clamp_out_of_range() {
        assert_eq!(clamp_score(Some(150.0)), 100);
        assert_eq!(clamp_score(Some(-5.0)), 0);
    }

    #[test]
    fn test_clamp_missing_or_non_finite_reads_as_zero() {
        assert_eq!(clamp_score(None), 0);
        assert_eq!(clamp_score(Some(f64::NAN)), 0);
        assert_eq!(clamp_score(Some(f64::INFINITY)), 0);
    }

    #[test]
    fn test_classify_threshold_edges() {
        assert_eq!(classify(70), RiskLabel::Red);
        assert_eq!(classify(69), RiskLabel::Yellow);
        assert_eq!(classify(40), RiskLabel::Yellow);
        assert_eq!(classify(39), RiskLabel::Green);
        assert_eq!(classify(0), RiskLabel::Green);
        assert_eq!(classify(100), RiskLabel::Red);
    }

    #[test]
    fn test_display_entry_from_out_of_range_score() {
        let judgement = Judgement {
            ai_likelihood_score: Some(130.0),
            ..Default::default()
        };
        let entry = to_display_entry(judgement);
        assert_eq!(entry.clamped_score, 100);
        assert_eq!(entry.label, RiskLabel::Red);
    }

    #[test]
    fn test_display_entry_from_missing_score() {
        let entry = to_display_entry(Judgement::default());
        assert_eq!(entry.clamped_score, 0);
        assert_eq!(entry.label, RiskLabel::Green);
    }
}
