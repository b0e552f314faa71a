// Aggregation Logic
// Orders per-model judgements for display: highest-scoring first, remainder
// in original relative order

use crate::models::Judgement;
use crate::services::classify::clamp_score;

/// Index of the judgement with the maximum clamped score. Ties resolve to
/// the first occurrence in original order; this tie-break is contractual,
/// downstream UX depends on it being stable.
fn best_index(per_model: &[Judgement]) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (idx, judgement) in per_model.iter().enumerate() {
        let score = clamp_score(judgement.ai_likelihood_score);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Produce the display ordering: `[best, rest...]` where `rest` keeps the
/// original relative order. The promoted element is excluded by position,
/// not by value, so structurally identical judgements survive intact.
pub fn aggregate(per_model: &[Judgement]) -> Vec<Judgement> {
    let Some(best) = best_index(per_model) else {
        return Vec::new();
    };

    let mut ordered = Vec::with_capacity(per_model.len());
    ordered.push(per_model[best].clone());
    for (idx, judgement) in per_model.iter().enumerate() {
        if idx != best {
            ordered.push(judgement.clone());
        }
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn judgement(model: &str, score: f64) -> Judgement {
        Judgement {
            model: Some(model.to_string()),
            ai_likelihood_score: Some(score),
            ..Default::default()
        }
    }

    fn models(ordered: &[Judgement]) -> Vec<&str> {
        ordered
            .iter()
            .map(|j| j.model.as_deref().unwrap_or(""))
            .collect()
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn test_aggregate_singleton() {
        let ordered = aggregate(&[judgement("a", 10.0)]);
        assert_eq!(models(&ordered), vec!["a"]);
    }

    #[test]
    fn test_aggregate_promotes_best_keeps_rest_in_order() {
        let input = [
            judgement("a", 30.0),
            judgement("b", 90.0),
            judgement("c", 60.0),
        ];
        assert_eq!(models(&aggregate(&input)), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_tie_break_first_occurrence_wins() {
        let input = [judgement("a", 50.0), judgement("b", 50.0)];
        assert_eq!(models(&aggregate(&input)), vec!["a", "b"]);
    }

    #[test]
    fn test_structurally_identical_entries_survive() {
        // Two indistinguishable judgements: positional exclusion must keep
        // exactly one copy in `rest`, never zero or two.
        let input = [judgement("same", 80.0), judgement("same", 80.0)];
        let ordered = aggregate(&input);
        assert_eq!(ordered.len(), 2);
        assert_eq!(models(&ordered), vec!["same", "same"]);
    }

    #[test]
    fn test_output_is_permutation_of_input() {
        let input = [
            judgement("a", 10.0),
            judgement("b", 75.0),
            judgement("c", 75.0),
            judgement("d", 5.0),
        ];
        let ordered = aggregate(&input);
        assert_eq!(ordered.len(), input.len());
        assert_eq!(models(&ordered), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_missing_scores_read_as_zero() {
        let input = [
            Judgement {
                model: Some("nil".to_string()),
                ..Default::default()
            },
            judgement("scored", 15.0),
        ];
        assert_eq!(models(&aggregate(&input)), vec!["scored", "nil"]);
    }

    #[test]
    fn test_all_missing_scores_promotes_first() {
        let input = [
            Judgement {
                model: Some("x".to_string()),
                ..Default::default()
            },
            Judgement {
                model: Some("y".to_string()),
                ..Default::default()
            },
        ];
        assert_eq!(models(&aggregate(&input)), vec!["x", "y"]);
    }
}
