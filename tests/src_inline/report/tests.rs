use super::*;

use crate::chart::{BarChart, ChartState};
use crate::client::Probabilities;
use crate::report::text::{IRRELEVANT_MESSAGE, render_text};

fn classified() -> Outcome {
    Outcome::Classified {
        score: 0.4,
        prediction: Prediction {
            predicted_label: "True".to_string(),
            probabilities: Probabilities {
                r#true: 80.0,
                r#false: 10.0,
                misleading: 10.0,
            },
        },
    }
}

fn applied_state(outcome: &Outcome) -> ChartState {
    let mut state = ChartState::new();
    if let Outcome::Classified { prediction, .. } = outcome {
        let ticket = state.begin();
        state.apply(ticket, BarChart::from_probabilities(&prediction.probabilities));
    }
    state
}

#[test]
fn test_text_irrelevant_message() {
    let state = ChartState::new();
    let rendered = render_text(&Outcome::Irrelevant { score: 0.02 }, &state, false);
    assert_eq!(rendered, format!("{IRRELEVANT_MESSAGE}\n"));
}

#[test]
fn test_text_classified_has_prediction_and_chart() {
    let outcome = classified();
    let state = applied_state(&outcome);
    let rendered = render_text(&outcome, &state, false);
    assert!(rendered.starts_with("Prediction: True\n"));
    assert!(rendered.contains("True"));
    assert!(rendered.contains("Misleading"));
    assert!(rendered.contains('\u{2588}'));
}

#[test]
fn test_text_classified_without_applied_chart_omits_bars() {
    let outcome = classified();
    let state = ChartState::new();
    let rendered = render_text(&outcome, &state, false);
    assert_eq!(rendered, "Prediction: True\n");
}

#[test]
fn test_json_classified_shape() {
    let rendered = json::render_json(&classified()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["gate"], "classified");
    assert_eq!(value["prediction"]["predicted_label"], "True");
    assert_eq!(value["prediction"]["probabilities"]["true"], 80.0);
    assert_eq!(value["prediction"]["probabilities"]["false"], 10.0);
    assert_eq!(value["prediction"]["probabilities"]["misleading"], 10.0);
}

#[test]
fn test_json_irrelevant_shape() {
    let rendered = json::render_json(&Outcome::Irrelevant { score: 0.05 }).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["gate"], "irrelevant");
    assert!(value["score"].as_f64().unwrap() < 0.1);
    assert!(value.get("prediction").is_none());
}
