use crate::chart::ChartState;
use crate::report::Outcome;

pub const IRRELEVANT_MESSAGE: &str = "The text is irrelevant to COVID-19 topics.";

pub fn render_text(outcome: &Outcome, state: &ChartState, color: bool) -> String {
    match outcome {
        Outcome::Irrelevant { .. } => format!("{IRRELEVANT_MESSAGE}\n"),
        Outcome::Classified { prediction, .. } => {
            let mut out = format!("Prediction: {}\n", prediction.predicted_label);
            if let Some(chart) = state.chart() {
                out.push('\n');
                out.push_str(&chart.render(color));
            }
            out
        }
    }
}
