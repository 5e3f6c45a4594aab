pub mod json;
pub mod text;

use serde::Serialize;

use crate::client::Prediction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportMode {
    Text,
    Json,
}

/// Outcome of one submission that made it past the empty-input check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "gate", rename_all = "snake_case")]
pub enum Outcome {
    Irrelevant { score: f32 },
    Classified { score: f32, prediction: Prediction },
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/tests.rs"]
mod tests;
