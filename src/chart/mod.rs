use crossterm::style::{Color, Stylize};

use crate::client::Probabilities;

pub const CATEGORY_LABELS: [&str; 3] = ["True", "False", "Misleading"];
const CATEGORY_COLORS: [Color; 3] = [Color::Green, Color::Red, Color::DarkYellow];

const AXIS_MAX: f64 = 100.0;
const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub values: [f64; 3],
}

impl BarChart {
    pub fn from_probabilities(p: &Probabilities) -> Self {
        Self {
            values: [p.r#true, p.r#false, p.misleading],
        }
    }

    pub fn render(&self, color: bool) -> String {
        let mut out = String::new();
        for (i, label) in CATEGORY_LABELS.iter().enumerate() {
            let value = self.values[i];
            let filled = bar_cells(value);
            let bar = "\u{2588}".repeat(filled);
            let pad = " ".repeat(BAR_WIDTH - filled);
            if color {
                out.push_str(&format!(
                    "{label:<10} {}{pad} {value:6.2}\n",
                    bar.with(CATEGORY_COLORS[i])
                ));
            } else {
                out.push_str(&format!("{label:<10} {bar}{pad} {value:6.2}\n"));
            }
        }
        out
    }
}

/// Bars are scaled against a fixed 0..100 axis; out-of-range values are
/// clamped for drawing but printed verbatim.
fn bar_cells(value: f64) -> usize {
    let clamped = value.clamp(0.0, AXIS_MAX);
    ((clamped / AXIS_MAX) * BAR_WIDTH as f64).round() as usize
}

/// Owner of the single chart bound to the output surface. Replacing the chart
/// drops the previous instance, so at most one exists at a time. Tickets from
/// `begin` guard against a superseded classification overwriting a newer one.
#[derive(Debug, Default)]
pub struct ChartState {
    current: Option<BarChart>,
    visible: bool,
    latest_ticket: u64,
}

impl ChartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket for a classification that is about to start.
    pub fn begin(&mut self) -> u64 {
        self.latest_ticket += 1;
        self.latest_ticket
    }

    /// Installs the chart if its ticket is still the newest one issued.
    /// Returns whether the chart was applied.
    pub fn apply(&mut self, ticket: u64, chart: BarChart) -> bool {
        if ticket != self.latest_ticket {
            return false;
        }
        self.current = Some(chart);
        self.visible = true;
        true
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn chart(&self) -> Option<&BarChart> {
        if self.visible { self.current.as_ref() } else { None }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/chart/tests.rs"]
mod tests;
