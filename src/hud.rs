//! Presentation layer contract
//!
//! The round never touches the page directly. It hands text to a
//! `Presenter`, which the browser implements over DOM nodes and tests
//! implement with a recorder.

use crate::sim::{Outcome, RoundSummary};

/// Text displays and overlays shown around the playfield
pub trait Presenter {
    fn set_score_text(&mut self, text: &str);
    fn set_time_text(&mut self, text: &str);
    /// Hide the start overlay once the player presses Start
    fn hide_start_overlay(&mut self);
    /// Reveal the end-of-round overlay
    fn show_end_overlay(&mut self, outcome_label: &str, score_text: &str);
    /// Hide the end overlay when a new round begins
    fn hide_end_overlay(&mut self);
}

pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

/// Whole seconds left, rounded to nearest
pub fn time_text(remaining_secs: f32) -> String {
    format!("Remaining Time: {}", remaining_secs.max(0.0).round() as u32)
}

pub fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "Win! 😍",
        Outcome::Lose => "Lose! 😭",
    }
}

/// Publish a finished round to the end overlay
pub fn show_summary(presenter: &mut dyn Presenter, summary: &RoundSummary) {
    presenter.show_end_overlay(outcome_label(summary.outcome), &summary.score.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_text_rounds() {
        assert_eq!(time_text(30.0), "Remaining Time: 30");
        assert_eq!(time_text(29.4), "Remaining Time: 29");
        assert_eq!(time_text(29.5), "Remaining Time: 30");
        assert_eq!(time_text(0.2), "Remaining Time: 0");
        assert_eq!(time_text(-1.0), "Remaining Time: 0");
    }

    #[test]
    fn test_labels() {
        assert!(outcome_label(Outcome::Win).contains("Win"));
        assert!(outcome_label(Outcome::Lose).contains("Lose"));
        assert_eq!(score_text(7), "Score: 7");
    }
}
