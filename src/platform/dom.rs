//! DOM-backed presenter
//!
//! Looks its nodes up once. Any node missing from the page is skipped
//! silently so markup variations never break a round.

use web_sys::{Document, Element};

use crate::hud::Presenter;

pub const HUD_SCORE_ID: &str = "hud-score";
pub const HUD_TIME_ID: &str = "hud-time";
pub const START_OVERLAY_ID: &str = "start-overlay";
pub const END_OVERLAY_ID: &str = "end-overlay";
pub const END_OUTCOME_ID: &str = "end-outcome";
pub const END_SCORE_ID: &str = "end-score";

const HIDDEN_CLASS: &str = "hidden";

pub struct DomPresenter {
    score: Option<Element>,
    time: Option<Element>,
    start_overlay: Option<Element>,
    end_overlay: Option<Element>,
    end_outcome: Option<Element>,
    end_score: Option<Element>,
}

impl DomPresenter {
    pub fn new(document: &Document) -> Self {
        let find = |id: &str| {
            let el = document.get_element_by_id(id);
            if el.is_none() {
                log::warn!("#{} not found, skipping it", id);
            }
            el
        };
        Self {
            score: find(HUD_SCORE_ID),
            time: find(HUD_TIME_ID),
            start_overlay: find(START_OVERLAY_ID),
            end_overlay: find(END_OVERLAY_ID),
            end_outcome: find(END_OUTCOME_ID),
            end_score: find(END_SCORE_ID),
        }
    }
}

fn set_text(el: &Option<Element>, text: &str) {
    if let Some(el) = el {
        // Skip the DOM write when nothing changed
        if el.text_content().as_deref() != Some(text) {
            el.set_text_content(Some(text));
        }
    }
}

fn set_hidden(el: &Option<Element>, hidden: bool) {
    if let Some(el) = el {
        let classes = el.class_list();
        let _ = if hidden {
            classes.add_1(HIDDEN_CLASS)
        } else {
            classes.remove_1(HIDDEN_CLASS)
        };
    }
}

impl Presenter for DomPresenter {
    fn set_score_text(&mut self, text: &str) {
        set_text(&self.score, text);
    }

    fn set_time_text(&mut self, text: &str) {
        set_text(&self.time, text);
    }

    fn hide_start_overlay(&mut self) {
        set_hidden(&self.start_overlay, true);
    }

    fn show_end_overlay(&mut self, outcome_label: &str, score_text: &str) {
        set_text(&self.end_outcome, outcome_label);
        set_text(&self.end_score, score_text);
        set_hidden(&self.end_overlay, false);
    }

    fn hide_end_overlay(&mut self) {
        set_hidden(&self.end_overlay, true);
    }
}
