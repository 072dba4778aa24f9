//! Results panels for whole-face and component recognition.
//!
//! Each panel tracks a request generation. Starting a submission bumps the
//! generation; a reply is applied only if it carries the current one, so a
//! slow earlier request can never overwrite a later result.

#[cfg(test)]
#[path = "recognition_test.rs"]
mod recognition_test;

use crate::net::types::{ApiError, MatchCard, RecognitionReply};

pub const ANALYZING_FACE: &str = "Analyzing... Please wait.";
pub const ANALYZING_COMPONENT: &str = "Analyzing component... Please wait.";
pub const MISSING_SKETCH: &str = "Please select a sketch file to upload.";
pub const MISSING_COMPONENT_SKETCH: &str = "Please select a component sketch file to upload.";

/// Component parts the backend accepts, with their labels.
pub const COMPONENT_PARTS: [(&str, &str); 3] = [("eyes", "Eyes"), ("nose", "Nose"), ("mouth", "Mouth")];

/// What a results panel currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PanelView {
    #[default]
    Hidden,
    Analyzing(&'static str),
    Match(MatchCard),
    NoMatch(String),
    Error(String),
}

impl PanelView {
    /// Status / error line for non-card views.
    #[must_use]
    pub fn status_text(&self) -> Option<String> {
        match self {
            Self::Hidden | Self::Match(_) => None,
            Self::Analyzing(text) => Some((*text).to_owned()),
            Self::NoMatch(message) => Some(message.clone()),
            Self::Error(message) => Some(format!("Error: {message}")),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultsPanel {
    pub view: PanelView,
    generation: u64,
}

impl ResultsPanel {
    /// Show the analyzing status and return the token for this request.
    pub fn begin(&mut self, status: &'static str) -> u64 {
        self.generation += 1;
        self.view = PanelView::Analyzing(status);
        self.generation
    }

    /// Apply a reply if it belongs to the latest request. Returns whether it was applied.
    pub fn resolve(&mut self, generation: u64, outcome: Result<RecognitionReply, ApiError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.view = match outcome {
            Ok(RecognitionReply::Match(card)) => PanelView::Match(card),
            Ok(RecognitionReply::NoMatch { message }) => PanelView::NoMatch(message),
            Err(e) => PanelView::Error(e.to_string()),
        };
        true
    }
}

/// Both panels on the recognition page.
#[derive(Clone, Debug, Default)]
pub struct RecognitionState {
    pub face: ResultsPanel,
    pub component: ResultsPanel,
}
