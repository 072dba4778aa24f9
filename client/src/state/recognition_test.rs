use super::*;

fn card() -> MatchCard {
    MatchCard {
        name: "Jane".into(),
        age: Some("30".into()),
        criminal_record: Some("None".into()),
        part: None,
        similarity: "87.5".into(),
        distance: "0.42".into(),
        photo_path: Some("/x.png".into()),
    }
}

// =============================================================
// PanelView
// =============================================================

#[test]
fn panel_starts_hidden() {
    let panel = ResultsPanel::default();
    assert_eq!(panel.view, PanelView::Hidden);
}

#[test]
fn status_text_per_view() {
    assert_eq!(PanelView::Hidden.status_text(), None);
    assert_eq!(PanelView::Analyzing(ANALYZING_FACE).status_text().as_deref(), Some("Analyzing... Please wait."));
    assert_eq!(PanelView::NoMatch("No match found".into()).status_text().as_deref(), Some("No match found"));
    assert_eq!(PanelView::Error("Invalid file".into()).status_text().as_deref(), Some("Error: Invalid file"));
    assert_eq!(PanelView::Match(card()).status_text(), None);
}

// =============================================================
// ResultsPanel
// =============================================================

#[test]
fn begin_shows_analyzing() {
    let mut panel = ResultsPanel::default();
    panel.begin(ANALYZING_COMPONENT);
    assert_eq!(panel.view, PanelView::Analyzing(ANALYZING_COMPONENT));
}

#[test]
fn resolve_no_match_shows_message_without_card() {
    let mut panel = ResultsPanel::default();
    let generation = panel.begin(ANALYZING_FACE);
    assert!(panel.resolve(generation, Ok(RecognitionReply::NoMatch { message: "No match found".into() })));
    assert_eq!(panel.view, PanelView::NoMatch("No match found".into()));
}

#[test]
fn resolve_match_shows_card() {
    let mut panel = ResultsPanel::default();
    let generation = panel.begin(ANALYZING_FACE);
    panel.resolve(generation, Ok(RecognitionReply::Match(card())));
    assert_eq!(panel.view, PanelView::Match(card()));
}

#[test]
fn resolve_error_shows_message() {
    let mut panel = ResultsPanel::default();
    let generation = panel.begin(ANALYZING_FACE);
    panel.resolve(generation, Err(ApiError::Server("An unknown error occurred.".into())));
    assert_eq!(panel.view.status_text().as_deref(), Some("Error: An unknown error occurred."));
}

#[test]
fn stale_reply_is_dropped() {
    let mut panel = ResultsPanel::default();
    let first = panel.begin(ANALYZING_FACE);
    let second = panel.begin(ANALYZING_FACE);
    assert!(panel.resolve(second, Ok(RecognitionReply::Match(card()))));
    assert!(!panel.resolve(first, Ok(RecognitionReply::NoMatch { message: "late".into() })));
    assert_eq!(panel.view, PanelView::Match(card()));
}

#[test]
fn stale_reply_does_not_clear_analyzing() {
    let mut panel = ResultsPanel::default();
    let first = panel.begin(ANALYZING_FACE);
    panel.begin(ANALYZING_FACE);
    assert!(!panel.resolve(first, Err(ApiError::Network("x".into()))));
    assert_eq!(panel.view, PanelView::Analyzing(ANALYZING_FACE));
}

#[test]
fn panels_are_independent() {
    let mut state = RecognitionState::default();
    let face = state.face.begin(ANALYZING_FACE);
    let comp = state.component.begin(ANALYZING_COMPONENT);
    assert!(state.component.resolve(comp, Ok(RecognitionReply::NoMatch { message: "none".into() })));
    assert!(state.face.resolve(face, Ok(RecognitionReply::Match(card()))));
}

#[test]
fn component_parts_are_backend_names() {
    let names: Vec<&str> = COMPONENT_PARTS.iter().map(|(n, _)| *n).collect();
    assert_eq!(names, ["eyes", "nose", "mouth"]);
}
