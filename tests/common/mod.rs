//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use tabstop::editable::{Selection, TextBuffer};
use tabstop::markers::{MarkerEntry, MarkerObserver};
use tabstop::messages::{EditorMsg, Msg};
use tabstop::model::AppModel;
use tabstop::update::update;

/// Create a test model with given text and caret position
pub fn test_model(text: &str, line: usize, column: usize) -> AppModel {
    let mut model = AppModel::with_text(text);
    let offset = model.document.buffer.position_to_offset(line, column);
    model.document.set_caret(offset);
    model
}

/// Create a test model with given text and a selection (anchor to head)
/// The caret will be at the head position
pub fn test_model_with_selection(
    text: &str,
    anchor_line: usize,
    anchor_col: usize,
    head_line: usize,
    head_col: usize,
) -> AppModel {
    let mut model = AppModel::with_text(text);
    let buffer = &model.document.buffer;
    let anchor = buffer.position_to_offset(anchor_line, anchor_col);
    let head = buffer.position_to_offset(head_line, head_col);
    model.document.set_selection(Selection::new(anchor, head));
    model
}

/// Helper to get buffer content as string
pub fn buffer_to_string(model: &AppModel) -> String {
    model.document.text()
}

/// Caret as (line, column)
pub fn caret_position(model: &AppModel) -> (usize, usize) {
    model
        .document
        .buffer
        .offset_to_position(model.document.caret())
}

/// Press Tab `n` times
pub fn press_tab(model: &mut AppModel, n: usize) {
    for _ in 0..n {
        update(model, Msg::Editor(EditorMsg::Tab));
    }
}

/// Marker observer that records every notification
#[derive(Default)]
pub struct MarkerLog {
    pub changes: Vec<Vec<MarkerEntry>>,
    pub selected: Vec<(usize, usize)>,
}

pub struct RecordingMarkers(pub Rc<RefCell<MarkerLog>>);

impl MarkerObserver for RecordingMarkers {
    fn markers_changed(&mut self, markers: &[MarkerEntry]) {
        self.0.borrow_mut().changes.push(markers.to_vec());
    }

    fn marker_selected(&mut self, index: usize, line: usize) {
        self.0.borrow_mut().selected.push((index, line));
    }
}

/// Model whose marker notifications are recorded into the returned log
pub fn test_model_with_marker_log(text: &str) -> (AppModel, Rc<RefCell<MarkerLog>>) {
    let log = Rc::new(RefCell::new(MarkerLog::default()));
    let model = AppModel::with_text(text)
        .with_marker_observer(Box::new(RecordingMarkers(log.clone())));
    (model, log)
}
