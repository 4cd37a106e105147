use std::path::Path;

use takeoffkit_designer::collaborators::{BlankOpener, DocumentOpener, NoPrompt, PageSource};
use takeoffkit_designer::designer_state::{DesignerState, DragState, Mode, Tool};

struct FailingOpener;

impl DocumentOpener for FailingOpener {
    fn open(&self, path: &Path) -> anyhow::Result<Box<dyn PageSource>> {
        anyhow::bail!("cannot read {}", path.display())
    }
}

#[test]
fn test_initial_state() {
    let state = DesignerState::new();
    assert_eq!(state.mode(), Mode::Move);
    assert_eq!(state.tool(), None);
    assert_eq!(state.page_index(), 0);
    assert_eq!(state.page_count(), 0);
    assert!(!state.has_document());
    assert!(!state.is_modified);
    assert_eq!(state.drag_state(), DragState::Idle);
}

#[test]
fn test_tool_toggle() {
    let mut state = DesignerState::new();

    state.toggle_tool(Tool::Rect);
    assert_eq!(state.mode(), Mode::Draw);
    assert_eq!(state.tool(), Some(Tool::Rect));

    state.toggle_tool(Tool::Line);
    assert_eq!(state.tool(), Some(Tool::Line));

    state.toggle_tool(Tool::Line);
    assert_eq!(state.mode(), Mode::Move);
    assert_eq!(state.tool(), None);
}

#[test]
fn test_mode_toggle() {
    let mut state = DesignerState::new();
    state.toggle_mode(Mode::Draw);
    assert_eq!(state.mode(), Mode::Draw);

    state.toggle_mode(Mode::Draw);
    assert_eq!(state.mode(), Mode::Move);

    state.toggle_tool(Tool::Ellipse);
    state.toggle_mode(Mode::Move);
    assert_eq!(state.mode(), Mode::Move);
    assert_eq!(state.tool(), None);
}

#[test]
fn test_press_without_document_is_ignored() {
    let mut state = DesignerState::new();
    state.toggle_tool(Tool::Ellipse);
    state.on_press(100.0, 100.0, &mut NoPrompt);
    assert!(state.store.is_empty());
    assert!(!state.is_modified);
}

#[test]
fn test_wheel_zoom() {
    let mut state = DesignerState::new();
    state.on_wheel(120.0);
    assert_eq!(state.viewport.scale(), 1.25);
    state.on_wheel(-120.0);
    state.on_wheel(0.0);
    assert_eq!(state.viewport.scale(), 0.8);
}

#[test]
fn test_open_document_resets_view() {
    let mut state = DesignerState::new();
    state.viewport.set_scale(3.0);
    state.viewport.pan_by(40.0, 40.0);

    assert!(state.open_document(Path::new("plan.pdf"), &BlankOpener { pages: 4 }));
    assert_eq!(state.page_count(), 4);
    assert_eq!(state.page_index(), 0);
    assert_eq!(state.viewport.scale(), 1.0);
    assert_eq!(state.viewport.offset_x(), 0.0);
    assert_eq!(state.pdf_path.as_deref(), Some(Path::new("plan.pdf")));
}

#[test]
fn test_failed_open_changes_nothing() {
    let mut state = DesignerState::new();
    assert!(state.open_document(Path::new("a.pdf"), &BlankOpener { pages: 2 }));
    state.next_page();
    state.viewport.set_scale(2.0);

    assert!(!state.open_document(Path::new("b.pdf"), &FailingOpener));
    assert_eq!(state.page_count(), 2);
    assert_eq!(state.page_index(), 1);
    assert_eq!(state.viewport.scale(), 2.0);
    assert_eq!(state.pdf_path.as_deref(), Some(Path::new("a.pdf")));
}

#[test]
fn test_render_current_page() {
    let mut state = DesignerState::new();
    assert!(state.render_current_page().unwrap().is_none());

    state.open_document(Path::new("plan.pdf"), &BlankOpener { pages: 1 });
    state.viewport.set_scale(0.5);
    let img = state.render_current_page().unwrap().unwrap();
    assert_eq!(img.dimensions(), (298, 421));
}
