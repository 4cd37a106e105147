//! Document opening, page navigation and deletion.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::{DesignerState, DragState};
use crate::collaborators::{DocumentOpener, PageSource};

/// Result of [`DesignerState::delete_selected`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The selected object was removed.
    Shape(Uuid),
    /// The current page was removed.
    Page(usize),
    /// Nothing selected and only one page left.
    LastPageProtected,
    Nothing,
}

impl DesignerState {
    /// Opens a document. On failure nothing changes and false is returned.
    pub fn open_document(&mut self, path: &Path, opener: &dyn DocumentOpener) -> bool {
        match opener.open(path) {
            Ok(doc) => {
                tracing::info!("Opened {} ({} pages)", path.display(), doc.page_count());
                self.attach_document(doc, Some(path.to_path_buf()));
                true
            }
            Err(e) => {
                tracing::warn!("Failed to open {}: {:#}", path.display(), e);
                false
            }
        }
    }

    /// Shows `doc` from its first page at 1:1 zoom.
    pub fn attach_document(&mut self, doc: Box<dyn PageSource>, path: Option<PathBuf>) {
        self.document = Some(doc);
        self.pdf_path = path;
        self.page_index = 0;
        self.viewport.reset();
        self.selected = None;
        self.drag = DragState::Idle;
        self.reset_construction();
    }

    pub fn next_page(&mut self) -> bool {
        if self.page_index + 1 >= self.page_count() {
            return false;
        }
        self.go_to_page(self.page_index + 1);
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page_index == 0 || !self.has_document() {
            return false;
        }
        self.go_to_page(self.page_index - 1);
        true
    }

    fn go_to_page(&mut self, page: usize) {
        self.page_index = page;
        self.selected = None;
        self.drag = DragState::Idle;
        self.reset_construction();
    }

    /// Deletes the selected object, or the current page when nothing is
    /// selected. The last remaining page is never deleted.
    pub fn delete_selected(&mut self) -> DeleteOutcome {
        if let Some(id) = self.selected.take() {
            if self.store.remove(id).is_some() {
                tracing::debug!("Deleted shape {}", id);
                self.is_modified = true;
                return DeleteOutcome::Shape(id);
            }
        }

        let page = self.page_index;
        let Some(doc) = self.document.as_mut() else {
            return DeleteOutcome::Nothing;
        };
        let count = doc.page_count();
        if count <= 1 {
            tracing::warn!("Cannot delete the last page");
            return DeleteOutcome::LastPageProtected;
        }
        if let Err(e) = doc.delete_page(page) {
            tracing::warn!("Failed to delete page {}: {:#}", page + 1, e);
            return DeleteOutcome::Nothing;
        }

        let dropped = self.store.remove_page(page);
        self.page_index = page.min(count - 2);
        self.drag = DragState::Idle;
        self.reset_construction();
        self.is_modified = true;
        tracing::debug!("Deleted page {} with {} shape(s)", page + 1, dropped.len());
        DeleteOutcome::Page(page)
    }
}
