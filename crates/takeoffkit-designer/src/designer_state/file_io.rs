//! File I/O operations for designer state.
//! Handles project saving, loading and export.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::DesignerState;
use crate::aggregation::SlopePresets;
use crate::collaborators::DocumentOpener;
use crate::export::{ExportDocument, Exporter};
use crate::page_store::PageStore;
use crate::serialization::ProjectFile;

impl DesignerState {
    /// Clears all annotations and the document.
    pub fn new_project(&mut self) {
        self.store = PageStore::new();
        self.presets = SlopePresets::new(&self.config.slope.presets);
        self.document = None;
        self.pdf_path = None;
        self.current_file_path = None;
        self.design_name = "Untitled".to_string();
        self.page_index = 0;
        self.viewport.reset();
        self.selected = None;
        self.drag = Default::default();
        self.reset_construction();
        self.is_modified = false;
    }

    /// Writes the project to `path`.
    pub fn save_project(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let project = ProjectFile::from_store(
            self.design_name.clone(),
            &self.store,
            self.pdf_path.as_deref(),
            self.presets.values(),
        );
        project
            .save_to_file(path)
            .with_context(|| format!("Failed to save project to {}", path.display()))?;

        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        tracing::info!(
            "Saved {} shape(s) on {} page(s) to {}",
            self.store.len(),
            self.store.pages().count(),
            path.display()
        );
        Ok(())
    }

    /// Loads a project and reopens its document through `opener`.
    ///
    /// Nothing changes unless both the project and its document load.
    pub fn load_project(&mut self, path: impl AsRef<Path>, opener: &dyn DocumentOpener) -> Result<()> {
        let path = path.as_ref();
        let project = ProjectFile::load_from_file(path)
            .with_context(|| format!("Failed to load project {}", path.display()))?;
        let store = project.to_store()?;

        let document = match &project.pdf_path {
            Some(pdf) => Some(
                opener
                    .open(pdf)
                    .with_context(|| format!("Failed to open document {}", pdf.display()))?,
            ),
            None => None,
        };

        let mut presets = SlopePresets::new(&self.config.slope.presets);
        for value in &project.slope_presets {
            if value.is_finite() && *value > 0.0 {
                presets.add(*value);
            }
        }

        self.new_project();
        if let Some(doc) = document {
            self.attach_document(doc, project.pdf_path.clone());
        }
        self.store = store;
        self.presets = presets;
        self.design_name = project.metadata.name;
        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;

        tracing::info!(
            "Loaded {} shape(s) from {} (format {})",
            self.store.len(),
            path.display(),
            project.version
        );
        Ok(())
    }

    /// Exports every annotated page in document space.
    pub fn export(&self, exporter: &dyn Exporter, output: &Path) -> Result<Vec<PathBuf>> {
        let document = ExportDocument::from_store(&self.store, self.pdf_path.as_deref());
        exporter
            .export(&document, output)
            .with_context(|| format!("Failed to export to {}", output.display()))
    }
}
