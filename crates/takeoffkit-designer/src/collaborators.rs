//! Interfaces to the parts of the application the canvas does not own.
//!
//! The canvas never draws page content, opens dialogs or measures fonts
//! itself; it calls these traits instead. [`BlankDocument`] and
//! [`NominalTextMetrics`] are headless implementations for batch runs
//! and tests.

use std::collections::HashMap;
use std::path::Path;

use image::{Rgb, RgbImage};
use takeoffkit_core::constants::TEXT_BOX_PX;

/// Rendered page background.
pub type RasterImage = RgbImage;

/// A paged document shown underneath the annotations.
pub trait PageSource {
    fn page_count(&self) -> usize;

    /// Renders `page` at `scale` (1.0 = native size).
    fn render_page(&self, page: usize, scale: f64) -> anyhow::Result<RasterImage>;

    fn delete_page(&mut self, page: usize) -> anyhow::Result<()>;
}

/// Opens documents by path.
pub trait DocumentOpener {
    fn open(&self, path: &Path) -> anyhow::Result<Box<dyn PageSource>>;
}

/// Text extent provider for hit-testing text annotations.
pub trait TextMetrics {
    /// Size `(width, height)` in view pixels of `text` drawn at `font_px`.
    fn measure_text(&self, text: &str, font_px: f64, scale: f64) -> (f64, f64);
}

/// Fixed-size text box that scales with zoom, independent of content.
#[derive(Debug, Clone, Copy, Default)]
pub struct NominalTextMetrics;

impl TextMetrics for NominalTextMetrics {
    fn measure_text(&self, _text: &str, _font_px: f64, scale: f64) -> (f64, f64) {
        (TEXT_BOX_PX.0 * scale, TEXT_BOX_PX.1 * scale)
    }
}

/// Modal input. `None` means the dialog was dismissed.
pub trait UserPrompt {
    fn ask_text(&mut self, title: &str, initial: Option<&str>) -> Option<String>;

    /// Asks for one number per field name.
    fn ask_numbers(&mut self, title: &str, fields: &[&str]) -> Option<HashMap<String, f64>>;
}

/// Prompt that always cancels. For contexts without a user.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl UserPrompt for NoPrompt {
    fn ask_text(&mut self, _title: &str, _initial: Option<&str>) -> Option<String> {
        None
    }

    fn ask_numbers(&mut self, _title: &str, _fields: &[&str]) -> Option<HashMap<String, f64>> {
        None
    }
}

/// Document of blank white pages of a fixed size.
#[derive(Debug, Clone, PartialEq)]
pub struct BlankDocument {
    pages: usize,
    width: f64,
    height: f64,
}

impl BlankDocument {
    /// A4 portrait in points.
    pub const A4: (f64, f64) = (595.0, 842.0);

    pub fn new(pages: usize) -> Self {
        Self::with_size(pages, Self::A4.0, Self::A4.1)
    }

    pub fn with_size(pages: usize, width: f64, height: f64) -> Self {
        Self {
            pages,
            width,
            height,
        }
    }
}

impl PageSource for BlankDocument {
    fn page_count(&self) -> usize {
        self.pages
    }

    fn render_page(&self, page: usize, scale: f64) -> anyhow::Result<RasterImage> {
        if page >= self.pages {
            anyhow::bail!("Page {} out of range ({} pages)", page, self.pages);
        }
        let w = (self.width * scale).round().max(1.0) as u32;
        let h = (self.height * scale).round().max(1.0) as u32;
        Ok(RgbImage::from_pixel(w, h, Rgb([255, 255, 255])))
    }

    fn delete_page(&mut self, page: usize) -> anyhow::Result<()> {
        if page >= self.pages {
            anyhow::bail!("Page {} out of range ({} pages)", page, self.pages);
        }
        self.pages -= 1;
        Ok(())
    }
}

/// Opens every path as a [`BlankDocument`] with a fixed page count.
#[derive(Debug, Clone, Copy)]
pub struct BlankOpener {
    pub pages: usize,
}

impl DocumentOpener for BlankOpener {
    fn open(&self, _path: &Path) -> anyhow::Result<Box<dyn PageSource>> {
        Ok(Box::new(BlankDocument::new(self.pages)))
    }
}
