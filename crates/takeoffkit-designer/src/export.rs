//! Export of annotations as document-space drawing primitives.
//!
//! The canvas hands absolute page coordinates to an [`Exporter`]; it never
//! passes view-space geometry. [`SvgOverlayExporter`] writes one SVG overlay
//! per page that can be laid over the rendered page.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::model::{DesignerShape, DrawingObject, Point, Shape};
use crate::page_store::PageStore;

/// Text size used for exported annotations, in document units.
pub const EXPORT_FONT_SIZE: f64 = 12.0;

/// A single vector or text element in document space.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportPrimitive {
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: String,
    },
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        color: String,
    },
    Line {
        from: Point,
        to: Point,
        color: String,
    },
    Polygon {
        points: Vec<Point>,
        color: String,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        font_size: f64,
        color: String,
    },
}

impl ExportPrimitive {
    pub fn from_object(obj: &DrawingObject) -> Self {
        let color = obj.color.clone();
        match &obj.shape {
            Shape::Rectangle(r) => {
                let (x0, y0, x1, y1) = r.bounds();
                ExportPrimitive::Rect {
                    x: x0,
                    y: y0,
                    w: x1 - x0,
                    h: y1 - y0,
                    color,
                }
            }
            Shape::Ellipse(e) => {
                let c = e.center();
                let (rx, ry) = e.radii();
                ExportPrimitive::Ellipse {
                    cx: c.x,
                    cy: c.y,
                    rx,
                    ry,
                    color,
                }
            }
            Shape::Line(l) => ExportPrimitive::Line {
                from: l.start,
                to: l.end,
                color,
            },
            Shape::Triangle(t) => ExportPrimitive::Polygon {
                points: t.points.to_vec(),
                color,
            },
            Shape::Text(t) => ExportPrimitive::Text {
                x: t.x,
                y: t.y,
                text: t.text.clone(),
                font_size: EXPORT_FONT_SIZE,
                color,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportPage {
    pub index: usize,
    pub primitives: Vec<ExportPrimitive>,
}

/// Everything an exporter needs: the source document and its annotated pages.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDocument {
    pub source: Option<PathBuf>,
    pub pages: Vec<ExportPage>,
}

impl ExportDocument {
    pub fn from_store(store: &PageStore, source: Option<&Path>) -> Self {
        Self {
            source: source.map(Path::to_path_buf),
            pages: store
                .pages()
                .map(|(index, shapes)| ExportPage {
                    index,
                    primitives: shapes.iter().map(ExportPrimitive::from_object).collect(),
                })
                .collect(),
        }
    }
}

/// Produces an output document from exported primitives.
pub trait Exporter {
    /// Writes the export to `output` and returns the files created.
    fn export(&self, document: &ExportDocument, output: &Path) -> anyhow::Result<Vec<PathBuf>>;
}

/// Writes `page-NNN.svg` overlays (1-based) into a directory.
#[derive(Debug, Clone)]
pub struct SvgOverlayExporter {
    /// Page size in document units; sets the SVG viewport when known.
    pub page_size: Option<(f64, f64)>,
    pub stroke_width: f64,
}

impl Default for SvgOverlayExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgOverlayExporter {
    pub fn new() -> Self {
        Self {
            page_size: None,
            stroke_width: 2.0,
        }
    }

    pub fn with_page_size(mut self, width: f64, height: f64) -> Self {
        self.page_size = Some((width, height));
        self
    }

    /// SVG document for one page.
    pub fn render_svg(&self, page: &ExportPage) -> String {
        let mut svg = String::new();
        match self.page_size {
            Some((w, h)) => {
                let _ = writeln!(
                    svg,
                    r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
                );
            }
            None => svg.push_str("<svg xmlns=\"http://www.w3.org/2000/svg\">\n"),
        }

        let sw = self.stroke_width;
        for primitive in &page.primitives {
            let _ = match primitive {
                ExportPrimitive::Rect { x, y, w, h, color } => writeln!(
                    svg,
                    r#"  <rect x="{x}" y="{y}" width="{w}" height="{h}" fill="none" stroke="{}" stroke-width="{sw}"/>"#,
                    escape(color)
                ),
                ExportPrimitive::Ellipse {
                    cx,
                    cy,
                    rx,
                    ry,
                    color,
                } => writeln!(
                    svg,
                    r#"  <ellipse cx="{cx}" cy="{cy}" rx="{rx}" ry="{ry}" fill="none" stroke="{}" stroke-width="{sw}"/>"#,
                    escape(color)
                ),
                ExportPrimitive::Line { from, to, color } => writeln!(
                    svg,
                    r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{sw}"/>"#,
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    escape(color)
                ),
                ExportPrimitive::Polygon { points, color } => {
                    let pts: Vec<String> =
                        points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
                    writeln!(
                        svg,
                        r#"  <polygon points="{}" fill="none" stroke="{}" stroke-width="{sw}"/>"#,
                        pts.join(" "),
                        escape(color)
                    )
                }
                ExportPrimitive::Text {
                    x,
                    y,
                    text,
                    font_size,
                    color,
                } => {
                    let _ = write!(
                        svg,
                        r#"  <text x="{x}" y="{y}" font-size="{font_size}" fill="{}" dominant-baseline="hanging">"#,
                        escape(color)
                    );
                    for (i, line) in text.lines().enumerate() {
                        let dy = if i == 0 { 0.0 } else { font_size * 1.2 };
                        let _ = write!(
                            svg,
                            r#"<tspan x="{x}" dy="{dy}">{}</tspan>"#,
                            escape(line)
                        );
                    }
                    writeln!(svg, "</text>")
                }
            };
        }

        svg.push_str("</svg>\n");
        svg
    }
}

impl Exporter for SvgOverlayExporter {
    fn export(&self, document: &ExportDocument, output: &Path) -> anyhow::Result<Vec<PathBuf>> {
        std::fs::create_dir_all(output)
            .with_context(|| format!("Failed to create export directory {}", output.display()))?;

        let mut written = Vec::with_capacity(document.pages.len());
        for page in &document.pages {
            let path = output.join(format!("page-{:03}.svg", page.index + 1));
            std::fs::write(&path, self.render_svg(page))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            written.push(path);
        }

        tracing::info!(
            "Exported {} page overlay(s) to {}",
            written.len(),
            output.display()
        );
        Ok(written)
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
