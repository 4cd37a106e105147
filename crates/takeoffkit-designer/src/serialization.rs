//! Serialization and deserialization for project files.
//!
//! A project is a JSON document holding the path of the annotated document
//! and the objects of every page. Page indices are map keys, so they are
//! written as strings and parsed back into integers on load.
//!
//! Files written before versioning (no `version`, `metadata` or `id`
//! fields) load with generated ids.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use takeoffkit_core::ProjectError;

use crate::derive::derive_value;
use crate::model::{
    DesignEllipse, DesignLine, DesignRectangle, DesignText, DesignTriangle, DrawingObject, Point,
    Shape, ShapeType,
};
use crate::page_store::PageStore;

/// Project file format version
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete project file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFile {
    #[serde(default = "legacy_version")]
    pub version: String,
    #[serde(default)]
    pub metadata: ProjectMetadata,
    #[serde(default)]
    pub pdf_path: Option<PathBuf>,
    #[serde(default)]
    pub shapes_by_page: BTreeMap<usize, Vec<ShapeData>>,
    #[serde(default)]
    pub page_slopes: BTreeMap<usize, f64>,
    #[serde(default)]
    pub slope_presets: Vec<f64>,
}

fn legacy_version() -> String {
    "0".to_string()
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Default for ProjectMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            name: "Untitled".to_string(),
            created: now,
            modified: now,
        }
    }
}

/// Serialized shape record. Only the fields of its `type` are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub shape_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<(f64, f64)>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub summary: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slope: Option<f64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub manual_value: bool,
}

impl ShapeData {
    /// Convert DrawingObject to ShapeData
    pub fn from_object(obj: &DrawingObject) -> Self {
        let mut data = ShapeData {
            id: Some(obj.id.to_string()),
            shape_type: obj.shape.shape_type().as_str().to_string(),
            color: Some(obj.color.clone()),
            value: obj.value,
            slope: obj.slope,
            manual_value: obj.manual_value,
            ..Default::default()
        };

        match &obj.shape {
            Shape::Rectangle(DesignRectangle { x, y, w, h })
            | Shape::Ellipse(DesignEllipse { x, y, w, h }) => {
                data.x = Some(*x);
                data.y = Some(*y);
                data.w = Some(*w);
                data.h = Some(*h);
            }
            Shape::Line(line) => {
                data.x1 = Some(line.start.x);
                data.y1 = Some(line.start.y);
                data.x2 = Some(line.end.x);
                data.y2 = Some(line.end.y);
            }
            Shape::Triangle(tri) => {
                data.points = Some(tri.points.iter().map(|p| (p.x, p.y)).collect());
            }
            Shape::Text(text) => {
                data.x = Some(text.x);
                data.y = Some(text.y);
                data.text = Some(text.text.clone());
                data.summary = text.summary;
            }
        }

        data
    }

    /// Convert ShapeData to DrawingObject. The value is re-derived unless it
    /// was entered by hand.
    pub fn to_object(&self) -> Result<DrawingObject, ProjectError> {
        let id = self.parsed_id().unwrap_or_else(Uuid::new_v4);
        let n = |v: Option<f64>| v.unwrap_or(0.0);

        let shape = match self.shape_type.parse::<ShapeType>()? {
            ShapeType::Rect => Shape::Rectangle(DesignRectangle::new(
                n(self.x),
                n(self.y),
                n(self.w),
                n(self.h),
            )),
            ShapeType::Ellipse => Shape::Ellipse(DesignEllipse::new(
                n(self.x),
                n(self.y),
                n(self.w),
                n(self.h),
            )),
            ShapeType::Line => Shape::Line(DesignLine::new(
                Point::new(n(self.x1), n(self.y1)),
                Point::new(n(self.x2), n(self.y2)),
            )),
            ShapeType::Triangle => {
                let points: Vec<Point> = self
                    .points
                    .iter()
                    .flatten()
                    .map(|(x, y)| Point::new(*x, *y))
                    .collect();
                let tri = DesignTriangle::from_slice(&points).ok_or(
                    ProjectError::TrianglePoints {
                        id,
                        found: points.len(),
                    },
                )?;
                Shape::Triangle(tri)
            }
            ShapeType::Text => {
                let mut text =
                    DesignText::new(n(self.x), n(self.y), self.text.clone().unwrap_or_default());
                text.summary = self.summary;
                Shape::Text(text)
            }
        };

        let mut obj = DrawingObject::with_id(id, shape);
        if let Some(color) = &self.color {
            obj.color = color.clone();
        }
        obj.slope = self.slope;
        obj.manual_value = self.manual_value && !obj.is_text();
        if obj.manual_value {
            obj.value = self.value;
        } else {
            derive_value(&mut obj);
        }
        Ok(obj)
    }

    fn parsed_id(&self) -> Option<Uuid> {
        let raw = self.id.as_deref()?;
        match Uuid::parse_str(raw) {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::warn!("Replacing malformed shape id '{}'", raw);
                None
            }
        }
    }
}

impl ProjectFile {
    /// Create a new project file with default values
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: ProjectMetadata {
                name: name.into(),
                ..Default::default()
            },
            pdf_path: None,
            shapes_by_page: BTreeMap::new(),
            page_slopes: BTreeMap::new(),
            slope_presets: Vec::new(),
        }
    }

    /// Captures a page store and its document.
    pub fn from_store(
        name: impl Into<String>,
        store: &PageStore,
        pdf_path: Option<&Path>,
        slope_presets: &[f64],
    ) -> Self {
        let mut project = Self::new(name);
        project.pdf_path = pdf_path.map(Path::to_path_buf);
        project.shapes_by_page = store
            .pages()
            .map(|(page, shapes)| (page, shapes.iter().map(ShapeData::from_object).collect()))
            .collect();
        project.page_slopes = store.page_slopes().clone();
        project.slope_presets = slope_presets.to_vec();
        project
    }

    /// Rebuilds the page store. Repeated ids are replaced with fresh ones.
    pub fn to_store(&self) -> Result<PageStore> {
        let mut store = PageStore::new();

        for (page, records) in &self.shapes_by_page {
            for record in records {
                let mut obj = record
                    .to_object()
                    .with_context(|| format!("Invalid shape on page {}", page))?;
                if store.contains(obj.id) {
                    tracing::warn!("Duplicate shape id {} on page {}, regenerating", obj.id, page);
                    obj.id = Uuid::new_v4();
                }
                store.push(*page, obj)?;
            }
        }

        for (page, slope) in &self.page_slopes {
            store
                .set_page_slope(*page, *slope)
                .with_context(|| format!("Invalid slope for page {}", page))?;
        }

        Ok(store)
    }

    /// Save project to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize project")?;

        std::fs::write(path.as_ref(), json).context("Failed to write project file")?;

        Ok(())
    }

    /// Load project from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read project file")?;

        let mut project: ProjectFile =
            serde_json::from_str(&content).context("Failed to parse project file")?;

        project.metadata.modified = Utc::now();

        Ok(project)
    }
}
