//! Page-indexed storage for drawing objects.
//!
//! Each page owns an ordered list of objects; the last one is drawn on top
//! and wins hit-tests. Object ids are unique across all pages.

use std::collections::BTreeMap;

use takeoffkit_core::ProjectError;
use uuid::Uuid;

use crate::model::DrawingObject;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageStore {
    pages: BTreeMap<usize, Vec<DrawingObject>>,
    page_slopes: BTreeMap<usize, f64>,
}

impl PageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Objects on `page` in draw order.
    pub fn shapes(&self, page: usize) -> &[DrawingObject] {
        self.pages.get(&page).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Non-empty pages in ascending order.
    pub fn pages(&self) -> impl Iterator<Item = (usize, &[DrawingObject])> {
        self.pages
            .iter()
            .filter(|(_, shapes)| !shapes.is_empty())
            .map(|(page, shapes)| (*page, shapes.as_slice()))
    }

    /// Pages that hold objects or a slope, ascending.
    pub fn page_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .pages()
            .map(|(page, _)| page)
            .chain(self.page_slopes.keys().copied())
            .collect();
        indices.sort_unstable();
        indices.dedup();
        indices
    }

    pub fn len(&self) -> usize {
        self.pages.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.position(id).is_some()
    }

    /// Appends `obj` on top of `page`.
    pub fn push(&mut self, page: usize, obj: DrawingObject) -> Result<Uuid, ProjectError> {
        if self.contains(obj.id) {
            return Err(ProjectError::DuplicateShapeId { id: obj.id });
        }
        let id = obj.id;
        self.pages.entry(page).or_default().push(obj);
        Ok(id)
    }

    /// Page and list index of an object.
    pub fn position(&self, id: Uuid) -> Option<(usize, usize)> {
        self.pages.iter().find_map(|(page, shapes)| {
            shapes
                .iter()
                .position(|obj| obj.id == id)
                .map(|index| (*page, index))
        })
    }

    pub fn get(&self, id: Uuid) -> Option<&DrawingObject> {
        let (page, index) = self.position(id)?;
        self.pages.get(&page)?.get(index)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut DrawingObject> {
        let (page, index) = self.position(id)?;
        self.pages.get_mut(&page)?.get_mut(index)
    }

    pub fn page_of(&self, id: Uuid) -> Option<usize> {
        self.position(id).map(|(page, _)| page)
    }

    pub fn remove(&mut self, id: Uuid) -> Option<DrawingObject> {
        let (page, index) = self.position(id)?;
        let shapes = self.pages.get_mut(&page)?;
        let removed = shapes.remove(index);
        if shapes.is_empty() {
            self.pages.remove(&page);
        }
        Some(removed)
    }

    /// Drops a page's objects and slope and moves every later page down by one.
    pub fn remove_page(&mut self, page: usize) -> Vec<DrawingObject> {
        let removed = self.pages.remove(&page).unwrap_or_default();
        self.page_slopes.remove(&page);
        self.pages = shift_down(std::mem::take(&mut self.pages), page);
        self.page_slopes = shift_down(std::mem::take(&mut self.page_slopes), page);
        removed
    }

    pub fn page_slope(&self, page: usize) -> Option<f64> {
        self.page_slopes.get(&page).copied()
    }

    pub fn page_slopes(&self) -> &BTreeMap<usize, f64> {
        &self.page_slopes
    }

    /// Sets the default roof slope of a page.
    pub fn set_page_slope(&mut self, page: usize, slope: f64) -> Result<(), ProjectError> {
        if !(slope.is_finite() && slope > 0.0) {
            return Err(ProjectError::InvalidSlope { value: slope });
        }
        self.page_slopes.insert(page, slope);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.pages.clear();
        self.page_slopes.clear();
    }
}

fn shift_down<T>(map: BTreeMap<usize, T>, removed: usize) -> BTreeMap<usize, T> {
    map.into_iter()
        .map(|(page, v)| if page > removed { (page - 1, v) } else { (page, v) })
        .collect()
}
