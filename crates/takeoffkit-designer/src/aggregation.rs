//! Category totals and take-off reports.
//!
//! Every object whose color is in the category table and that has a value
//! contributes to one bucket. Roof values are multiplied by the resolved
//! slope (object override, then page default, then 1.0). Openings (windows
//! and doors) are subtracted from the gross wall area to give `wall_final`.
//! Generated report text never contributes.

use serde::Serialize;

use takeoffkit_core::constants::FORMULA_PLACES;
use takeoffkit_core::{format_fixed, truncate_3, Category};
use takeoffkit_settings::config::normalize_presets;
use takeoffkit_settings::CategorySettings;

use crate::model::DrawingObject;
use crate::page_store::PageStore;

/// Sum per category plus the net wall area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CategoryTotals {
    pub wall: f64,
    pub roof: f64,
    pub bshita: f64,
    pub koya: f64,
    pub window: f64,
    pub door: f64,
    pub wall_final: f64,
}

impl CategoryTotals {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Wall => self.wall,
            Category::Roof => self.roof,
            Category::Bshita => self.bshita,
            Category::Koya => self.koya,
            Category::Window => self.window,
            Category::Door => self.door,
        }
    }

    fn add(&mut self, category: Category, value: f64) {
        let slot = match category {
            Category::Wall => &mut self.wall,
            Category::Roof => &mut self.roof,
            Category::Bshita => &mut self.bshita,
            Category::Koya => &mut self.koya,
            Category::Window => &mut self.window,
            Category::Door => &mut self.door,
        };
        *slot += value;
    }

    fn openings(&self) -> f64 {
        Category::ALL
            .iter()
            .filter(|c| c.is_opening())
            .map(|c| self.get(*c))
            .sum()
    }

    fn update_wall_final(&mut self) {
        self.wall_final = self.wall - self.openings();
    }

    fn accumulate(&mut self, other: &CategoryTotals) {
        for category in Category::ALL {
            self.add(category, other.get(category));
        }
        self.wall_final += other.wall_final;
    }

    /// One `"<label>: <value>"` line per bucket, `wall_final` first.
    pub fn lines(&self) -> Vec<String> {
        std::iter::once(format!("wall_final: {}", fixed(self.wall_final)))
            .chain(
                [
                    Category::Roof,
                    Category::Bshita,
                    Category::Koya,
                    Category::Window,
                    Category::Door,
                ]
                .iter()
                .map(|c| format!("{}: {}", c, fixed(self.get(*c)))),
            )
            .collect()
    }
}

/// Report for a single page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageStats {
    pub page: usize,
    pub totals: CategoryTotals,
    pub lines: Vec<String>,
}

/// Report for the whole document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentStats {
    pub pages: Vec<PageStats>,
    pub totals: CategoryTotals,
}

impl DocumentStats {
    /// Every page's lines under a page header, in page order.
    pub fn lines(&self) -> Vec<String> {
        self.pages
            .iter()
            .flat_map(|page| {
                std::iter::once(page_header(page.page)).chain(page.lines.iter().cloned())
            })
            .collect()
    }
}

/// One contributing object.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub category: Category,
    /// Value after the slope multiplier.
    pub amount: f64,
    pub line: String,
}

/// Computes contributions and reports using a color to category table.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    categories: &'a CategorySettings,
}

impl<'a> Aggregator<'a> {
    pub fn new(categories: &'a CategorySettings) -> Self {
        Self { categories }
    }

    pub fn category_of(&self, color: &str) -> Option<Category> {
        self.categories.category_of(color)
    }

    /// Object override, then page default, then 1.0.
    pub fn resolve_slope(obj: &DrawingObject, page_default: Option<f64>) -> f64 {
        obj.slope.or(page_default).unwrap_or(1.0)
    }

    /// What `obj` adds to the totals, or `None` when it is out of scope.
    pub fn contribution(
        &self,
        obj: &DrawingObject,
        page_default: Option<f64>,
    ) -> Option<Contribution> {
        if obj.is_summary() {
            return None;
        }
        let value = obj.value?;
        let category = self.category_of(&obj.color)?;

        Some(if category == Category::Roof {
            let slope = Self::resolve_slope(obj, page_default);
            let amount = value * slope;
            Contribution {
                category,
                amount,
                line: format!("{} × {} = {}", fixed(value), fixed(slope), fixed(amount)),
            }
        } else {
            Contribution {
                category,
                amount: value,
                line: format!("{}: {}", category, fixed(value)),
            }
        })
    }

    pub fn page_stats(&self, store: &PageStore, page: usize) -> PageStats {
        let page_default = store.page_slope(page);
        let mut totals = CategoryTotals::default();
        let mut lines = Vec::new();

        for c in store
            .shapes(page)
            .iter()
            .filter_map(|obj| self.contribution(obj, page_default))
        {
            totals.add(c.category, c.amount);
            lines.push(c.line);
        }

        totals.update_wall_final();
        lines.push(format!(
            "wall_final: {} - ({} + {}) = {}",
            fixed(totals.wall),
            fixed(totals.window),
            fixed(totals.door),
            fixed(totals.wall_final)
        ));

        PageStats {
            page,
            totals,
            lines,
        }
    }

    pub fn document_stats(&self, store: &PageStore) -> DocumentStats {
        let pages: Vec<PageStats> = store
            .page_indices()
            .into_iter()
            .map(|page| self.page_stats(store, page))
            .collect();

        let mut totals = CategoryTotals::default();
        for page in &pages {
            totals.accumulate(&page.totals);
        }

        DocumentStats { pages, totals }
    }
}

/// Header line for a page (pages are shown 1-based).
pub fn page_header(page: usize) -> String {
    format!("[Page {}]", page + 1)
}

fn fixed(x: f64) -> String {
    format_fixed(x, FORMULA_PLACES)
}

/// Roof slope multiplier from a rise: `truncate3(sqrt(h² + b²) / b)`.
///
/// `None` unless the base is positive and both inputs are finite.
pub fn slope_from_rise(height: f64, base: f64) -> Option<f64> {
    if !(height.is_finite() && base.is_finite() && base > 0.0) {
        return None;
    }
    Some(truncate_3((height * height + base * base).sqrt() / base))
}

/// Sorted, duplicate-free list of slope multipliers offered to the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlopePresets {
    values: Vec<f64>,
}

impl SlopePresets {
    pub fn new(values: &[f64]) -> Self {
        Self {
            values: normalize_presets(values),
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Adds a multiplier. Returns false when it was already present.
    pub fn add(&mut self, value: f64) -> bool {
        match self.values.binary_search_by(|v| v.total_cmp(&value)) {
            Ok(_) => false,
            Err(pos) => {
                self.values.insert(pos, value);
                true
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
