use takeoffkit_core::Category;
use takeoffkit_designer::aggregation::{slope_from_rise, Aggregator, SlopePresets};
use takeoffkit_designer::model::{DesignRectangle, DesignText, DrawingObject, Shape};
use takeoffkit_designer::page_store::PageStore;
use takeoffkit_designer::derive_value;
use takeoffkit_settings::{CategoryMapping, CategorySettings};

fn rect(w: f64, h: f64, color: &str) -> DrawingObject {
    let mut obj =
        DrawingObject::new(Shape::Rectangle(DesignRectangle::new(0.0, 0.0, w, h))).colored(color);
    derive_value(&mut obj);
    obj
}

fn text(content: &str, color: &str) -> DrawingObject {
    let mut obj = DrawingObject::new(Shape::Text(DesignText::new(0.0, 0.0, content))).colored(color);
    derive_value(&mut obj);
    obj
}

fn wall_with_openings() -> PageStore {
    let mut store = PageStore::new();
    store.push(0, rect(10.0, 10.0, "red")).unwrap();
    store.push(0, rect(2.0, 5.0, "cyan")).unwrap();
    store.push(0, rect(1.0, 5.0, "magenta")).unwrap();
    store
}

#[test]
fn test_wall_final_subtracts_openings() {
    let categories = CategorySettings::default();
    let stats = Aggregator::new(&categories).page_stats(&wall_with_openings(), 0);

    assert_eq!(stats.totals.wall, 100.0);
    assert_eq!(stats.totals.window, 10.0);
    assert_eq!(stats.totals.door, 5.0);
    assert_eq!(stats.totals.wall_final, 85.0);
    assert_eq!(
        stats.lines,
        vec![
            "wall: 100.000",
            "window: 10.000",
            "door: 5.000",
            "wall_final: 100.000 - (10.000 + 5.000) = 85.000",
        ]
    );
}

#[test]
fn test_roof_contribution_uses_slope() {
    let categories = CategorySettings::default();
    let mut roof = rect(10.0, 5.0, "blue");
    roof.slope = Some(1.2);

    let c = Aggregator::new(&categories).contribution(&roof, None).unwrap();
    assert_eq!(c.category, Category::Roof);
    assert!((c.amount - 60.0).abs() < 1e-9);
    assert_eq!(c.line, "50.000 × 1.200 = 60.000");
}

#[test]
fn test_slope_resolution_order() {
    let categories = CategorySettings::default();
    let mut store = PageStore::new();
    let mut with_override = rect(10.0, 10.0, "blue");
    with_override.slope = Some(2.0);
    store.push(0, with_override).unwrap();
    store.push(0, rect(10.0, 10.0, "blue")).unwrap();
    store.push(1, rect(10.0, 10.0, "blue")).unwrap();
    store.set_page_slope(0, 1.5).unwrap();

    let agg = Aggregator::new(&categories);
    // 100 * 2.0 + 100 * 1.5
    assert!((agg.page_stats(&store, 0).totals.roof - 350.0).abs() < 1e-9);
    // No page default: 1.0
    assert_eq!(agg.page_stats(&store, 1).totals.roof, 100.0);
}

#[test]
fn test_out_of_scope_objects_are_skipped() {
    let categories = CategorySettings::default();
    let mut store = PageStore::new();
    store.push(0, rect(10.0, 10.0, "purple")).unwrap();
    store.push(0, text("just a memo", "red")).unwrap();
    let mut summary = DrawingObject::new(Shape::Text(DesignText::new_summary(0.0, 0.0, "99")))
        .colored("red");
    summary.value = Some(99.0);
    store.push(0, summary).unwrap();

    let stats = Aggregator::new(&categories).page_stats(&store, 0);
    assert_eq!(stats.totals.wall, 0.0);
    assert_eq!(stats.lines, vec!["wall_final: 0.000 - (0.000 + 0.000) = 0.000"]);
}

#[test]
fn test_text_formula_contributes() {
    let categories = CategorySettings::default();
    let mut store = PageStore::new();
    store.push(0, text("2.5*4=", "RED")).unwrap();
    store.push(0, text("10/3", "green")).unwrap();

    let stats = Aggregator::new(&categories).page_stats(&store, 0);
    assert_eq!(stats.totals.wall, 10.0);
    assert_eq!(stats.totals.bshita, 3.333);
    assert_eq!(stats.totals.get(Category::Bshita), 3.333);
}

#[test]
fn test_custom_category_table() {
    let categories = CategorySettings {
        mappings: vec![CategoryMapping::new("#ff0000", Category::Koya)],
    };
    let mut store = PageStore::new();
    store.push(0, rect(3.0, 3.0, "#FF0000")).unwrap();
    store.push(0, rect(3.0, 3.0, "red")).unwrap();

    let stats = Aggregator::new(&categories).page_stats(&store, 0);
    assert_eq!(stats.totals.koya, 9.0);
    assert_eq!(stats.totals.wall, 0.0);
}

#[test]
fn test_document_stats_sums_pages_in_order() {
    let categories = CategorySettings::default();
    let mut store = wall_with_openings();
    store.push(2, rect(10.0, 5.0, "red")).unwrap();
    let mut roof = rect(10.0, 10.0, "blue");
    roof.slope = Some(1.25);
    store.push(2, roof).unwrap();

    let doc = Aggregator::new(&categories).document_stats(&store);
    assert_eq!(doc.pages.iter().map(|p| p.page).collect::<Vec<_>>(), vec![0, 2]);
    assert_eq!(doc.totals.wall, 150.0);
    assert_eq!(doc.totals.wall_final, 135.0);
    assert_eq!(doc.totals.roof, 125.0);

    let lines = doc.lines();
    assert_eq!(lines[0], "[Page 1]");
    assert!(lines.contains(&"[Page 3]".to_string()));
    assert!(lines.contains(&"100.000 × 1.250 = 125.000".to_string()));

    assert_eq!(
        doc.totals.lines(),
        vec![
            "wall_final: 135.000",
            "roof: 125.000",
            "bshita: 0.000",
            "koya: 0.000",
            "window: 10.000",
            "door: 5.000",
        ]
    );
}

#[test]
fn test_page_with_only_a_slope_is_reported() {
    let categories = CategorySettings::default();
    let mut store = PageStore::new();
    store.set_page_slope(1, 1.1).unwrap();

    let doc = Aggregator::new(&categories).document_stats(&store);
    assert_eq!(doc.pages.len(), 1);
    assert_eq!(doc.pages[0].page, 1);
}

#[test]
fn test_slope_from_rise() {
    assert_eq!(slope_from_rise(3.0, 4.0), Some(1.25));
    assert_eq!(slope_from_rise(1.0, 2.0), Some(1.118));
    assert_eq!(slope_from_rise(0.0, 5.0), Some(1.0));
    assert_eq!(slope_from_rise(1.0, 0.0), None);
    assert_eq!(slope_from_rise(1.0, -2.0), None);
    assert_eq!(slope_from_rise(f64::NAN, 2.0), None);
}

#[test]
fn test_slope_presets_stay_sorted_and_unique() {
    let mut presets = SlopePresets::new(&[1.2, 1.1, 1.2]);
    assert_eq!(presets.values(), &[1.1, 1.2]);

    assert!(presets.add(1.118));
    assert!(!presets.add(1.2));
    assert_eq!(presets.values(), &[1.1, 1.118, 1.2]);
}
