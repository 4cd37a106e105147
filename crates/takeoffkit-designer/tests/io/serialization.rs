use std::path::Path;

use takeoffkit_designer::aggregation::Aggregator;
use takeoffkit_designer::model::{
    DesignEllipse, DesignLine, DesignRectangle, DesignText, DesignTriangle, DrawingObject, Point,
    Shape,
};
use takeoffkit_designer::page_store::PageStore;
use takeoffkit_designer::serialization::{ProjectFile, ShapeData, FILE_FORMAT_VERSION};
use takeoffkit_designer::derive_value;
use takeoffkit_settings::CategorySettings;
use tempfile::NamedTempFile;

fn object(shape: Shape, color: &str) -> DrawingObject {
    let mut obj = DrawingObject::new(shape).colored(color);
    derive_value(&mut obj);
    obj
}

fn sample_store() -> PageStore {
    let mut store = PageStore::new();
    store
        .push(0, object(Shape::Rectangle(DesignRectangle::new(0.0, 0.0, 10.0, 10.0)), "red"))
        .unwrap();
    store
        .push(
            0,
            object(Shape::Ellipse(DesignEllipse::new(5.0, 5.0, 2.0, 4.0)), "cyan"),
        )
        .unwrap();
    store
        .push(
            3,
            object(
                Shape::Triangle(DesignTriangle::new(
                    Point::new(0.0, 0.0),
                    Point::new(10.0, 0.0),
                    Point::new(0.0, 7.0),
                )),
                "blue",
            ),
        )
        .unwrap();
    store
        .push(
            3,
            object(
                Shape::Line(DesignLine::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0))),
                "green",
            ),
        )
        .unwrap();
    store
        .push(3, object(Shape::Text(DesignText::new(1.0, 1.0, "4*2.5=")), "orange"))
        .unwrap();
    store.set_page_slope(3, 1.118).unwrap();
    store
}

#[test]
fn test_round_trip_preserves_totals() {
    let store = sample_store();
    let project = ProjectFile::from_store("House A", &store, Some(Path::new("plan.pdf")), &[1.118]);

    let file = NamedTempFile::new().unwrap();
    project.save_to_file(file.path()).unwrap();
    let loaded = ProjectFile::load_from_file(file.path()).unwrap();
    let restored = loaded.to_store().unwrap();

    let categories = CategorySettings::default();
    let agg = Aggregator::new(&categories);
    assert_eq!(agg.document_stats(&restored), agg.document_stats(&store));

    assert_eq!(loaded.version, FILE_FORMAT_VERSION);
    assert_eq!(loaded.metadata.name, "House A");
    assert_eq!(loaded.slope_presets, vec![1.118]);
    assert_eq!(restored.len(), store.len());
    for (page, shapes) in store.pages() {
        let ids: Vec<_> = shapes.iter().map(|o| o.id).collect();
        let restored_ids: Vec<_> = restored.shapes(page).iter().map(|o| o.id).collect();
        assert_eq!(ids, restored_ids);
    }
}

#[test]
fn test_page_keys_round_trip_as_integers() {
    let store = sample_store();
    let project = ProjectFile::from_store("keys", &store, None, &[]);
    let json = serde_json::to_string(&project).unwrap();
    assert!(json.contains("\"3\":"));

    let parsed: ProjectFile = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.shapes_by_page.keys().copied().collect::<Vec<_>>(), vec![0, 3]);
    assert_eq!(parsed.page_slopes.get(&3), Some(&1.118));
}

#[test]
fn test_legacy_file_without_ids_loads() {
    let json = r#"{
        "pdf_path": "old.pdf",
        "shapes_by_page": {
            "0": [
                {"type": "rect", "x": 0, "y": 0, "w": 4, "h": 5, "color": "red", "value": 1},
                {"type": "text", "x": 3, "y": 3, "w": 80, "h": 20, "text": "3*3=", "color": "red"}
            ],
            "2": [
                {"type": "line", "x1": 0, "y1": 0, "x2": 0, "y2": 12, "color": "green"}
            ]
        }
    }"#;

    let project: ProjectFile = serde_json::from_str(json).unwrap();
    assert_eq!(project.version, "0");
    let store = project.to_store().unwrap();

    assert_eq!(store.len(), 3);
    // Stored values are re-derived from geometry
    assert_eq!(store.shapes(0)[0].value, Some(20.0));
    assert_eq!(store.shapes(0)[1].value, Some(9.0));
    assert_eq!(store.shapes(2)[0].value, Some(12.0));
    assert_ne!(store.shapes(0)[0].id, store.shapes(0)[1].id);
}

#[test]
fn test_manual_value_survives_reload() {
    let mut obj = object(Shape::Rectangle(DesignRectangle::new(0.0, 0.0, 2.0, 2.0)), "red");
    obj.value = Some(7.5);
    obj.manual_value = true;

    let data = ShapeData::from_object(&obj);
    assert!(data.manual_value);
    let back = data.to_object().unwrap();
    assert_eq!(back.value, Some(7.5));
    assert!(back.manual_value);
    assert_eq!(back.id, obj.id);
}

#[test]
fn test_shape_records_are_flat() {
    let obj = object(
        Shape::Line(DesignLine::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0))),
        "green",
    );
    let value = serde_json::to_value(ShapeData::from_object(&obj)).unwrap();

    assert_eq!(value["type"], "line");
    assert_eq!(value["x1"], 1.0);
    assert_eq!(value["y2"], 4.0);
    assert!(value.get("w").is_none());
    assert!(value.get("manual_value").is_none());
}

#[test]
fn test_malformed_records_are_rejected() {
    let triangle = ShapeData {
        shape_type: "triangle".to_string(),
        points: Some(vec![(0.0, 0.0), (1.0, 1.0)]),
        ..Default::default()
    };
    assert!(triangle.to_object().is_err());

    let unknown = ShapeData {
        shape_type: "hexagon".to_string(),
        ..Default::default()
    };
    assert!(unknown.to_object().is_err());

    let mut project = ProjectFile::new("bad");
    project.shapes_by_page.insert(0, vec![triangle]);
    let err = project.to_store().unwrap_err();
    assert!(format!("{:#}", err).contains("page 0"));
}

#[test]
fn test_duplicate_ids_are_regenerated() {
    let obj = object(Shape::Rectangle(DesignRectangle::new(0.0, 0.0, 1.0, 1.0)), "red");
    let record = ShapeData::from_object(&obj);

    let mut project = ProjectFile::new("dup");
    project.shapes_by_page.insert(0, vec![record.clone(), record]);
    let store = project.to_store().unwrap();

    let shapes = store.shapes(0);
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[0].id, obj.id);
    assert_ne!(shapes[1].id, obj.id);
}

#[test]
fn test_invalid_page_slope_is_rejected() {
    let mut project = ProjectFile::new("slope");
    project.page_slopes.insert(1, -2.0);
    assert!(project.to_store().is_err());
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(ProjectFile::load_from_file(dir.path().join("none.json")).is_err());
}
