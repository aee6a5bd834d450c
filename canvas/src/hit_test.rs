use super::*;
use crate::doc::ElementKind;

fn element_at(kind: ElementKind, x: f64, y: f64, w: f64, h: f64) -> Element {
    Element {
        id: uuid::Uuid::new_v4(),
        kind,
        x,
        y,
        width: w,
        height: h,
        fill: "#ccc".to_owned(),
        stroke: None,
        text: None,
    }
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn empty_document_hits_nothing() {
    let doc = Document::new();
    assert!(hit_test(pt(0.0, 0.0), &doc).is_none());
}

#[test]
fn point_inside_hits() {
    let mut doc = Document::new();
    let el = element_at(ElementKind::Rectangle, 10.0, 10.0, 100.0, 50.0);
    let id = el.id;
    doc.push(el);

    assert_eq!(hit_test(pt(50.0, 30.0), &doc), Some(id));
}

#[test]
fn point_outside_misses() {
    let mut doc = Document::new();
    doc.push(element_at(ElementKind::Rectangle, 10.0, 10.0, 100.0, 50.0));

    assert!(hit_test(pt(500.0, 500.0), &doc).is_none());
    assert!(hit_test(pt(9.9, 30.0), &doc).is_none());
    assert!(hit_test(pt(50.0, 60.1), &doc).is_none());
}

#[test]
fn edges_are_inclusive() {
    let mut doc = Document::new();
    let el = element_at(ElementKind::Rectangle, 0.0, 0.0, 100.0, 50.0);
    let id = el.id;
    doc.push(el);

    assert_eq!(hit_test(pt(0.0, 0.0), &doc), Some(id));
    assert_eq!(hit_test(pt(100.0, 50.0), &doc), Some(id));
}

#[test]
fn topmost_overlapping_element_wins() {
    let mut doc = Document::new();
    let below = element_at(ElementKind::Rectangle, 0.0, 0.0, 100.0, 100.0);
    let above = element_at(ElementKind::Ellipse, 25.0, 25.0, 100.0, 100.0);
    let above_id = above.id;
    doc.push(below);
    doc.push(above);

    // Point in the overlap region hits the later (topmost) element.
    assert_eq!(hit_test(pt(50.0, 50.0), &doc), Some(above_id));
}

#[test]
fn lower_element_hit_outside_overlap() {
    let mut doc = Document::new();
    let below = element_at(ElementKind::Rectangle, 0.0, 0.0, 100.0, 100.0);
    let below_id = below.id;
    doc.push(below);
    doc.push(element_at(ElementKind::Ellipse, 80.0, 80.0, 100.0, 100.0));

    assert_eq!(hit_test(pt(10.0, 10.0), &doc), Some(below_id));
}

#[test]
fn ellipse_hits_on_bounding_box_corner() {
    // Ellipses render as rounded boxes; the clickable region is the box.
    let mut doc = Document::new();
    let el = element_at(ElementKind::Ellipse, 0.0, 0.0, 100.0, 100.0);
    let id = el.id;
    doc.push(el);

    assert_eq!(hit_test(pt(1.0, 1.0), &doc), Some(id));
}

#[test]
fn text_hits_on_bounding_box() {
    let mut doc = Document::new();
    let mut el = element_at(ElementKind::Text, 80.0, 220.0, 150.0, 30.0);
    el.text = Some("Design Canvas".to_owned());
    let id = el.id;
    doc.push(el);

    assert_eq!(hit_test(pt(100.0, 230.0), &doc), Some(id));
    assert!(hit_test(pt(100.0, 260.0), &doc).is_none());
}
