//! Tests for the page model and manifest discovery.

use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::error::RatingError;
use crate::rating::DisplayIcon;

fn stars_json() -> Value {
    json!([{"rating": 1}, {"rating": "2"}, {"rating": 3}, {"rating": 4}, {"rating": 5}])
}

#[fixture]
fn manifest_json() -> Value {
    json!({
        "title": "Movies Store",
        "elements": [
            {
                "kind": "star-rating-input",
                "item_id": 7,
                "hidden_value": "3",
                "stars": stars_json(),
                "form": {
                    "action": "/movies/7/rate/",
                    "item_field": "movie_id",
                    "fields": {"csrfmiddlewaretoken": "abc"}
                },
                "submit": {"label": "Rate"},
                "feedback": true
            },
            {"kind": "navbar"},
            {"kind": "star-rating-display", "item_id": "7", "average": "4.5", "count": 2},
            {"kind": "star-rating-display", "item_id": "8"}
        ]
    })
}

fn discover(value: &Value) -> Discovery {
    PageManifest::from_json(&value.to_string())
        .expect("manifest should decode")
        .discover()
}

#[rstest]
fn discovers_containers_and_displays(manifest_json: Value) {
    let discovery = discover(&manifest_json);

    assert!(discovery.skipped.is_empty());
    assert_eq!(discovery.page.title.as_deref(), Some("Movies Store"));
    assert_eq!(discovery.page.containers.len(), 1);
    assert_eq!(discovery.page.displays.len(), 2);

    let container = discovery
        .page
        .containers
        .first()
        .expect("container discovered");
    assert_eq!(container.item_id().as_str(), "7");
    assert_eq!(container.hidden_value(), Some("3"));
    assert_eq!(container.pending(), 3);
    assert_eq!(container.stars().len(), 5);

    let form = container.form().expect("form attached");
    assert_eq!(form.action, "/movies/7/rate/");
    assert_eq!(form.item_field, "movie_id");
    assert_eq!(form.rating_field, "rating");
    assert_eq!(
        form.extra_fields,
        vec![("csrfmiddlewaretoken".to_owned(), "abc".to_owned())]
    );

    let submit = container.submit().expect("submit control attached");
    assert_eq!(submit.label(), "Rate");
    assert!(!submit.is_visible(), "submit control starts hidden");
    assert!(container.feedback().is_some());
}

#[rstest]
fn display_starts_from_manifest_aggregate(manifest_json: Value) {
    let discovery = discover(&manifest_json);
    let display = discovery.page.displays.first().expect("display");

    assert_eq!(display.average_text(), "4.5");
    assert_eq!(display.count_text(), "(2 ratings)");
    assert_eq!(display.icons().last(), Some(&DisplayIcon::Half));
}

#[rstest]
fn display_without_average_is_empty(manifest_json: Value) {
    let discovery = discover(&manifest_json);
    let display = discovery.page.displays.get(1).expect("second display");

    assert_eq!(display.icons(), &[DisplayIcon::Empty; 5]);
    assert_eq!(display.count_text(), "(0 ratings)");
}

#[rstest]
#[case::too_few_stars(
    json!({"kind": "star-rating-input", "item_id": "1", "stars": [{"rating": 1}]}),
    "expected 5 star controls, found 1"
)]
#[case::misnumbered_star(
    json!({
        "kind": "star-rating-input",
        "item_id": "1",
        "stars": [{"rating": 1}, {"rating": 2}, {"rating": 4}, {"rating": 4}, {"rating": 5}]
    }),
    "star 3 carries rating '4'"
)]
#[case::empty_identifier(
    json!({"kind": "star-rating-input", "item_id": " ", "stars": stars_json()}),
    "item identifier is empty"
)]
fn malformed_containers_are_skipped(#[case] element: Value, #[case] reason: &str) {
    let discovery = discover(&json!({ "elements": [element] }));

    assert!(discovery.page.containers.is_empty());
    let skipped = discovery.skipped.first().expect("one skipped container");
    assert_eq!(skipped.reason, reason);
}

#[test]
fn numeric_hidden_value_is_accepted() {
    let discovery = discover(&json!({
        "elements": [
            {"kind": "star-rating-input", "item_id": 7, "hidden_value": 3, "stars": stars_json()}
        ]
    }));
    let container = discovery.page.containers.first().expect("container");

    assert_eq!(container.hidden_value(), Some("3"));
    assert_eq!(container.pending(), 3);
}

#[test]
fn mistyped_container_is_skipped_without_losing_the_page() {
    let discovery = discover(&json!({
        "elements": [
            {"kind": "star-rating-input", "item_id": 7, "stars": "five", "feedback": "yes"},
            {"kind": "star-rating-input", "item_id": "8", "stars": stars_json()},
            {"kind": "star-rating-display", "item_id": "8", "average": 4, "count": 1}
        ]
    }));

    let accepted: Vec<&str> = discovery
        .page
        .containers
        .iter()
        .map(|container| container.item_id().as_str())
        .collect();
    assert_eq!(accepted, vec!["8"]);
    assert_eq!(discovery.page.displays.len(), 1);

    let skipped = discovery.skipped.first().expect("one skipped container");
    assert_eq!(skipped.item_id, "7");
    assert!(
        skipped.reason.starts_with("container could not be decoded"),
        "unexpected reason: {}",
        skipped.reason
    );
}

#[test]
fn undecodable_display_is_ignored() {
    let discovery = discover(&json!({
        "elements": [
            {"kind": "star-rating-display", "item_id": "8", "count": "many"},
            {"kind": "star-rating-input", "item_id": "8", "stars": stars_json()}
        ]
    }));

    assert!(discovery.page.displays.is_empty());
    assert_eq!(discovery.page.containers.len(), 1);
    assert!(discovery.skipped.is_empty());
}

#[test]
fn minimal_container_has_no_optional_parts() {
    let discovery = discover(&json!({
        "elements": [{"kind": "star-rating-input", "item_id": "3", "stars": stars_json()}]
    }));
    let container = discovery.page.containers.first().expect("container");

    assert!(container.form().is_none());
    assert!(container.submit().is_none());
    assert!(container.feedback().is_none());
    assert_eq!(container.pending(), 0);
}

#[test]
fn invalid_json_is_reported() {
    let error = PageManifest::from_json("{not json").expect_err("should fail");
    assert!(
        matches!(error, RatingError::InvalidManifest { .. }),
        "expected InvalidManifest, got {error:?}"
    );
}

#[rstest]
fn load_reads_manifest_from_disk(manifest_json: Value) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("page.json")).expect("UTF-8 path");
    std::fs::write(&path, manifest_json.to_string()).expect("write manifest");

    let discovery = Page::load(&path).expect("load manifest");

    assert_eq!(discovery.page.containers.len(), 1);
}

#[test]
fn submit_control_busy_scope_restores_label() {
    let mut control = SubmitControl::new("Rate");

    let original = control.enter_busy();
    assert_eq!(control.label(), BUSY_LABEL);
    assert!(control.is_disabled());

    control.leave_busy(original);
    assert_eq!(control.label(), "Rate");
    assert!(!control.is_disabled());
}
