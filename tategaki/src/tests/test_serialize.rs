// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interchange-format round trips.

use styled_runs::StyledRun;

use super::{Content, Style};
use crate::document::Document;
use crate::editor::Editor;
use crate::element::{DrawMode, Element, ImageElement, TextElement};
use crate::layout::{LayoutMode, TextDefaults};
use crate::options::{EditorOptions, GridKind};
use crate::serialize::{self, DocumentError};

type Doc = Document<String>;

fn sample_document() -> Doc {
    let mut doc = Doc::new();

    let mut text = TextElement::new("title", 60.0, 60.0, TextDefaults::default());
    text.set_content(Content::from_runs(vec![
        StyledRun::new("春は", Style::new()),
        StyledRun::new(
            "あけぼの",
            Style {
                color: Some("#cc0000".to_owned()),
                ..Style::new()
            },
        ),
    ]));
    text.set_constraints(0.0, 300.0);
    text.set_size(30.0, 300.0);
    doc.add(text.into());

    let mut image = ImageElement::new("photo", 200.0, 80.0, 120.0, 90.0, "photo.png");
    image.set_draw_mode(DrawMode::Contain);
    image.set_border_color("#333333");
    image.set_border_width(2.0);
    doc.add(image.into());

    doc
}

#[test]
fn export_import_preserves_everything() {
    let options = EditorOptions::default();
    let doc = sample_document();

    let json = serialize::export(&options, &doc).unwrap();
    let (options_back, doc_back) = serialize::import::<String>(&json, &options).unwrap();

    assert_eq!(options_back, options);
    assert_eq!(doc_back.len(), 2);

    let ids: Vec<&str> = doc_back.iter().map(Element::id).collect();
    assert_eq!(ids, ["title", "photo"]);

    let text = doc_back.get("title").unwrap().as_text().unwrap();
    assert_eq!(text.text(), "春はあけぼの");
    assert_eq!(text.content().runs().len(), 2);
    assert_eq!(text.constraints(), (0.0, 300.0));
    assert_eq!(text.position(), (60.0, 60.0));

    let image = doc_back.get("photo").unwrap().as_image().unwrap();
    assert_eq!(image.draw_mode(), DrawMode::Contain);
    assert_eq!(image.border_color(), "#333333");
    assert_eq!(image.border_width(), 2.0);
    assert_eq!(image.size(), (120.0, 90.0));
}

#[test]
fn canvas_settings_travel_with_the_document() {
    let mut options = EditorOptions::default();
    options.width = 1024.0;
    options.height = 768.0;
    options.padding = 40.0;
    options.mode = LayoutMode::Horizontal;
    options.grid.kind = GridKind::Grid;

    let json = serialize::export(&options, &Doc::new()).unwrap();
    let (back, _) = serialize::import::<String>(&json, &EditorOptions::default()).unwrap();

    assert_eq!(back.width, 1024.0);
    assert_eq!(back.height, 768.0);
    assert_eq!(back.padding, 40.0);
    assert_eq!(back.mode, LayoutMode::Horizontal);
    assert_eq!(back.grid.kind, GridKind::Grid);
}

#[test]
fn exported_json_uses_the_documented_shape() {
    let json = serialize::export(&EditorOptions::default(), &sample_document()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["version"], "1.0");
    assert_eq!(value["canvas"]["mode"], "vertical");
    let elements = value["elements"].as_array().unwrap();
    assert_eq!(elements[0]["type"], "text");
    assert_eq!(elements[0]["layoutConstraintHeight"], 300.0);
    assert_eq!(elements[0]["fragments"][1]["style"]["color"], "#cc0000");
    assert_eq!(elements[1]["type"], "image");
    assert_eq!(elements[1]["drawMode"], "contain");
    assert_eq!(elements[1]["borderColor"], "#333333");
}

#[test]
fn unknown_versions_are_rejected() {
    let options = EditorOptions::default();
    let json = serialize::export(&options, &Doc::new())
        .unwrap()
        .replace("\"1.0\"", "\"9.9\"");
    let err = serialize::import::<String>(&json, &options).unwrap_err();
    assert!(matches!(err, DocumentError::UnsupportedVersion(v) if v == "9.9"));
}

#[test]
fn malformed_json_is_an_error_not_a_panic() {
    let err = serialize::import::<String>("{not json", &EditorOptions::default());
    assert!(matches!(err, Err(DocumentError::Json(_))));
}

#[test]
fn editor_round_trip_is_stable() {
    let mut ed = Editor::<String>::new(EditorOptions::default());
    ed.add_text(100.0, 100.0, "枕草子");
    ed.add_image(300.0, 120.0, 150.0, 100.0, "scroll.png");

    let exported = ed.export_json().unwrap();

    let mut loaded = Editor::<String>::new(EditorOptions::default());
    loaded.load_json(&exported).unwrap();
    assert_eq!(loaded.document().len(), 2);
    assert!(!loaded.can_undo());

    // A second export of the loaded state is byte-identical.
    assert_eq!(loaded.export_json().unwrap(), exported);
}

#[test]
fn a_failed_load_leaves_the_editor_untouched() {
    let mut ed = Editor::<String>::new(EditorOptions::default());
    let id = ed.add_text(100.0, 100.0, "本文");

    assert!(ed.load_json("{\"version\":\"1.0\"").is_err());
    assert!(ed.document().contains(&id));
    assert!(ed.can_undo());
}
