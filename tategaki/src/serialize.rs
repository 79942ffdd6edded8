// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The JSON interchange format.
//!
//! Documents are exported as pretty-printed JSON with a top-level version
//! string, a canvas section, and the element list in z-order. Import is
//! parse-then-validate: nothing is constructed until the whole payload
//! deserialized, so a malformed document never half-loads.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use styled_runs::{Brush, RichContent};
use thiserror::Error;

use crate::document::Document;
use crate::element::{DrawMode, Element, ElementId, ImageElement, TextElement};
use crate::layout::LayoutMode;
use crate::options::{EditorOptions, GridOptions};

/// Version written by [`export`] and the only one [`import`] accepts.
pub const FORMAT_VERSION: &str = "1.0";

/// Why a document could not be exported or imported.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported document version {0:?}")]
    UnsupportedVersion(String),
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct DocumentPayload<B: Brush> {
    version: String,
    canvas: CanvasPayload,
    elements: Vec<ElementPayload<B>>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CanvasPayload {
    width: f32,
    height: f32,
    padding: f32,
    mode: LayoutMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    grid: Option<GridOptions>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(tag = "type")]
enum ElementPayload<B: Brush> {
    #[serde(rename = "text", rename_all = "camelCase")]
    Text {
        id: ElementId,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        font_family: String,
        font_size: f32,
        layout_constraint_width: f32,
        layout_constraint_height: f32,
        fragments: RichContent<B>,
    },
    #[serde(rename = "image", rename_all = "camelCase")]
    Image {
        id: ElementId,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        src: String,
        draw_mode: DrawMode,
        border_color: String,
        border_width: f32,
    },
}

impl<B: Brush> ElementPayload<B> {
    fn from_element(element: &Element<B>) -> Self {
        let (x, y) = element.position();
        let (width, height) = element.size();
        match element {
            Element::Text(text) => {
                let (cw, ch) = text.constraints();
                Self::Text {
                    id: text.id().to_owned(),
                    x,
                    y,
                    width,
                    height,
                    font_family: text.font_family().to_owned(),
                    font_size: text.font_size(),
                    layout_constraint_width: cw,
                    layout_constraint_height: ch,
                    fragments: text.content().clone(),
                }
            }
            Element::Image(image) => Self::Image {
                id: image.id().to_owned(),
                x,
                y,
                width,
                height,
                src: image.src().to_owned(),
                draw_mode: image.draw_mode(),
                border_color: image.border_color().to_owned(),
                border_width: image.border_width(),
            },
        }
    }

    fn into_element(self, options: &EditorOptions) -> Element<B> {
        match self {
            Self::Text {
                id,
                x,
                y,
                width,
                height,
                font_family,
                font_size,
                layout_constraint_width,
                layout_constraint_height,
                fragments,
            } => {
                let mut defaults = options.text_defaults();
                defaults.font_family = font_family;
                defaults.font_size = font_size;
                let mut text = TextElement::new(id, x, y, defaults);
                text.set_content(fragments);
                text.set_constraints(layout_constraint_width, layout_constraint_height);
                text.set_size(width, height);
                text.into()
            }
            Self::Image {
                id,
                x,
                y,
                width,
                height,
                src,
                draw_mode,
                border_color,
                border_width,
            } => {
                // Loading starts over on import; the host re-decodes `src`.
                let mut image = ImageElement::new(id, x, y, width, height, src);
                image.set_draw_mode(draw_mode);
                image.set_border_color(border_color);
                image.set_border_width(border_width);
                image.into()
            }
        }
    }
}

/// Serialize the document and canvas settings to interchange JSON.
pub fn export<B: Brush + Serialize>(
    options: &EditorOptions,
    document: &Document<B>,
) -> Result<String, DocumentError> {
    let payload = DocumentPayload {
        version: FORMAT_VERSION.to_owned(),
        canvas: CanvasPayload {
            width: options.width,
            height: options.height,
            padding: options.padding,
            mode: options.mode,
            grid: Some(options.grid.clone()),
        },
        elements: document.iter().map(ElementPayload::from_element).collect(),
    };
    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Parse interchange JSON into editor options and a document.
///
/// `current` supplies the settings the payload does not carry (typing
/// defaults, grid when absent). Elements come back in the payload's order.
pub fn import<B: Brush + DeserializeOwned>(
    json: &str,
    current: &EditorOptions,
) -> Result<(EditorOptions, Document<B>), DocumentError> {
    let payload: DocumentPayload<B> = serde_json::from_str(json)?;
    if payload.version != FORMAT_VERSION {
        return Err(DocumentError::UnsupportedVersion(payload.version));
    }

    let mut options = current.clone();
    options.width = payload.canvas.width;
    options.height = payload.canvas.height;
    options.padding = payload.canvas.padding;
    options.mode = payload.canvas.mode;
    if let Some(grid) = payload.canvas.grid {
        options.grid = grid;
    }

    let mut document = Document::new();
    for element in payload.elements {
        document.add(element.into_element(&options));
    }
    Ok((options, document))
}
