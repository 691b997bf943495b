use anyhow::Context;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::layout::engine::layout_poster;
use crate::layout::geometry::Rect;
use crate::layout::image_size::canonical_image_size;
use crate::layout::options::{Canvas, LayoutOptions};
use crate::layout::result::LayoutResult;
use crate::layout::Arrangement;
use crate::models::Document;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LayoutRequest {
    /// Policy name, e.g. `landscape` or `grid_portrait`.
    #[serde(rename = "type", alias = "arrangement")]
    pub arrangement: String,
    /// `[width, height]`.
    pub infographic_size: [f64; 2],
    #[serde(alias = "parser_result")]
    pub document: Document,
    #[serde(default)]
    pub margin: f64,
    #[serde(default)]
    pub vertical_margin: f64,
}

#[derive(Debug, Deserialize)]
pub struct IconSizeRequest {
    pub coordinates: Rect,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct IconSizeResponse {
    /// `WxH` in pixels.
    pub size: String,
    pub aspect_ratio: f64,
}

/// POST /api/v1/layout
pub async fn handle_layout(
    State(state): State<AppState>,
    Json(req): Json<LayoutRequest>,
) -> Result<Json<LayoutResult>, AppError> {
    let request_id = Uuid::new_v4();
    let arrangement: Arrangement = req.arrangement.parse()?;
    validate_layout_request(&req, state.config.max_canvas_side)?;

    let [width, height] = req.infographic_size;
    let canvas = Canvas::new(width, height);
    let opts = LayoutOptions {
        margin: req.margin,
        vertical_margin: req.vertical_margin,
        padding: state.config.layout_padding,
    };
    info!(
        %request_id,
        %arrangement,
        groups = req.document.groups.len(),
        width,
        height,
        "layout requested"
    );

    let document = req.document;
    let result = tokio::task::spawn_blocking(move || {
        layout_poster(&document, canvas, arrangement, &opts)
    })
    .await
    .context("layout task panicked")??;

    info!(%request_id, font_scale = result.font_scale, "layout complete");
    Ok(Json(result))
}

/// POST /api/v1/layout/icon-size
pub async fn handle_icon_size(
    Json(req): Json<IconSizeRequest>,
) -> Result<Json<IconSizeResponse>, AppError> {
    let size = canonical_image_size(&req.coordinates).ok_or_else(|| {
        AppError::Validation("coordinates must describe a non-empty rectangle".to_string())
    })?;
    Ok(Json(IconSizeResponse {
        size: size.to_string(),
        aspect_ratio: size.aspect_ratio,
    }))
}

/// Request-level checks the engine itself does not make.
pub fn validate_layout_request(req: &LayoutRequest, max_side: f64) -> Result<(), AppError> {
    let [width, height] = req.infographic_size;
    for (name, side) in [("width", width), ("height", height)] {
        if !side.is_finite() || side <= 0.0 {
            return Err(AppError::Validation(format!(
                "canvas {name} must be positive, got {side}"
            )));
        }
        if side > max_side {
            return Err(AppError::Validation(format!(
                "canvas {name} {side} exceeds the maximum of {max_side}"
            )));
        }
    }

    for (name, value) in [("margin", req.margin), ("vertical_margin", req.vertical_margin)] {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::Validation(format!(
                "{name} must be a non-negative number, got {value}"
            )));
        }
    }

    for (g, group) in req.document.groups.iter().enumerate() {
        for (k, item) in group.items.iter().enumerate() {
            if item.highlight.trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "group {} item {} has an empty highlight",
                    g + 1,
                    k + 1
                )));
            }
        }
    }
    Ok(())
}
