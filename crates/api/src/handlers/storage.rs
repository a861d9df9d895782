//! Handlers for preview image upload and retrieval.

use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Response for a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadedImage {
    pub image_id: String,
}

/// POST /api/v1/storage/images
///
/// Accepts a multipart form with a required `file` field.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadedImage>>)> {
    let mut file_data: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        file_data = Some((filename, data.to_vec()));
    }

    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    let image_id = state.images.save(&filename, &data).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadedImage { image_id },
        }),
    ))
}

/// GET /api/v1/storage/images/{id}
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Response> {
    let image = state
        .images
        .load(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Image '{id}' not found")))?;
    Ok((
        [(header::CONTENT_TYPE, image.content_type)],
        Body::from(image.bytes),
    )
        .into_response())
}
