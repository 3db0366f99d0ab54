//! Image Upload Handler
//!
//! Accepts an image (PNG, JPEG, WebP) plus an optional crop rectangle.
//! With a rectangle, the crop pipeline re-encodes to JPEG; without one,
//! the originally selected file is stored unmodified. Files are named
//! by content hash, so re-uploading identical bytes is a no-op.

use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::Path;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::media::{CropError, CropRect, crop_to_jpeg};
use crate::utils::{AppError, AppResult};

/// Maximum file size (5MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Supported image formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Upload response
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub original_name: String,
    pub size: usize,
    pub format: String,
    pub url: String,
}

/// Calculate SHA256 hash of data
fn calculate_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Validate image file
fn validate_image(data: &[u8], ext: &str) -> Result<(), AppError> {
    if data.len() > MAX_FILE_SIZE {
        return Err(AppError::validation(format!(
            "File too large. Maximum size is {} bytes ({}MB)",
            MAX_FILE_SIZE,
            MAX_FILE_SIZE / 1024 / 1024
        )));
    }

    let ext_lower = ext.to_lowercase();
    if !SUPPORTED_FORMATS.contains(&ext_lower.as_str()) {
        return Err(AppError::validation(format!(
            "Unsupported file format '{}'. Supported: {}",
            ext_lower,
            SUPPORTED_FORMATS.join(", ")
        )));
    }

    // Verify it's actually an image by trying to load it
    if let Err(e) = image::load_from_memory(data) {
        return Err(AppError::validation(format!(
            "Invalid image file ({}): {}",
            ext_lower, e
        )));
    }

    Ok(())
}

/// Collected multipart fields
#[derive(Default)]
struct UploadForm {
    data: Option<Vec<u8>>,
    original_name: String,
    crop_x: Option<u32>,
    crop_y: Option<u32>,
    crop_width: Option<u32>,
    crop_height: Option<u32>,
}

impl UploadForm {
    /// The crop rectangle, if the client confirmed one. All four fields
    /// must arrive together.
    fn crop_rect(&self) -> Result<Option<CropRect>, AppError> {
        match (self.crop_x, self.crop_y, self.crop_width, self.crop_height) {
            (None, None, None, None) => Ok(None),
            (Some(x), Some(y), Some(width), Some(height)) => Ok(Some(CropRect {
                x,
                y,
                width,
                height,
            })),
            _ => Err(AppError::validation(
                "crop requires all of crop_x, crop_y, crop_width, crop_height",
            )),
        }
    }
}

async fn read_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                form.original_name = field.file_name().unwrap_or("upload").to_string();
                form.data = Some(field.bytes().await?.to_vec());
            }
            "crop_x" | "crop_y" | "crop_width" | "crop_height" => {
                let text = field.text().await?;
                let value: u32 = text.parse().map_err(|_| {
                    AppError::validation(format!("{} must be a non-negative integer", name))
                })?;
                match name.as_str() {
                    "crop_x" => form.crop_x = Some(value),
                    "crop_y" => form.crop_y = Some(value),
                    "crop_width" => form.crop_width = Some(value),
                    _ => form.crop_height = Some(value),
                }
            }
            _ => {
                tracing::debug!(field = %name, "Ignoring unknown multipart field");
            }
        }
    }

    Ok(form)
}

/// POST /api/image/upload - 上传图片（可带裁剪矩形）
pub async fn upload(
    State(state): State<ServerState>,
    user: CurrentUser,
    multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut form = read_form(multipart).await?;

    let data = form
        .data
        .take()
        .ok_or_else(|| AppError::validation("missing file field"))?;

    let ext = Path::new(&form.original_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    validate_image(&data, &ext)?;

    // Apply the crop when one was confirmed; otherwise the original
    // bytes are the upload candidate
    let (stored_data, stored_ext) = match form.crop_rect()? {
        Some(rect) => {
            let cropped = crop_to_jpeg(&data, rect).map_err(|e| match e {
                CropError::Decode(msg) => {
                    AppError::validation(format!("image failed to decode: {}", msg))
                }
                CropError::Encode(msg) => AppError::internal(format!("empty output: {}", msg)),
            })?;
            (cropped, "jpg".to_string())
        }
        None => (data, ext),
    };

    // Content-hash filename doubles as deduplication
    let file_hash = calculate_hash(&stored_data);
    let filename = format!("{}.{}", file_hash, stored_ext);
    let file_path = state.images_dir().join(&filename);

    let size = stored_data.len();
    if file_path.exists() {
        tracing::info!(filename = %filename, "Identical image already stored, reusing");
    } else {
        tokio::fs::write(&file_path, &stored_data)
            .await
            .map_err(|e| AppError::internal(format!("Failed to save file: {}", e)))?;

        tracing::info!(
            user_id = %user.id,
            original_name = %form.original_name,
            size,
            filename = %filename,
            "Image uploaded"
        );
    }

    let url = format!("/api/image/{}", filename);
    Ok(Json(UploadResponse {
        filename,
        original_name: form.original_name,
        size,
        format: stored_ext,
        url,
    }))
}
