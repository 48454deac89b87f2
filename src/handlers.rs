use std::sync::Arc;

use actix_multipart::{Field, Multipart};
use actix_web::{web, HttpResponse};
use futures_util::StreamExt;
use uuid::Uuid;

use crate::classifier::ImageClassifier;
use crate::config::Config;
use crate::error::ApiError;
use crate::models::{ClassificationResponse, UploadedImage};

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Serves the upload page embedded in the binary.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

/// `POST /api/classify` — buffers the `image` multipart field, waits the
/// configured artificial delay and answers with a fresh random verdict.
pub async fn classify(
    mut payload: Multipart,
    config: web::Data<Config>,
    classifier: web::Data<Arc<dyn ImageClassifier>>,
) -> Result<HttpResponse, ApiError> {
    let request_id = Uuid::new_v4();
    let mut upload: Option<UploadedImage> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(ApiError::processing)?;

        let (name, filename) = {
            let disposition = field.content_disposition();
            (
                disposition.get_name().map(str::to_owned),
                disposition.get_filename().map(str::to_owned),
            )
        };

        if name.as_deref() != Some("image") || upload.is_some() {
            drain(&mut field).await?;
            continue;
        }

        let media_type = field.content_type().to_string();
        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            data.extend_from_slice(&chunk.map_err(ApiError::processing)?);
        }

        upload = Some(UploadedImage {
            filename: filename.unwrap_or_else(|| "upload".to_string()),
            media_type,
            data,
        });
    }

    let upload = upload.ok_or(ApiError::MissingImage)?;
    tracing::info!(
        "[{}] received {} ({}, {} bytes)",
        request_id,
        upload.filename,
        upload.media_type,
        upload.data.len()
    );

    actix_rt::time::sleep(config.classify_delay).await;

    let verdict = classifier
        .classify(&upload)
        .map_err(ApiError::processing)?;
    tracing::info!(
        "[{}] {} -> is_hotdog={} confidence={:.3}",
        request_id,
        upload.filename,
        verdict.is_hotdog,
        verdict.confidence
    );

    Ok(HttpResponse::Ok().json(ClassificationResponse {
        is_hotdog: verdict.is_hotdog,
        confidence: verdict.confidence,
        filename: upload.filename,
    }))
}

// Unrelated fields still have to be consumed before the stream yields the
// next one.
async fn drain(field: &mut Field) -> Result<(), ApiError> {
    while let Some(chunk) = field.next().await {
        chunk.map_err(ApiError::processing)?;
    }
    Ok(())
}
