use axum::{
    body::Bytes,
    extract::{Multipart, State},
    Json,
};
use petal_core::{Error, Prediction};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::icons::icon_for;
use crate::AppState;

pub const NO_PREDICTIONS_MESSAGE: &str =
    "No predictions found for this image. Try uploading a clearer flower image.";

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IdentifyResponse {
    Identified {
        label: String,
        icon: String,
        confidence: f32,
        banner: String,
        explanation: String,
    },
    NoPredictions {
        message: String,
    },
    Error {
        message: String,
    },
}

#[derive(Deserialize)]
pub struct AskRequest {
    pub label: String,
    pub question: String,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// One-line result banner, confidence as a percentage with two decimals.
pub fn banner(prediction: &Prediction, icon: &str) -> String {
    format!(
        "Predicted Class: {} {} | Confidence: {}",
        prediction.label,
        icon,
        prediction.confidence_percent()
    )
}

async fn read_upload(multipart: &mut Multipart) -> Result<Option<Bytes>, String> {
    while let Some(field) = multipart.next_field().await.map_err(|e| e.to_string())? {
        if field.name() == Some("image") || field.file_name().is_some() {
            return Ok(Some(field.bytes().await.map_err(|e| e.to_string())?));
        }
    }
    Ok(None)
}

pub async fn identify(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Json<IdentifyResponse> {
    let data = match read_upload(&mut multipart).await {
        Ok(Some(data)) => data,
        Ok(None) => {
            return Json(IdentifyResponse::Error {
                message: "No image file in upload".to_string(),
            })
        }
        Err(message) => return Json(IdentifyResponse::Error { message }),
    };

    // Reject anything that is not a decodable raster image before
    // spending a remote call on it.
    if let Err(e) = image::load_from_memory(&data) {
        return Json(IdentifyResponse::Error {
            message: Error::InvalidImage(e.to_string()).to_string(),
        });
    }

    let predictions = match state.classifier.classify(&data).await {
        Ok(predictions) => predictions,
        Err(e) => {
            tracing::warn!(error = %e, "classification failed");
            return Json(IdentifyResponse::Error {
                message: e.to_string(),
            });
        }
    };

    let Some(top) = predictions.into_iter().next() else {
        return Json(IdentifyResponse::NoPredictions {
            message: NO_PREDICTIONS_MESSAGE.to_string(),
        });
    };

    let icon = icon_for(&top.label);
    let explanation = match state.text_model.explain(&top.label).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "explanation failed");
            format!("Error getting flower info: {}", e.reason())
        }
    };

    Json(IdentifyResponse::Identified {
        banner: banner(&top, icon),
        icon: icon.to_string(),
        confidence: top.confidence,
        label: top.label,
        explanation,
    })
}

pub async fn ask(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AskRequest>,
) -> Json<AskResponse> {
    let answer = match state
        .text_model
        .answer(&request.label, &request.question)
        .await
    {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "answer failed");
            format!("Error getting answer: {}", e.reason())
        }
    };
    Json(AskResponse { answer })
}
