//! Errors surfaced at the settings boundary

use thiserror::Error;

use crate::consts::MAX_POINT_COUNT;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("point count {0} exceeds the maximum of {max}", max = MAX_POINT_COUNT)]
    TooManyPoints(usize),

    #[error("setting `{0}` is not a finite number")]
    NonFinite(&'static str),

    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}
