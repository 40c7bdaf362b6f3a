use serde::Deserialize;

use crate::prelude::*;

/// Generic Wargaming.net API response.
#[derive(Deserialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Data {
        data: T,
    },

    /// See: <https://developers.wargaming.net/documentation/guide/getting-started/#common-errors>
    Error {
        error: ApiError,
    },
}

/// Wargaming.net API error.
#[derive(Deserialize, Debug, PartialEq)]
pub struct ApiError {
    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub code: Option<u16>,

    #[serde(default)]
    pub field: Option<String>,
}

impl<T> From<ApiResponse<T>> for Result<T> {
    fn from(response: ApiResponse<T>) -> Result<T> {
        match response {
            ApiResponse::Data { data } => Ok(data),
            ApiResponse::Error { error } => Err(anyhow!(
                r#"[{}] "{}" in "{}""#,
                error.code.unwrap_or_default(),
                error.message,
                error.field.unwrap_or_default(),
            )),
        }
    }
}
