//! Data Transfer Objects - request/response types for the API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request to login.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

/// Login state as reported by the session endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// `logged_out`, `authenticating` or `logged_in`.
    pub state: String,
    pub remembered: bool,
}

/// Post fields as entered in the editor. Missing fields are reported by
/// validation, not rejected by the decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostRequest {
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub comment: String,
    pub creation_date: NaiveDate,
    pub edit_date: Option<NaiveDate>,
    pub picture: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PictureResponse {
    pub id: i64,
    pub author: String,
    pub width: u32,
    pub height: u32,
    pub url: String,
    pub download_url: String,
}

/// One entry of the color palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorResponse {
    pub index: usize,
    pub name: String,
    pub hex: String,
}
