//! Request DTOs for the tournament API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for `POST /tournaments`.
///
/// `name` is optional at the serde level so a missing field reaches
/// [`validate`](Self::validate) and gets the API's own error message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTournamentRequest {
    #[serde(default)]
    pub name: Option<String>,
}

impl CreateTournamentRequest {
    /// Returns the validated name, or an error message.
    pub fn validate(&self) -> Result<&str, String> {
        required_name(self.name.as_deref())
    }
}

/// Request body for `POST /tournaments/:id/players`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlayerRequest {
    /// The Pokemon the player registers as
    #[serde(default)]
    pub name: Option<String>,
}

impl CreatePlayerRequest {
    /// Returns the validated name, or an error message.
    pub fn validate(&self) -> Result<&str, String> {
        required_name(self.name.as_deref())
    }
}

fn required_name(name: Option<&str>) -> Result<&str, String> {
    match name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err("Name is required".to_string()),
    }
}
