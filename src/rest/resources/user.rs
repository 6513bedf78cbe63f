//! The user resource.
//!
//! The API exposes the authenticated user at `GET /v1/users/me`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::jsonapi::ApiResponse;
use crate::rest::{Error, Resource, ResourceResponse};
use crate::Client;

/// Attributes of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The full name of the user.
    pub name: String,
    /// The email address of the user.
    pub email: String,
    /// Avatar background color, as a hex string.
    pub color: String,
    /// Avatar image URL.
    pub avatar_url: String,
    /// Whether the user uploaded a custom avatar.
    pub has_custom_avatar: bool,
    /// When the user signed up.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Resource for User {
    const KIND: &'static str = "users";
    const PATH: &'static str = "users";
    type ListParams = ();
}

impl User {
    /// Fetches the user the API token belongs to.
    ///
    /// # Errors
    ///
    /// Same classification as [`Resource::find`].
    pub async fn me(client: &Client) -> Result<ResourceResponse<ApiResponse<Self>>, Error> {
        let response = client.get("users/me", None).await?;
        Self::decode_single(&response)
    }
}
