//! Profile-asset operations: avatar upload and delete.
//!
//! The size/type gate runs in `jjx_shared::validate` before any of this is
//! called; these functions only move bytes.

use gloo_net::http::Request;
use jjx_shared::{
    MessageResponse, UploadResponse,
    api::{API_BASE, api_error_message},
};
use web_sys::{File, FormData, RequestCredentials};

/// Submit the file as a multipart body. Returns the server-assigned
/// reference for the stored picture.
pub async fn upload_profile_picture(file: &File) -> Result<String, String> {
    let form = FormData::new().map_err(|_| "Failed to build upload form".to_string())?;
    form.append_with_blob("file", file)
        .map_err(|_| "Failed to build upload form".to_string())?;

    let resp = Request::post(&format!("{API_BASE}/upload-profile-picture"))
        .credentials(RequestCredentials::Include)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(api_error_message(&body, "Failed to upload profile picture"));
    }

    resp.json::<UploadResponse>()
        .await
        .map(|r| r.profile_picture)
        .map_err(|e| e.to_string())
}

pub async fn delete_profile_picture() -> Result<String, String> {
    let resp = Request::delete(&format!("{API_BASE}/delete-profile-picture"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(api_error_message(&body, "Failed to delete profile picture"));
    }

    resp.json::<MessageResponse>()
        .await
        .map(|r| r.message)
        .map_err(|e| e.to_string())
}
