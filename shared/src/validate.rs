//! Client-side validation gates.
//!
//! These run before any network call; a rejection here never reaches the
//! backend. Messages are the exact strings shown inline next to the form.

/// Maximum accepted avatar size in bytes (5 MiB).
pub const MAX_AVATAR_BYTES: u64 = 5 * 1024 * 1024;

const ALLOWED_AVATAR_TYPES: [&str; 4] = ["image/png", "image/jpg", "image/jpeg", "image/gif"];

/// Registration form checks, in display order: confirmation match first,
/// then minimum length.
pub fn validate_registration(password: &str, confirm_password: &str) -> Result<(), &'static str> {
    if password != confirm_password {
        return Err("Passwords do not match");
    }
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters long");
    }
    Ok(())
}

/// Avatar upload gate: size first, then MIME type.
pub fn validate_avatar(size: u64, content_type: &str) -> Result<(), &'static str> {
    if size > MAX_AVATAR_BYTES {
        return Err("File size must be less than 5MB");
    }
    if !ALLOWED_AVATAR_TYPES.contains(&content_type) {
        return Err("Only PNG, JPG, JPEG, and GIF files are allowed");
    }
    Ok(())
}

#[cfg(test)]
mod tests;
