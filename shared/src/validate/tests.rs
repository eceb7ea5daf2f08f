use super::*;

// =========================================================
// Registration
// =========================================================

#[test]
fn mismatched_passwords_block_submission() {
    assert_eq!(
        validate_registration("secret1", "secret2"),
        Err("Passwords do not match")
    );
}

#[test]
fn short_password_blocks_submission() {
    assert_eq!(
        validate_registration("12345", "12345"),
        Err("Password must be at least 6 characters long")
    );
}

#[test]
fn mismatch_reported_before_length() {
    // Both checks would fail; the mismatch message is the one shown.
    assert_eq!(validate_registration("abc", "abd"), Err("Passwords do not match"));
}

#[test]
fn six_characters_is_enough() {
    assert_eq!(validate_registration("123456", "123456"), Ok(()));
}

// =========================================================
// Avatar upload
// =========================================================

#[test]
fn six_megabyte_file_is_rejected() {
    assert_eq!(
        validate_avatar(6 * 1024 * 1024, "image/png"),
        Err("File size must be less than 5MB")
    );
}

#[test]
fn bmp_is_rejected() {
    assert_eq!(
        validate_avatar(100, "image/bmp"),
        Err("Only PNG, JPG, JPEG, and GIF files are allowed")
    );
}

#[test]
fn two_megabyte_png_passes() {
    assert_eq!(validate_avatar(2 * 1024 * 1024, "image/png"), Ok(()));
}

#[test]
fn size_checked_before_type() {
    // An oversized .bmp reports the size message.
    assert_eq!(
        validate_avatar(MAX_AVATAR_BYTES + 1, "image/bmp"),
        Err("File size must be less than 5MB")
    );
}

#[test]
fn exactly_five_megabytes_passes() {
    assert_eq!(validate_avatar(MAX_AVATAR_BYTES, "image/gif"), Ok(()));
}
