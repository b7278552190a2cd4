pub const DELIVERY_BASE: &'static str = "https://imagedelivery.net";

/// Final path segment of `uri`, or the whole string when it has no `/`.
pub fn file_name(uri: &str) -> &str {
    match uri.rfind('/') {
        Some(idx) => &uri[idx + 1..],
        None => uri,
    }
}

/// `image/<ext>` from the last extension of `file_name`, or plain `image`.
pub fn content_type(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("image/{}", ext),
        _ => "image".to_owned(),
    }
}

/// Public URL of `image_id` rendered as `variant_name`.
pub fn image_delivery_url(image_id: &str, variant_name: &str, account_hash: &str) -> String {
    [DELIVERY_BASE, account_hash, image_id, variant_name].join("/")
}
