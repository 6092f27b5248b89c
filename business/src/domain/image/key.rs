use uuid::Uuid;

/// Storage key for an uploaded image.
///
/// Keys are a 128-bit random identifier plus an extension matching the
/// content type, so collisions are negligible and no coordination with the
/// store is needed. Generation is pure and infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectKey(String);

impl ObjectKey {
    pub fn generate(content_type: &str) -> Self {
        Self(format!("{}.{}", Uuid::new_v4(), extension_for(content_type)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/png" => "png",
        "image/webp" => "webp",
        "image/gif" => "gif",
        // jpg is the default the mobile pickers produce
        _ => "jpg",
    }
}
