//! Response envelope for the story API.
//!
//! Successful story API responses are `{ "success": true, ...payload }`.
//! Use [`Success`] instead of ad-hoc `json!` bodies so the payload stays typed.

use serde::Serialize;

/// `{ "success": true, ... }` with `data`'s fields flattened in.
///
/// ```ignore
/// Ok(Json(Success::new(FilesPayload { files })))
/// ```
#[derive(Debug, Serialize)]
pub struct Success<T: Serialize> {
    success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> Success<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Serialize)]
    struct Files {
        files: Vec<&'static str>,
    }

    #[test]
    fn payload_fields_sit_next_to_success() {
        let value = serde_json::to_value(Success::new(Files {
            files: vec!["a.txt"],
        }))
        .unwrap();
        assert_eq!(value, json!({ "success": true, "files": ["a.txt"] }));
    }
}
