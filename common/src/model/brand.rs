use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned identifier of a brand.
pub type BrandId = i64;

/// A brand as returned by the backend.
///
/// Records are never mutated locally: the list shown to the user is always
/// the last successful server response.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct BrandRecord {
    pub id: BrandId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Foreign key to a category owned elsewhere. The backend has been seen to
    /// send it both as a number and as a numeric string.
    #[serde(deserialize_with = "lenient_id")]
    pub category_id: i64,
    /// Opaque reference to the uploaded image, if any.
    #[serde(default, alias = "image", alias = "file", skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}

/// Validated payload of a create or update call.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BrandFields {
    pub name: String,
    pub description: String,
    pub category_id: i64,
}

impl BrandFields {
    /// Text parts of the multipart body, in the order the backend expects them.
    /// The optional file part is appended by the transport.
    pub fn form_parts(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("description", self.description.clone()),
            ("category_id", self.category_id.to_string()),
        ]
    }
}

/// Multipart field name of the optional image.
pub const FILE_PART: &str = "file";

fn lenient_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(i64),
        Text(String),
    }

    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(3))]
    #[case(json!("3"))]
    #[case(json!(" 3 "))]
    fn category_id_accepts_number_or_numeric_text(#[case] raw: serde_json::Value) {
        let record: BrandRecord = serde_json::from_value(json!({
            "id": 1,
            "name": "Nike",
            "description": "Sportswear",
            "category_id": raw,
        }))
        .unwrap();

        assert_eq!(record.category_id, 3);
    }

    #[rstest]
    fn category_id_rejects_non_numeric_text() {
        let result = serde_json::from_value::<BrandRecord>(json!({
            "id": 1,
            "name": "Nike",
            "category_id": "shoes",
        }));

        assert!(result.is_err());
    }

    #[rstest]
    fn image_alias_fills_attachment_and_description_defaults() {
        let record: BrandRecord = serde_json::from_value(json!({
            "id": 9,
            "name": "Puma",
            "category_id": 2,
            "image": "uploads/puma.png",
        }))
        .unwrap();

        assert_eq!(record.description, "");
        assert_eq!(record.attachment.as_deref(), Some("uploads/puma.png"));
    }

    #[rstest]
    fn form_parts_carry_every_field() {
        let fields = BrandFields {
            name: "Nike".to_string(),
            description: "Sportswear".to_string(),
            category_id: 4,
        };

        assert_eq!(
            fields.form_parts(),
            vec![
                ("name", "Nike".to_string()),
                ("description", "Sportswear".to_string()),
                ("category_id", "4".to_string()),
            ]
        );
    }
}
