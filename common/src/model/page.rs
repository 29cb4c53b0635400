use serde::Deserialize;

use crate::model::brand::BrandRecord;

/// One page of the brand list together with the size of the whole result set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BrandPage {
    pub records: Vec<BrandRecord>,
    pub total: u64,
}

/// Wire shape of `GET /brand/search`.
///
/// The backend names the array `categories` even though it holds brands.
/// Any missing level falls back to an empty page.
#[derive(Deserialize, Debug, Default)]
pub struct ListEnvelope {
    #[serde(default)]
    data: Option<ListData>,
}

#[derive(Deserialize, Debug, Default)]
struct ListData {
    #[serde(default)]
    categories: Option<Vec<BrandRecord>>,
    #[serde(default)]
    total: Option<u64>,
}

impl From<ListEnvelope> for BrandPage {
    fn from(envelope: ListEnvelope) -> Self {
        let data = envelope.data.unwrap_or_default();
        BrandPage {
            records: data.categories.unwrap_or_default(),
            total: data.total.unwrap_or(0),
        }
    }
}

/// Create and update answer either with the record itself or wrapped in `data`.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum RecordEnvelope {
    Wrapped { data: BrandRecord },
    Bare(BrandRecord),
}

impl From<RecordEnvelope> for BrandRecord {
    fn from(envelope: RecordEnvelope) -> Self {
        match envelope {
            RecordEnvelope::Wrapped { data } => data,
            RecordEnvelope::Bare(record) => record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn decodes_categories_field_as_brand_records() {
        let envelope: ListEnvelope = serde_json::from_value(json!({
            "data": {
                "categories": [
                    { "id": 1, "name": "Nike", "description": "Sportswear", "category_id": 3 }
                ],
                "total": 1
            }
        }))
        .unwrap();

        let page = BrandPage::from(envelope);
        assert_eq!(page.total, 1);
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.records[0].name, "Nike");
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({ "data": null }))]
    #[case(json!({ "data": {} }))]
    #[case(json!({ "data": { "categories": null, "total": null } }))]
    fn missing_levels_fall_back_to_empty_page(#[case] raw: serde_json::Value) {
        let envelope: ListEnvelope = serde_json::from_value(raw).unwrap();

        assert_eq!(BrandPage::from(envelope), BrandPage::default());
    }

    #[rstest]
    #[case(json!({ "data": { "id": 5, "name": "Puma", "description": "", "category_id": 1 } }))]
    #[case(json!({ "id": 5, "name": "Puma", "description": "", "category_id": 1 }))]
    fn record_envelope_accepts_wrapped_and_bare(#[case] raw: serde_json::Value) {
        let envelope: RecordEnvelope = serde_json::from_value(raw).unwrap();

        let record = BrandRecord::from(envelope);
        assert_eq!(record.id, 5);
        assert_eq!(record.name, "Puma");
    }
}
