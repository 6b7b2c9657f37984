use serde::{Deserialize, Deserializer, Serialize};

/// One fetched joke. Immutable once it leaves the API layer.
///
/// The endpoint returns more fields (`icon_url`, `url`, `categories`, ...);
/// only the two the page uses are kept, everything else is ignored by serde.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub value: String,
}

impl Joke {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// Ids are opaque; endpoints that send a number get it as text.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}
