/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Identifier assigned by the validation backend.
///
/// The backend emits numeric ids on some endpoints and string ids on others;
/// both are normalized to a string on the way in.
pub type ReportId = String;

/// Deserialize a [`ReportId`] from either a JSON string or a JSON integer.
///
/// Use with `#[serde(deserialize_with = "crate::types::deserialize_id")]`.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<ReportId, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    use serde::Deserialize;
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
    })
}
