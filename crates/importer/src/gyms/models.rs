use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A gym entry exactly as it appears in the input file.
///
/// Every field is kept as an untyped JSON value so that a single malformed
/// entry is reported and skipped instead of failing the whole document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGymRecord {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub address: Option<Value>,
    #[serde(default)]
    pub url: Option<Value>,
    #[serde(default)]
    pub latitude: Option<Value>,
    #[serde(default)]
    pub longitude: Option<Value>,
}

impl RawGymRecord {
    /// Builds a record from one element of the input array. Elements that are
    /// not objects yield a record with every field absent.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }

    /// The name used to identify this record in diagnostics.
    pub fn display_name(&self) -> &str {
        match &self.name {
            Some(Value::String(name)) => name,
            _ => "unknown name",
        }
    }
}

/// A gym that passed validation and can be rendered as a value row.
#[derive(Debug, Clone, PartialEq)]
pub struct GymRecord {
    pub name: String,
    pub address: String,
    pub url: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl GymRecord {
    pub fn internal_id(&self) -> InternalId<'_> {
        InternalId {
            address: &self.address,
            url: &self.url,
        }
    }
}

/// Payload stored in `gyms_master.gymchain_internal_id`.
#[derive(Debug, Serialize)]
pub struct InternalId<'a> {
    pub address: &'a str,
    pub url: &'a str,
}
