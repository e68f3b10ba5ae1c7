use super::models::{GymRecord, RawGymRecord};
use serde_json::Value;
use thiserror::Error;

/// Why a single gym entry was left out of the generated insert.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkipReason {
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' must be a string, found {found}")]
    NotAString {
        field: &'static str,
        found: &'static str,
    },

    #[error("field '{field}' is not a valid number: {value}")]
    InvalidCoordinate { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Zero-based position in the input array.
    pub index: usize,
    pub name: String,
    pub reason: SkipReason,
}

impl std::fmt::Display for SkippedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Skipping gym #{} - {}: {}",
            self.index + 1,
            self.name,
            self.reason
        )
    }
}

pub struct GymValidator;

impl GymValidator {
    pub fn validate(raw: &RawGymRecord) -> Result<GymRecord, SkipReason> {
        let name = required_string(raw.name.as_ref(), "name")?;
        let address = required_string(raw.address.as_ref(), "address")?;
        let url = required_string(raw.url.as_ref(), "url")?;
        let latitude = coordinate(raw.latitude.as_ref(), "latitude")?;
        let longitude = coordinate(raw.longitude.as_ref(), "longitude")?;

        Ok(GymRecord {
            name,
            address,
            url,
            latitude,
            longitude,
        })
    }

    /// Validates every record, keeping input order for the accepted ones.
    pub fn validate_all(records: &[RawGymRecord]) -> ValidationReport {
        let mut report = ValidationReport::default();

        for (index, raw) in records.iter().enumerate() {
            match Self::validate(raw) {
                Ok(gym) => report.gyms.push(gym),
                Err(reason) => report.skipped.push(SkippedRecord {
                    index,
                    name: raw.display_name().to_string(),
                    reason,
                }),
            }
        }

        report
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub gyms: Vec<GymRecord>,
    pub skipped: Vec<SkippedRecord>,
}

fn required_string(value: Option<&Value>, field: &'static str) -> Result<String, SkipReason> {
    match value {
        None | Some(Value::Null) => Err(SkipReason::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(SkipReason::NotAString {
            field,
            found: json_type_name(other),
        }),
    }
}

fn coordinate(value: Option<&Value>, field: &'static str) -> Result<f64, SkipReason> {
    let value = match value {
        None | Some(Value::Null) => return Err(SkipReason::MissingField(field)),
        Some(value) => value,
    };

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| SkipReason::InvalidCoordinate {
            field,
            value: value.to_string(),
        })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
