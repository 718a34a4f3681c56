//! Write-payload validation for catalog entries.
//!
//! Create and update requests carry the same four mandatory fields. The raw
//! JSON body is decoded field by field so that a missing or mistyped value
//! produces a per-field message instead of a generic deserialization error.

use serde_json::{Map, Value};
use validator::Validate;

use crate::error::{CoreError, FieldErrors};

/// Typed, validated field set for creating or overwriting an entry.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct EntryInput {
    #[validate(length(min = 1, message = "Title cannot be blank!"))]
    pub title: String,
    #[validate(length(min = 1, message = "Director cannot be blank!"))]
    pub director: String,
    #[validate(length(min = 1, message = "Genre cannot be blank!"))]
    pub genre: String,
    pub year: i64,
}

/// Decode a raw request body into an [`EntryInput`].
///
/// All four fields are required. String fields are trimmed of surrounding
/// whitespace, so a whitespace-only value counts as blank. `year` accepts a JSON integer, an integral
/// float, or a string holding an integer. A body that is not a JSON object
/// is treated as if every field were missing.
///
/// # Examples
///
/// ```
/// use catalog_core::entry::decode_entry;
///
/// let input = decode_entry(&serde_json::json!({
///     "title": "Crash Landing on You",
///     "director": "Lee Jeong-hyo",
///     "genre": "Romance",
///     "year": "2019",
/// }))
/// .unwrap();
/// assert_eq!(input.year, 2019);
/// ```
pub fn decode_entry(payload: &Value) -> Result<EntryInput, CoreError> {
    let empty = Map::new();
    let fields = payload.as_object().unwrap_or(&empty);
    let mut errors = FieldErrors::new();

    let title = string_field(fields, "title", "Title", &mut errors);
    let director = string_field(fields, "director", "Director", &mut errors);
    let genre = string_field(fields, "genre", "Genre", &mut errors);
    let year = year_field(fields, &mut errors);

    // Run the length rules over whatever decoded so every offending field
    // is reported in one response. Messages already recorded above win.
    let input = EntryInput {
        title: title.unwrap_or_default(),
        director: director.unwrap_or_default(),
        genre: genre.unwrap_or_default(),
        year: year.unwrap_or_default(),
    };

    if let Err(invalid) = input.validate() {
        for (field, field_errors) in invalid.field_errors() {
            let message = field_errors
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| format!("{field} is invalid"));
            errors.add(field.to_string(), message);
        }
    }

    if !errors.is_empty() {
        return Err(CoreError::Validation(errors));
    }

    Ok(input)
}

fn string_field(
    fields: &Map<String, Value>,
    name: &str,
    label: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match fields.get(name) {
        Some(Value::String(s)) => Some(s.trim().to_string()),
        None | Some(Value::Null) => {
            errors.add(name, format!("{label} cannot be blank!"));
            None
        }
        Some(_) => {
            errors.add(name, format!("{label} must be a string"));
            None
        }
    }
}

fn year_field(fields: &Map<String, Value>, errors: &mut FieldErrors) -> Option<i64> {
    let parsed = match fields.get("year") {
        None | Some(Value::Null) => {
            errors.add("year", "Year cannot be blank!");
            return None;
        }
        Some(Value::Number(n)) => n.as_i64().or_else(|| integral_float(n.as_f64()?)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(_) => None,
    };

    if parsed.is_none() {
        errors.add("year", "Year must be an integer");
    }
    parsed
}

fn integral_float(value: f64) -> Option<i64> {
    // i64::MAX is not exactly representable as f64; stay strictly inside the range.
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}
