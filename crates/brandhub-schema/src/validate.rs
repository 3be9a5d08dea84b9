//! Write-gate validation

use brandhub_model::Brand;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{ValidationError, ValidationResult};
use crate::rules::{is_hex_color, is_present, is_url_or_empty};

/// Decode and check a raw record
///
/// Absent fields take their schema defaults. Present fields of the wrong
/// type, or values breaking a field rule, fail.
pub fn validate(value: &Value) -> ValidationResult<Brand> {
    let brand: Brand = serde_json::from_value(value.clone())?;
    validate_brand(&brand)?;
    Ok(brand)
}

/// Check the field rules of an already typed record
pub fn validate_brand(brand: &Brand) -> ValidationResult<()> {
    if !is_present(&brand.id) {
        return Err(ValidationError::MissingId);
    }
    if brand.name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    check_url("logoUrl", &brand.logo_url)?;
    check_url("coverImage", &brand.cover_image)?;
    if let Some(url) = &brand.intro_video_url {
        check_url("introVideoUrl", url)?;
    }
    for (variant, url) in brand.logos.iter() {
        check_url(&format!("logos.{variant}"), url)?;
    }

    if let Some((index, color)) = brand
        .colors
        .iter()
        .enumerate()
        .find(|(_, color)| !is_hex_color(&color.hex))
    {
        return Err(ValidationError::InvalidHex {
            index,
            value: color.hex.clone(),
        });
    }

    Ok(())
}

fn check_url(field: &str, value: &str) -> ValidationResult<()> {
    if is_url_or_empty(value) {
        Ok(())
    } else {
        Err(ValidationError::invalid_url(field, value))
    }
}

/// One record that failed [`validate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFailure {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub reason: String,
}

/// Outcome of validating a batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub total: usize,
    pub valid: usize,
    pub failures: Vec<ValidationFailure>,
    /// Records with no main logo URL
    pub missing_logo: usize,
}

impl ValidationSummary {
    /// Whether every record passed
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Validate a batch, collecting failures instead of stopping at the first
#[must_use]
pub fn validate_many(values: &[Value]) -> ValidationSummary {
    let mut summary = ValidationSummary {
        total: values.len(),
        ..ValidationSummary::default()
    };

    for (index, value) in values.iter().enumerate() {
        let logo_missing = value
            .get("logoUrl")
            .and_then(Value::as_str)
            .map_or(true, |url| url.trim().is_empty());
        if logo_missing {
            summary.missing_logo += 1;
        }

        match validate(value) {
            Ok(_) => summary.valid += 1,
            Err(err) => {
                let id = value.get("id").and_then(Value::as_str).map(str::to_string);
                debug!(index, id = ?id, error = %err, "record failed validation");
                summary.failures.push(ValidationFailure {
                    index,
                    id,
                    reason: err.to_string(),
                });
            }
        }
    }

    summary
}
