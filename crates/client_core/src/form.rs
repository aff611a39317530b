//! Reading the recommendation form into a request.

use std::collections::HashMap;

use shared::domain::{FormField, RecommendationRequest};

use crate::error::ClientError;

/// Source of raw form values, one per [`FormField`].
///
/// `None` means the input element does not exist on the page.
pub trait FormInputs: Send + Sync {
    fn value(&self, field: FormField) -> Option<String>;
}

/// Form values held in memory, e.g. collected from command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct MapFormInputs {
    values: HashMap<FormField, String>,
}

impl MapFormInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }
}

impl FormInputs for MapFormInputs {
    fn value(&self, field: FormField) -> Option<String> {
        self.values.get(&field).cloned()
    }
}

/// Builds a request from the seven form fields.
///
/// No range checks happen here; values that do not parse become `None`.
pub fn read_request(inputs: &dyn FormInputs) -> Result<RecommendationRequest, ClientError> {
    let int = |field: FormField| -> Result<Option<i64>, ClientError> {
        let raw = inputs
            .value(field)
            .ok_or(ClientError::MissingField(field.element_id()))?;
        Ok(parse_int_prefix(&raw))
    };
    let float = |field: FormField| -> Result<Option<f64>, ClientError> {
        let raw = inputs
            .value(field)
            .ok_or(ClientError::MissingField(field.element_id()))?;
        Ok(parse_float_prefix(&raw))
    };

    Ok(RecommendationRequest {
        nitrogen: int(FormField::Nitrogen)?,
        phosphorus: int(FormField::Phosphorus)?,
        potassium: int(FormField::Potassium)?,
        temperature: float(FormField::Temperature)?,
        humidity: float(FormField::Humidity)?,
        ph: float(FormField::Ph)?,
        rainfall: float(FormField::Rainfall)?,
    })
}

/// Parses the longest leading decimal integer, ignoring leading whitespace.
///
/// `"12abc"` gives 12, `"7.9"` gives 7, `"abc"` gives `None`. Digits that
/// overflow `i64` also give `None`, so the field is sent as `null` rather
/// than as a rounded float.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = split_sign(s);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parses the longest leading decimal number, ignoring leading whitespace.
///
/// Accepts an optional fraction and exponent: `"6.5ph"` gives 6.5,
/// `".5"` gives 0.5, `"1e3mm"` gives 1000.
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
