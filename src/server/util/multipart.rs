//! Collects a `multipart/form-data` body into text fields and file uploads.
//!
//! Handlers declare which field names carry files; every other field is read as text.
//! Typed accessors record a [`FieldError`] for malformed values instead of failing fast,
//! so one response can report every bad field.

use std::{collections::HashMap, path::Path, str::FromStr};

use axum::{body::Bytes, extract::Multipart};

use crate::server::error::{validation::FieldError, AppError};

/// A file part of a multipart body.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied file name, used only for its extension.
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

impl UploadedFile {
    /// Lowercased extension of the client file name, if it is plain alphanumeric.
    pub fn extension(&self) -> Option<String> {
        let name = self.file_name.as_deref()?;
        let ext = Path::new(name).extension()?.to_str()?;

        if ext.is_empty() || ext.len() > 10 || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }

        Some(ext.to_ascii_lowercase())
    }
}

#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, Vec<String>>,
    files: HashMap<String, UploadedFile>,
}

impl MultipartForm {
    /// Reads every part of `multipart`.
    ///
    /// Parts named in `file_fields` are kept as uploads; empty file parts are dropped, as
    /// browsers send one for an untouched file input.
    ///
    /// # Returns
    /// - `Ok(MultipartForm)` - All parts collected
    /// - `Err(AppError::BadRequest)` - Malformed multipart body
    pub async fn from_multipart(
        mut multipart: Multipart,
        file_fields: &[&str],
    ) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(|n| n.trim_end_matches("[]").to_string()) else {
                continue;
            };

            if file_fields.contains(&name.as_str()) {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    form.files.insert(name, UploadedFile { file_name, bytes });
                }
            } else {
                let text = field.text().await?;
                form.fields.entry(name).or_default().push(text);
            }
        }

        Ok(form)
    }

    /// First value of a text field.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// First value of a text field, or `None` if it is missing or blank.
    pub fn non_blank(&self, name: &str) -> Option<&str> {
        self.text(name).filter(|value| !value.trim().is_empty())
    }

    /// Parses a text field, recording a violation when it is present but malformed.
    pub fn parse<T: FromStr>(&self, name: &str, errors: &mut Vec<FieldError>) -> Option<T> {
        let value = self.non_blank(name)?;

        match value.trim().parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                errors.push(FieldError::new(name, format!("{} has an invalid value", name)));
                None
            }
        }
    }

    /// Parses a boolean field given as `true`/`false` (any case) or `1`/`0`.
    pub fn boolean(&self, name: &str, errors: &mut Vec<FieldError>) -> Option<bool> {
        let value = self.non_blank(name)?.trim();

        if value.eq_ignore_ascii_case("true") || value == "1" {
            Some(true)
        } else if value.eq_ignore_ascii_case("false") || value == "0" {
            Some(false)
        } else {
            errors.push(FieldError::new(name, format!("{} must be a boolean", name)));
            None
        }
    }

    /// Collects integer ids from a field given repeatedly, comma-separated, or as a JSON array.
    ///
    /// Returns `None` when the field is absent so callers can tell "not provided" from "empty".
    pub fn ids(&self, name: &str, errors: &mut Vec<FieldError>) -> Option<Vec<i32>> {
        let values = self.fields.get(name)?;
        let mut ids = Vec::new();

        for raw in values
            .iter()
            .flat_map(|value| value.trim().trim_start_matches('[').trim_end_matches(']').split(','))
            .map(str::trim)
            .filter(|value| !value.is_empty())
        {
            match raw.parse::<i32>() {
                Ok(id) => ids.push(id),
                Err(_) => {
                    errors.push(FieldError::new(name, format!("{} must contain integer ids", name)));
                    return None;
                }
            }
        }

        Some(ids)
    }

    /// Removes and returns the upload sent under `name`.
    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }
}

#[cfg(test)]
impl MultipartForm {
    pub fn with_fields(fields: &[(&str, &str)]) -> Self {
        let mut form = Self::default();
        for (name, value) in fields {
            form.fields
                .entry(name.to_string())
                .or_default()
                .push(value.to_string());
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_ids_from_repeated_and_csv_values() {
        let form = MultipartForm::with_fields(&[("genre_ids", "1,2"), ("genre_ids", "3")]);
        let mut errors = Vec::new();

        assert_eq!(form.ids("genre_ids", &mut errors), Some(vec![1, 2, 3]));
        assert!(errors.is_empty());
    }

    #[test]
    fn collects_ids_from_json_array_text() {
        let form = MultipartForm::with_fields(&[("sponsor_ids", "[4, 5]")]);
        let mut errors = Vec::new();

        assert_eq!(form.ids("sponsor_ids", &mut errors), Some(vec![4, 5]));
    }

    #[test]
    fn missing_ids_field_is_none() {
        let form = MultipartForm::default();
        let mut errors = Vec::new();

        assert_eq!(form.ids("category_ids", &mut errors), None);
        assert!(errors.is_empty());
    }

    #[test]
    fn non_numeric_id_is_a_violation() {
        let form = MultipartForm::with_fields(&[("genre_ids", "1,abc")]);
        let mut errors = Vec::new();

        assert_eq!(form.ids("genre_ids", &mut errors), None);
        assert_eq!(errors[0].field, "genre_ids");
    }

    #[test]
    fn parses_booleans_leniently() {
        let form = MultipartForm::with_fields(&[("a", "TRUE"), ("b", "0"), ("c", "maybe")]);
        let mut errors = Vec::new();

        assert_eq!(form.boolean("a", &mut errors), Some(true));
        assert_eq!(form.boolean("b", &mut errors), Some(false));
        assert_eq!(form.boolean("c", &mut errors), None);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn extension_is_sanitized() {
        let file = |name: &str| UploadedFile {
            file_name: Some(name.to_string()),
            bytes: Bytes::new(),
        };

        assert_eq!(file("movie.MKV").extension(), Some("mkv".to_string()));
        assert_eq!(file("noext").extension(), None);
        assert_eq!(file("evil.p/hp").extension(), None);
    }
}
