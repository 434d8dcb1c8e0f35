use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// A submission as found in the inbox, before any check.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSubmission {
    pub nom: Option<String>,
    pub adresse: Option<String>,
    pub secteur: Option<String>,
    pub site: Option<String>,
    pub logo: Option<String>,
}

/// A validated submission, every value trimmed and html-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub address: String,
    pub sector: String,
    pub website: String,
    pub logo: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Address,
    Sector,
}

impl Field {
    pub const REQUIRED: [Field; 3] = [Field::Name, Field::Address, Field::Sector];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "nom",
            Self::Address => "adresse",
            Self::Sector => "secteur",
        }
    }

    pub fn max_chars(&self) -> usize {
        match self {
            Self::Name => 200,
            Self::Address => 300,
            Self::Sector => 200,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(Field),

    #[error("field too long: {field} (max {max} characters)")]
    TooLong { field: Field, max: usize },
}

impl RawSubmission {
    fn required(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.nom.as_deref(),
            Field::Address => self.adresse.as_deref(),
            Field::Sector => self.secteur.as_deref(),
        }
    }

    pub fn validate(self) -> Result<Submission, ValidationError> {
        for field in Field::REQUIRED {
            match self.required(field) {
                Some(value) if !value.trim().is_empty() => (),
                _ => return Err(ValidationError::MissingField(field)),
            }
        }

        // Limits apply to the value as submitted, surrounding whitespace included
        for field in Field::REQUIRED {
            let len = self.required(field).map_or(0, |v| v.chars().count());
            if len > field.max_chars() {
                return Err(ValidationError::TooLong {
                    field,
                    max: field.max_chars(),
                });
            }
        }

        let sanitize = |value: Option<String>| {
            value
                .map(|v| escape_html(v.trim()))
                .unwrap_or_default()
        };

        Ok(Submission {
            name: sanitize(self.nom),
            address: sanitize(self.adresse),
            sector: sanitize(self.secteur),
            website: sanitize(self.site),
            logo: sanitize(self.logo),
        })
    }
}

/// Quotes are escaped too, `'` as `&#x27;` like the rows already stored in the workbook.
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }
    escaped
}
