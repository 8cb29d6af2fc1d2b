use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use accounts_sdk::{Account, Tags};
use serde_json::{Map, Value};

use super::error::IngestError;
use crate::domain::fields::AccountFields;

/// Read and normalize every record of a JSONL file, in file order.
///
/// # Errors
/// Fails on the first unreadable, malformed or incomplete line; no records
/// are returned in that case.
pub fn load(path: &Path) -> Result<Vec<Account>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(BufReader::new(file)).map_err(|e| match e {
        IngestError::Io { source, .. } => IngestError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    tracing::info!(path = %path.display(), records = records.len(), "Loaded account records");
    Ok(records)
}

/// Parse newline-delimited JSON objects. Whitespace-only lines are skipped.
///
/// # Errors
/// See [`load`].
pub fn parse_records(reader: impl BufRead) -> Result<Vec<Account>, IngestError> {
    let mut records = Vec::new();
    for (idx, text) in reader.lines().enumerate() {
        let line = idx + 1;
        let text = text.map_err(|source| IngestError::Io {
            path: Default::default(),
            source,
        })?;
        if text.trim().is_empty() {
            continue;
        }
        records.push(parse_line(line, &text)?);
    }
    Ok(records)
}

/// Normalize one JSON object into an [`Account`].
///
/// `credit` is coerced to an integer and `tags` to an ordered list of
/// strings. Every other field is kept as text: strings unchanged, `null` as
/// the empty string, anything else as its JSON text. Keys other than the 13
/// account fields are ignored.
///
/// # Errors
/// Returns an error naming `line` if the text is not a JSON object, a key is
/// missing, `credit` is not integral or `tags` is not a list.
pub fn parse_line(line: usize, text: &str) -> Result<Account, IngestError> {
    let value: Value =
        serde_json::from_str(text).map_err(|source| IngestError::Malformed { line, source })?;
    let Value::Object(mut obj) = value else {
        return Err(IngestError::NotAnObject { line });
    };

    let mut fields = Fields {
        line,
        obj: &mut obj,
    };

    Ok(Account {
        id: fields.text(AccountFields::ID)?,
        balance: fields.text(AccountFields::BALANCE)?,
        credit: fields.credit()?,
        picture: fields.text(AccountFields::PICTURE)?,
        name_first: fields.text(AccountFields::NAME_FIRST)?,
        name_last: fields.text(AccountFields::NAME_LAST)?,
        employer: fields.text(AccountFields::EMPLOYER)?,
        email: fields.text(AccountFields::EMAIL)?,
        phone: fields.phone()?,
        address: fields.text(AccountFields::ADDRESS)?,
        comments: fields.text(AccountFields::COMMENTS)?,
        created: fields.text(AccountFields::CREATED)?,
        tags: fields.tags()?,
    })
}

struct Fields<'a> {
    line: usize,
    obj: &'a mut Map<String, Value>,
}

impl Fields<'_> {
    fn take(&mut self, field: &'static str) -> Result<Value, IngestError> {
        self.obj.remove(field).ok_or(IngestError::MissingField {
            line: self.line,
            field,
        })
    }

    fn text(&mut self, field: &'static str) -> Result<String, IngestError> {
        self.take(field).map(into_text)
    }

    fn credit(&mut self) -> Result<i64, IngestError> {
        let value = self.take(AccountFields::CREDIT)?;
        coerce_integer(&value).ok_or_else(|| IngestError::InvalidCredit {
            line: self.line,
            value: value.to_string(),
        })
    }

    /// Like [`Fields::text`], except integral numbers keep only their digits:
    /// `5550000000.0` is stored as `5550000000`.
    fn phone(&mut self) -> Result<String, IngestError> {
        match self.take(AccountFields::PHONE)? {
            Value::Number(n) => Ok(n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).and_then(truncate))
                .map_or_else(|| n.to_string(), |i| i.to_string())),
            other => Ok(into_text(other)),
        }
    }

    fn tags(&mut self) -> Result<Tags, IngestError> {
        match self.take(AccountFields::TAGS)? {
            Value::Array(items) => Ok(items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect()),
            other => Err(IngestError::InvalidField {
                line: self.line,
                field: AccountFields::TAGS,
                message: format!("must be a list, got {other}"),
            }),
        }
    }
}

fn into_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Integers pass through, finite floats truncate toward zero, booleans are
/// 1 and 0, strings are trimmed and parsed in base 10.
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn truncate(f: f64) -> Option<i64> {
    let t = f.trunc();
    (t.is_finite() && t >= i64::MIN as f64 && t < i64::MAX as f64).then_some(t as i64)
}
