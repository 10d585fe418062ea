use serde_json::Value;

/// Envelope of a Mini App submission.
///
/// Row elements stay untyped JSON here: a single malformed row must degrade
/// row-locally and must not invalidate the whole payload.
#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct SheetPayload {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub rows: Vec<Value>,
}

#[derive(Debug, PartialEq)]
pub enum ParsedPayload {
    Sheet(SheetPayload),
    /// Lossless fallback: the submission exactly as it arrived.
    Raw(String),
}

impl ParsedPayload {
    pub fn parse(data: &str) -> Self {
        match serde_json::from_str::<SheetPayload>(data) {
            Ok(payload) => Self::Sheet(payload),
            Err(err) => {
                tracing::warn!(err = %err, raw = data, "Submission is not a sheet payload, keeping raw text");

                Self::Raw(data.to_owned())
            },
        }
    }

    /// Reported row count: an explicit nonzero `count` wins, otherwise the
    /// number of rows actually present.
    pub fn count(&self) -> u64 {
        match self {
            Self::Sheet(payload) => payload
                .count
                .filter(|&count| count != 0)
                .unwrap_or(payload.rows.len() as u64),
            Self::Raw(_) => 0,
        }
    }

    pub fn rows(&self) -> &[Value] {
        match self {
            Self::Sheet(payload) => &payload.rows,
            Self::Raw(_) => &[],
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("missing required field `{0}`")]
    Missing(&'static str),

    #[error("field `{0}` has an unsupported type")]
    Invalid(&'static str),
}

/// One validated grid row, ready for display.
#[derive(Debug, PartialEq)]
pub struct RowRecord {
    pub id: String,
    pub item: String,
    pub qty: serde_json::Number,
    pub total: f64,
}

impl TryFrom<&Value> for RowRecord {
    type Error = FieldError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let field = |name: &'static str| {
            value
                .get(name)
                .filter(|field| !field.is_null())
                .ok_or(FieldError::Missing(name))
        };

        let id = match field("id")? {
            Value::String(id) => id.clone(),
            Value::Number(id) => id.to_string(),
            _ => return Err(FieldError::Invalid("id")),
        };

        let item = field("item")?
            .as_str()
            .ok_or(FieldError::Invalid("item"))?
            .to_owned();

        let qty = field("qty")?
            .as_number()
            .ok_or(FieldError::Invalid("qty"))?
            .clone();

        let total = field("total")?
            .as_f64()
            .ok_or(FieldError::Invalid("total"))?;

        Ok(Self {
            id,
            item,
            qty,
            total,
        })
    }
}
