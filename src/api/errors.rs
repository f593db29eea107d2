//! Errors reported by the API inside a failed response body.

use serde_json::Value;

/// Where in the request an [`ApiError`] originated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorSource {
    /// JSON pointer into the request body, e.g. `/data/attributes/amount`.
    pub pointer: Option<String>,
    /// Name of the offending attribute.
    pub attribute: Option<String>,
}

impl ErrorSource {
    /// Reads a `source` object. Missing or non-string fields become `None`.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            pointer: string_field(value, "pointer"),
            attribute: string_field(value, "attribute"),
        }
    }

    /// Returns true if neither pointer nor attribute is known.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pointer.is_none() && self.attribute.is_none()
    }
}

/// One error entry from an API error response.
///
/// ```json
/// {"code": "parameter_below_minimum", "detail": "amount cannot be less than 2000.",
///  "source": {"pointer": "/data/attributes/amount", "attribute": "amount"}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Stable machine-readable error code. Empty if the API omitted it.
    pub code: String,
    /// Human-readable message.
    pub detail: Option<String>,
    /// Request location the error refers to.
    pub source: Option<ErrorSource>,
}

impl ApiError {
    /// Builds an error entry from one element of the `errors` array.
    ///
    /// Construction never fails: anything missing becomes an absent value.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            code: string_field(value, "code").unwrap_or_default(),
            detail: string_field(value, "detail"),
            source: value
                .get("source")
                .filter(|source| source.is_object())
                .map(ErrorSource::from_value),
        }
    }

    /// Returns the attribute this error is attributed to, if any.
    #[must_use]
    pub fn attribute(&self) -> Option<&str> {
        self.source
            .as_ref()
            .and_then(|source| source.attribute.as_deref())
    }
}

/// The ordered list of [`ApiError`]s attached to a failed call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorCollection {
    errors: Vec<ApiError>,
}

impl ErrorCollection {
    /// Reads the `errors` array of a decoded error body.
    ///
    /// An absent or non-array `errors` key yields an empty collection.
    #[must_use]
    pub fn from_body(body: &Value) -> Self {
        let errors = body
            .get("errors")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(ApiError::from_value).collect())
            .unwrap_or_default();

        Self { errors }
    }

    /// Returns the errors whose `source.attribute` equals `attribute`,
    /// in their original order.
    ///
    /// An empty `attribute` means "no filter" and returns everything.
    #[must_use]
    pub fn filter_by_attribute(&self, attribute: &str) -> Self {
        if attribute.is_empty() {
            return self.clone();
        }

        Self {
            errors: self
                .errors
                .iter()
                .filter(|error| error.attribute() == Some(attribute))
                .cloned()
                .collect(),
        }
    }

    /// Returns the first error, if any.
    #[must_use]
    pub fn first(&self) -> Option<&ApiError> {
        self.errors.first()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the errors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ApiError> {
        self.errors.iter()
    }

    /// Returns the errors as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ApiError] {
        &self.errors
    }
}

impl From<Vec<ApiError>> for ErrorCollection {
    fn from(errors: Vec<ApiError>) -> Self {
        Self { errors }
    }
}

impl<'a> IntoIterator for &'a ErrorCollection {
    type Item = &'a ApiError;
    type IntoIter = std::slice::Iter<'a, ApiError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}
