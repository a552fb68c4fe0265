use std::fmt::{Display, Formatter, Result as FormatResult};

/// Represents a value bound to a statement placeholder.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// Indicates a textual value bound as a string.
    Text(String),

    /// Indicates a numeric value bound as a 32-bit integer.
    Integer(i32),
}

impl Value {
    /// Gets the value as text, if it is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Gets the value as an integer, if it is numeric.
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Integer(value) => value.fmt(f),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

/// Represents a named column and the value bound to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    name: &'static str,
    value: Value,
}

impl Column {
    /// Initializes a new [`Column`].
    ///
    /// # Arguments
    ///
    /// * `name` - the column name
    /// * `value` - the [value](Value) bound to the column
    pub fn new<V: Into<Value>>(name: &'static str, value: V) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    /// Gets the column name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Gets the bound [value](Value).
    pub fn value(&self) -> &Value {
        &self.value
    }
}
