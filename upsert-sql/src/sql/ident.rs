use std::borrow::Cow;

const DBL_QUOTE: char = '"';
const UNDERSCORE: char = '_';

#[inline]
fn all_allowed(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == UNDERSCORE)
}

fn quote_into(text: &str, buffer: &mut String) {
    buffer.push(DBL_QUOTE);

    for ch in text.chars() {
        if ch == DBL_QUOTE {
            buffer.push(DBL_QUOTE);
        }

        buffer.push(ch);
    }

    buffer.push(DBL_QUOTE);
}

/// Represents a SQL identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ident<'a>(Option<&'a str>, &'a str);

impl<'a> Ident<'a> {
    /// Creates and returns a new unqualified identifier.
    ///
    /// # Arguments
    ///
    /// * `name` - the object name
    pub fn unqualified<S: ?Sized + AsRef<str> + 'a>(name: &'a S) -> Self {
        Self(None, name.as_ref())
    }

    /// Creates and returns a new qualified identifier.
    ///
    /// # Arguments
    ///
    /// * `schema` - the schema name
    /// * `name` - the object name
    pub fn qualified<S: ?Sized + AsRef<str> + 'a>(schema: &'a S, name: &'a S) -> Self {
        Self(Some(schema.as_ref()), name.as_ref())
    }

    /// Gets the associated schema name, if any.
    pub fn schema(&self) -> Option<&str> {
        self.0
    }

    /// Gets the object identifier name.
    pub fn name(&self) -> &str {
        self.1
    }

    /// Returns the full identifier name, including quotes if necessary.
    ///
    /// # Remarks
    ///
    /// Names made up only of ASCII letters, digits and underscores are returned verbatim. Any other name is
    /// enclosed in double quotes with embedded double quotes doubled.
    ///
    /// MySQL reads double quotes as string literals unless the `ANSI_QUOTES` SQL mode is enabled, so
    /// schema, table and column names that require quoting are only usable there under that mode.
    pub fn quote(&self) -> Cow<'a, str> {
        let schema = self.0.filter(|schema| !schema.is_empty());

        match schema {
            None if all_allowed(self.1) => Cow::Borrowed(self.1),
            None => {
                let mut quoted = String::with_capacity(self.1.len() + 2);
                quote_into(self.1, &mut quoted);
                Cow::Owned(quoted)
            }
            Some(schema) => {
                let mut quoted = String::with_capacity(schema.len() + self.1.len() + 5);

                if all_allowed(schema) {
                    quoted.push_str(schema);
                } else {
                    quote_into(schema, &mut quoted);
                }

                quoted.push('.');

                if all_allowed(self.1) {
                    quoted.push_str(self.1);
                } else {
                    quote_into(self.1, &mut quoted);
                }

                Cow::Owned(quoted)
            }
        }
    }
}
