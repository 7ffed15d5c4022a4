//! Fluent construction of [`Name`] values.

use crate::name::masking::DEFAULT_DELIMITER;
use crate::Name;

/// Builder for a [`Name`].
///
/// ```rust
/// use sugars_name::Name;
///
/// let name = Name::builder()
///     .delimiter('/')
///     .component("usr")
///     .components(["local", "bin"])
///     .build();
/// assert_eq!(name.as_string(), "usr/local/bin");
/// assert_eq!(name.as_data_string(), "usr.local.bin");
/// ```
#[derive(Debug, Clone)]
#[must_use = "builders do nothing unless `build` is called"]
pub struct NameBuilder {
    components: Vec<String>,
    delimiter: char,
}

impl NameBuilder {
    /// Creates an empty builder using the default delimiter.
    pub fn new() -> Self {
        NameBuilder {
            components: Vec::new(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Sets the delimiter of the built name.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Adds one masked component.
    pub fn component(mut self, component: impl Into<String>) -> Self {
        self.components.push(component.into());
        self
    }

    /// Adds several masked components in order.
    pub fn components<I, S>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.components.extend(components.into_iter().map(Into::into));
        self
    }

    /// Builds the name.
    pub fn build(self) -> Name {
        Name::with_delimiter(self.components, self.delimiter)
    }
}

impl Default for NameBuilder {
    fn default() -> Self {
        Self::new()
    }
}
