//! The [`Name`] type: an ordered list of masked components joined by a delimiter.

pub mod masking;

use crate::error::{NameError, Result};
use masking::{mask, unmask, DEFAULT_DELIMITER};
use std::fmt;

/// An ordered sequence of string components joined by a delimiter.
///
/// Components are stored in their *masked* form: any literal
/// [`ESCAPE_CHARACTER`](masking::ESCAPE_CHARACTER) or
/// [`DEFAULT_DELIMITER`] inside a component is preceded by one escape
/// character. Masking is the caller's responsibility and is not validated;
/// improperly masked input never corrupts the name but may render
/// ambiguously.
///
/// ### Rendering
/// - [`as_string`](Name::as_string) removes masking and joins with the
///   instance delimiter (or any delimiter via
///   [`as_string_with`](Name::as_string_with)). Not meant to be reparsed.
/// - [`as_data_string`](Name::as_data_string) re-applies masking with the
///   default characters and joins with `.`, whatever the instance delimiter.
///
/// ### Mutability
/// A `Name` owns its components and is edited in place. Every
/// index-checked operation validates before touching the components, so a
/// failed call leaves the name unchanged.
///
/// ### Examples
/// ```rust
/// use sugars_name::Name;
///
/// let mut name = Name::new(["oss", "cs", "fau", "de"]);
/// assert_eq!(name.as_string(), "oss.cs.fau.de");
///
/// name.insert(0, "www")?;
/// assert_eq!(name.as_string_with('/'), "www/oss/cs/fau/de");
/// # Ok::<(), sugars_name::NameError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    components: Vec<String>,
    delimiter: char,
}

impl Name {
    /// Creates a name using the default delimiter.
    #[inline]
    pub fn new<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_delimiter(components, DEFAULT_DELIMITER)
    }

    /// Creates a name rendered with `delimiter` in its human-readable form.
    ///
    /// The delimiter is fixed for the lifetime of the name.
    pub fn with_delimiter<I, S>(components: I, delimiter: char) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Name {
            components: components.into_iter().map(Into::into).collect(),
            delimiter,
        }
    }

    /// Starts a [`NameBuilder`](crate::builders::NameBuilder).
    #[inline]
    pub fn builder() -> crate::builders::NameBuilder {
        crate::builders::NameBuilder::new()
    }

    /// The delimiter chosen at construction.
    #[inline]
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Human-readable form joined with the instance delimiter.
    #[inline]
    pub fn as_string(&self) -> String {
        self.as_string_with(self.delimiter)
    }

    /// Human-readable form joined with an arbitrary delimiter.
    ///
    /// Masking is removed from every component, so the result may contain
    /// `delimiter` inside a component and is not guaranteed to be reparsable.
    pub fn as_string_with(&self, delimiter: char) -> String {
        let mut out = String::new();
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                out.push(delimiter);
            }
            out.push_str(&unmask(component));
        }
        out
    }

    /// Machine-readable form.
    ///
    /// Each component's literal content is masked with the default escape
    /// and delimiter characters and the results are joined with
    /// [`DEFAULT_DELIMITER`]. The instance delimiter plays no part here.
    ///
    /// ```rust
    /// use sugars_name::Name;
    ///
    /// let name = Name::with_delimiter([r"a\.b", "c"], '#');
    /// assert_eq!(name.as_string(), "a.b#c");
    /// assert_eq!(name.as_data_string(), r"a\.b.c");
    /// ```
    pub fn as_data_string(&self) -> String {
        let mut out = String::new();
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                out.push(DEFAULT_DELIMITER);
            }
            out.push_str(&mask(&unmask(component)));
        }
        out
    }

    /// Returns the masked component at `index`.
    pub fn component(&self, index: usize) -> Result<&str> {
        self.components
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| NameError::out_of_range(index, self.components.len()))
    }

    /// Replaces the component at `index`, returning the previous one.
    ///
    /// `component` must already be masked.
    pub fn set_component(&mut self, index: usize, component: impl Into<String>) -> Result<String> {
        let len = self.components.len();
        let slot = self
            .components
            .get_mut(index)
            .ok_or_else(|| NameError::out_of_range(index, len))?;
        let previous = std::mem::replace(slot, component.into());
        log::trace!("set component {} of {}", index, len);
        Ok(previous)
    }

    /// Number of components.
    #[inline]
    pub fn no_components(&self) -> usize {
        self.components.len()
    }

    /// Whether the name has no components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Inserts `component` before `index`. `index == no_components()` appends.
    pub fn insert(&mut self, index: usize, component: impl Into<String>) -> Result<()> {
        let len = self.components.len();
        if index > len {
            return Err(NameError::out_of_range(index, len));
        }
        self.components.insert(index, component.into());
        log::trace!("inserted component at {}, now {} components", index, len + 1);
        Ok(())
    }

    /// Appends `component` at the end.
    pub fn append(&mut self, component: impl Into<String>) {
        self.components.push(component.into());
        log::trace!("appended component, now {} components", self.components.len());
    }

    /// Removes and returns the component at `index`.
    pub fn remove(&mut self, index: usize) -> Result<String> {
        let len = self.components.len();
        if index >= len {
            return Err(NameError::out_of_range(index, len));
        }
        let removed = self.components.remove(index);
        log::trace!("removed component {}, now {} components", index, len - 1);
        Ok(removed)
    }

    /// The masked components in order.
    #[inline]
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Iterates over the masked components.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(String::as_str)
    }
}

impl Default for Name {
    fn default() -> Self {
        Name {
            components: Vec::new(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

// Conversion Traits
impl From<Vec<String>> for Name {
    #[inline]
    fn from(components: Vec<String>) -> Self {
        Name {
            components,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl From<Name> for Vec<String> {
    #[inline]
    fn from(name: Name) -> Self {
        name.components
    }
}

impl<S: Into<String>> FromIterator<S> for Name {
    #[inline]
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Name::new(iter)
    }
}

impl<S: Into<String>> Extend<S> for Name {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for component in iter {
            self.append(component);
        }
    }
}

impl IntoIterator for Name {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a> IntoIterator for &'a Name {
    type Item = &'a str;
    type IntoIter = Box<dyn Iterator<Item = &'a str> + 'a>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

// Serde Support
#[cfg(feature = "serde")]
mod serde_impl {
    use super::{Name, DEFAULT_DELIMITER};
    use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};
    use serde::{Deserialize, Serialize};
    use std::fmt;

    const FIELDS: &[&str] = &["components", "delimiter"];

    impl Serialize for Name {
        fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
            let mut st = ser.serialize_struct("Name", 2)?;
            st.serialize_field("components", &self.components)?;
            st.serialize_field("delimiter", &self.delimiter)?;
            st.end()
        }
    }

    impl<'de> Deserialize<'de> for Name {
        fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
            struct V;
            impl<'de> Visitor<'de> for V {
                type Value = Name;
                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a name object or a sequence of components")
                }

                #[inline]
                fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
                where
                    A: SeqAccess<'de>,
                {
                    let mut components = Vec::new();
                    while let Some(component) = seq.next_element::<String>()? {
                        components.push(component);
                    }
                    Ok(Name::from(components))
                }

                fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
                where
                    M: MapAccess<'de>,
                {
                    let mut components: Option<Vec<String>> = None;
                    let mut delimiter: Option<char> = None;
                    while let Some(key) = map.next_key::<String>()? {
                        match key.as_str() {
                            "components" => {
                                if components.is_some() {
                                    return Err(de::Error::duplicate_field("components"));
                                }
                                components = Some(map.next_value()?);
                            }
                            "delimiter" => {
                                if delimiter.is_some() {
                                    return Err(de::Error::duplicate_field("delimiter"));
                                }
                                delimiter = Some(map.next_value()?);
                            }
                            other => return Err(de::Error::unknown_field(other, FIELDS)),
                        }
                    }
                    let components =
                        components.ok_or_else(|| de::Error::missing_field("components"))?;
                    Ok(Name::with_delimiter(
                        components,
                        delimiter.unwrap_or(DEFAULT_DELIMITER),
                    ))
                }
            }

            de.deserialize_any(V)
        }
    }
}
