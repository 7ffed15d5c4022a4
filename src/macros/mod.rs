//! Macros for writing [`Name`](crate::Name) literals

/// Creates a [`Name`](crate::Name) from masked component literals.
///
/// Prefix the components with `delimiter;` to choose the rendering
/// delimiter, otherwise [`DEFAULT_DELIMITER`](crate::masking::DEFAULT_DELIMITER)
/// is used.
///
/// # Example
///
/// ```rust
/// use sugars_name::name;
///
/// let host = name!["oss", "cs", "fau", "de"];
/// assert_eq!(host.as_string(), "oss.cs.fau.de");
///
/// let path = name!['/'; "usr", "local"];
/// assert_eq!(path.as_string(), "usr/local");
///
/// let empty = name![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! name {
    [] => {
        $crate::Name::default()
    };
    [$d: expr; $($c: expr),* $(,)?] => {{
        let components: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$(::std::string::String::from($c)),*];
        $crate::Name::with_delimiter(components, $d)
    }};
    [$($c: expr),+ $(,)?] => {
        $crate::Name::new(::std::vec![$(::std::string::String::from($c)),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::Name;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_name_macro_default_delimiter() {
        let name = name!["a", "b"];
        assert_eq!(name, Name::new(["a", "b"]));
    }

    #[test]
    fn test_name_macro_custom_delimiter() {
        let name = name!['/'; "", "", "", ""];
        assert_eq!(name.as_string(), "///");

        let trailing = name![':'; "a", "b",];
        assert_eq!(trailing.delimiter(), ':');
        assert_eq!(trailing.no_components(), 2);
    }

    #[test]
    fn test_name_macro_empty() {
        let name: Name = name![];
        assert_eq!(name, Name::default());
    }
}
