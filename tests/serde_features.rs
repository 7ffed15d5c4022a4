//! Tests for the serde feature

#[cfg(feature = "serde")]
mod serde_tests {
    use pretty_assertions::assert_eq;
    use sugars_name::Name;

    #[test]
    fn test_serialize_keeps_masked_components() {
        let name = Name::with_delimiter([r"Oh\.\.\.", "b"], '/');
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, r#"{"components":["Oh\\.\\.\\.","b"],"delimiter":"/"}"#);
    }

    #[test]
    fn test_object_round_trip() {
        let name = Name::with_delimiter(["a", r"b\\c", ""], '#');
        let json = serde_json::to_string_pretty(&name).unwrap();
        let back: Name = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn test_deserialize_defaults_delimiter() {
        let name: Name = serde_json::from_str(r#"{"components":["a","b"]}"#).unwrap();
        assert_eq!(name.delimiter(), '.');
        assert_eq!(name.as_string(), "a.b");
    }

    #[test]
    fn test_deserialize_bare_sequence() {
        let name: Name = serde_json::from_str(r#"["oss","cs","fau","de"]"#).unwrap();
        assert_eq!(name, Name::new(["oss", "cs", "fau", "de"]));

        let empty: Name = serde_json::from_str("[]").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_bad_input() {
        assert!(serde_json::from_str::<Name>(r#"{"delimiter":"/"}"#).is_err());
        assert!(serde_json::from_str::<Name>(r#"{"components":[],"extra":1}"#).is_err());
        assert!(serde_json::from_str::<Name>(r#"{"components":[],"delimiter":"ab"}"#).is_err());
        assert!(serde_json::from_str::<Name>("null").is_err());
    }
}
