//! Accessor naming conventions.
//!
//! Case changes are ordinal: they never consult a locale, so results are
//! identical on every host.

use crate::{Argument, Error, Result};

const GETTER_PREFIX: &str = "get";
const SETTER_PREFIX: &str = "set";

/// Anything that can name the field an accessor is generated for.
///
/// Implemented for raw names (`str`, `String`) and for structured field
/// descriptions, which resolve to their name.
pub trait NamedField {
    /// The field name.
    fn field_name(&self) -> &str;
}

impl NamedField for str {
    fn field_name(&self) -> &str {
        self
    }
}

impl NamedField for String {
    fn field_name(&self) -> &str {
        self.as_str()
    }
}

impl<T: NamedField + ?Sized> NamedField for &T {
    fn field_name(&self) -> &str {
        (**self).field_name()
    }
}

/// Upper-case the first character, leaving the rest untouched
/// (e.g., "firstName" -> "FirstName", "uRL" -> "URL").
pub fn first_letter_to_upper_case(input: &str) -> Result<String> {
    let mut chars = input.chars();
    match chars.next() {
        None => Err(Error::InvalidArgument(Argument::Input)),
        Some(c) => Ok(c.to_uppercase().chain(chars).collect()),
    }
}

/// Lower-case the first character, leaving the rest untouched
/// (e.g., "FirstName" -> "firstName", "URL" -> "uRL").
pub fn first_letter_to_lower_case(input: &str) -> Result<String> {
    let mut chars = input.chars();
    match chars.next() {
        None => Err(Error::InvalidArgument(Argument::Input)),
        Some(c) => Ok(c.to_lowercase().chain(chars).collect()),
    }
}

/// Setter method name for a field (e.g., "age" -> "setAge").
pub fn setter_name_for<F: NamedField + ?Sized>(field: &F) -> Result<String> {
    accessor_name_for(SETTER_PREFIX, field)
}

/// Getter method name for a field (e.g., "id" -> "getId").
pub fn getter_name_for<F: NamedField + ?Sized>(field: &F) -> Result<String> {
    accessor_name_for(GETTER_PREFIX, field)
}

/// Accessor name built from an arbitrary prefix
/// (e.g., ("is", "enabled") -> "isEnabled").
pub fn accessor_name_for<F: NamedField + ?Sized>(prefix: &str, field: &F) -> Result<String> {
    let capitalized = first_letter_to_upper_case(field.field_name())?;
    Ok(format!("{prefix}{capitalized}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Column {
        name: String,
    }

    impl NamedField for Column {
        fn field_name(&self) -> &str {
            &self.name
        }
    }

    #[test]
    fn test_first_letter_to_upper_case() {
        assert_eq!(first_letter_to_upper_case("name").unwrap(), "Name");
        assert_eq!(first_letter_to_upper_case("n").unwrap(), "N");
        assert_eq!(first_letter_to_upper_case("hElLo").unwrap(), "HElLo");
        assert_eq!(first_letter_to_upper_case("_id").unwrap(), "_id");
    }

    #[test]
    fn test_first_letter_to_lower_case() {
        assert_eq!(first_letter_to_lower_case("Name").unwrap(), "name");
        assert_eq!(first_letter_to_lower_case("URL").unwrap(), "uRL");
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(
            first_letter_to_upper_case(""),
            Err(Error::InvalidArgument(Argument::Input))
        );
        assert_eq!(
            first_letter_to_lower_case(""),
            Err(Error::InvalidArgument(Argument::Input))
        );
        assert!(getter_name_for("").is_err());
    }

    #[test]
    fn test_non_ascii_first_letter() {
        assert_eq!(first_letter_to_upper_case("été").unwrap(), "Été");
        assert_eq!(first_letter_to_lower_case("Ärger").unwrap(), "ärger");
    }

    #[test]
    fn test_suffix_is_preserved() {
        for s in ["name", "Name", "uRL", "x", "aBcDeF", "état"] {
            let lowered = first_letter_to_lower_case(s).unwrap();
            let raised = first_letter_to_upper_case(&lowered).unwrap();

            let expected_first: String = s.chars().next().unwrap().to_uppercase().collect();
            assert!(raised.starts_with(&expected_first));

            let suffix: String = s.chars().skip(1).collect();
            assert!(raised.ends_with(&suffix));
        }
    }

    #[test]
    fn test_accessor_names() {
        assert_eq!(setter_name_for("age").unwrap(), "setAge");
        assert_eq!(getter_name_for("id").unwrap(), "getId");
        assert_eq!(setter_name_for("URL").unwrap(), "setURL");
        assert_eq!(getter_name_for("firstName").unwrap(), "getFirstName");
    }

    #[test]
    fn test_accessor_names_from_structured_field() {
        let column = Column {
            name: "createdAt".into(),
        };
        assert_eq!(getter_name_for(&column).unwrap(), "getCreatedAt");
        assert_eq!(setter_name_for(&column).unwrap(), "setCreatedAt");

        assert_eq!(accessor_name_for("is", "enabled").unwrap(), "isEnabled");

        let owned = String::from("total");
        assert_eq!(getter_name_for(&owned).unwrap(), "getTotal");
    }
}
