// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Guards that turn untrusted strings into closed sets of values.

/// A fieldless enum with a fixed wire name per variant.
pub trait WireEnum: Copy + PartialEq + 'static {
    /// The exact string accepted on the wire for this variant.
    fn as_str(self) -> &'static str;
}

/// Map an untrusted value onto one of `allowed`, or `default` if it is absent,
/// empty, or not a member. Never fails.
///
/// Matching is exact: `"Price"` is not `"price"`.
pub fn validate_enum_or_default<T: WireEnum>(value: Option<&str>, allowed: &[T], default: T) -> T {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return default;
    };

    allowed
        .iter()
        .copied()
        .find(|candidate| candidate.as_str() == value)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Color {
        Red,
        Green,
        Blue,
    }

    impl WireEnum for Color {
        fn as_str(self) -> &'static str {
            match self {
                Color::Red => "red",
                Color::Green => "green",
                Color::Blue => "blue",
            }
        }
    }

    const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    #[test]
    fn test_member_is_returned() {
        assert_eq!(
            validate_enum_or_default(Some("green"), &ALL, Color::Red),
            Color::Green
        );
    }

    #[test]
    fn test_missing_value_falls_back() {
        assert_eq!(validate_enum_or_default(None, &ALL, Color::Blue), Color::Blue);
        assert_eq!(validate_enum_or_default(Some(""), &ALL, Color::Blue), Color::Blue);
    }

    #[test]
    fn test_unknown_value_falls_back() {
        assert_eq!(
            validate_enum_or_default(Some("purple"), &ALL, Color::Red),
            Color::Red
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(
            validate_enum_or_default(Some("GREEN"), &ALL, Color::Red),
            Color::Red
        );
    }

    #[test]
    fn test_value_outside_restricted_allowed_set_falls_back() {
        // Blue is a valid variant but not allowed here
        assert_eq!(
            validate_enum_or_default(Some("blue"), &[Color::Red, Color::Green], Color::Green),
            Color::Green
        );
    }
}
