//! Form tuples
//!
//! A form is one `['code', 'name']` tuple inside an entry's list value.
//! Tuples are recognized by pattern, not by parsing the surrounding
//! expression, so a line may carry any number of them.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lazy-compiled regex for one `['code', 'name']` tuple. Whitespace is
/// permitted around the comma and before the closing bracket; the quoted
/// texts are taken literally (escapes are not modeled).
static FORM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\['([^']*)'\s*,\s*'([^']*)'\s*\]").unwrap());

/// One form of an entry: its short code and display name.
///
/// Serialized as a two-element array so the JSON document keeps the
/// `["code", "name"]` shape of the source literal.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FormRecord(pub String, pub String);

impl FormRecord {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        FormRecord(code.into(), name.into())
    }

    /// The form's short code (empty for the base form).
    pub fn code(&self) -> &str {
        &self.0
    }

    /// The form's display name.
    pub fn name(&self) -> &str {
        &self.1
    }
}

/// Extract every form tuple present in `text`, in left-to-right order.
pub fn extract_forms(text: &str) -> Vec<FormRecord> {
    FORM_REGEX
        .captures_iter(text)
        .map(|caps| FormRecord::new(&caps[1], &caps[2]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tuples() {
        assert!(extract_forms("nothing to see here").is_empty());
    }

    #[test]
    fn test_single_tuple() {
        assert_eq!(
            extract_forms("['mega', 'Mega Venusaur']"),
            vec![FormRecord::new("mega", "Mega Venusaur")]
        );
    }

    #[test]
    fn test_many_tuples_in_order() {
        let forms = extract_forms("[['a', 'Alpha'], ['b', 'Beta'], ['c', 'Gamma']]");
        assert_eq!(
            forms,
            vec![
                FormRecord::new("a", "Alpha"),
                FormRecord::new("b", "Beta"),
                FormRecord::new("c", "Gamma"),
            ]
        );
    }

    #[test]
    fn test_whitespace_around_comma_and_closing_bracket() {
        assert_eq!(
            extract_forms("['gmax'  ,  'Gigantamax Venusaur'  ]"),
            vec![FormRecord::new("gmax", "Gigantamax Venusaur")]
        );
    }

    #[test]
    fn test_empty_code_and_name() {
        assert_eq!(extract_forms("['', '']"), vec![FormRecord::new("", "")]);
    }

    #[test]
    fn test_double_quoted_tuple_not_matched() {
        assert!(extract_forms(r#"["mega", "Mega Venusaur"]"#).is_empty());
    }
}
