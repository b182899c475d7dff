use std::num::IntErrorKind;

use thiserror::Error;

pub const NUMBER_FIELD: &str = "number";
pub const BASE_FIELD: &str = "base";

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("No input specified with this name: {field}")]
    Missing { field: String },
    #[error("invalid input value with name {field}, is less than zero")]
    Negative { field: String },
    #[error("invalid input value with name {field}, is not a whole number")]
    NotAnInteger { field: String },
    #[error("invalid input value with name {field}, is too large")]
    OutOfRange { field: String }
}

impl InputError {
    /// Name of the field the error concerns, used to pick where the message is shown.
    pub fn field(&self) -> &str {
        match self {
            InputError::Missing { field }
            | InputError::Negative { field }
            | InputError::NotAnInteger { field }
            | InputError::OutOfRange { field } => field,
        }
    }
}

type Result<T> = std::result::Result<T, InputError>;

/// Raw named values as submitted by the user.
#[derive(Debug, Default)]
pub struct Fields {
    values: Vec<(String, String)>
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        self.values.push((name.into(), value.into()))
    }

    fn raw(&self, name: &str) -> Option<&str> {
        self.values.iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Returns the field's value as a non-negative integer.
    pub fn get(&self, name: &str) -> Result<u64> {
        let raw = self.raw(name).ok_or_else(|| InputError::Missing { field: name.to_string() })?;

        let field = name.to_string();
        match raw.parse::<u64>() {
            Ok(value) => Ok(value),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(InputError::OutOfRange { field }),
            Err(_) if raw.strip_prefix('-') == Some("0") => Ok(0),
            Err(_) if is_negative_number(raw) => Err(InputError::Negative { field }),
            Err(_) => Err(InputError::NotAnInteger { field }),
        }
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}

// "-12", "-1.5" and "-1e3" are all negative numbers, "-abc" is not a number at all.
fn is_negative_number(raw: &str) -> bool {
    raw.parse::<f64>().map(|v| v < 0.0).unwrap_or(false)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub number: u64,
    pub base: u32
}

pub fn read_request(fields: &Fields) -> Result<Request> {
    let number = fields.get(NUMBER_FIELD)?;
    let base = fields.get(BASE_FIELD)?;
    let base = u32::try_from(base).map_err(|_| InputError::OutOfRange { field: BASE_FIELD.to_string() })?;

    Ok(Request { number, base })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(number: &str, base: &str) -> Fields {
        [(NUMBER_FIELD, number), (BASE_FIELD, base)].into_iter().collect()
    }

    #[test]
    fn reads_valid_request() {
        let request = read_request(&fields(" 255 ", "16")).unwrap();
        assert_eq!(request, Request { number: 255, base: 16 });
    }

    #[test]
    fn missing_and_blank_fields() {
        let only_number: Fields = [(NUMBER_FIELD, "10")].into_iter().collect();
        let err = read_request(&only_number).unwrap_err();
        assert_eq!(err, InputError::Missing { field: "base".to_string() });
        assert_eq!(err.to_string(), "No input specified with this name: base");

        let err = read_request(&fields("   ", "2")).unwrap_err();
        assert_eq!(err.field(), "number");
    }

    #[test]
    fn negative_values() {
        let err = read_request(&fields("-5", "2")).unwrap_err();
        assert_eq!(err, InputError::Negative { field: "number".to_string() });
        assert_eq!(err.to_string(), "invalid input value with name number, is less than zero");

        let err = read_request(&fields("5", "-2.5")).unwrap_err();
        assert_eq!(err, InputError::Negative { field: "base".to_string() });

        assert_eq!(read_request(&fields("-0", "2")).unwrap().number, 0);
    }

    #[test]
    fn non_integers_and_overflow() {
        assert!(matches!(read_request(&fields("3.5", "2")), Err(InputError::NotAnInteger { .. })));
        assert!(matches!(read_request(&fields("ten", "2")), Err(InputError::NotAnInteger { .. })));
        assert!(matches!(read_request(&fields("-ten", "2")), Err(InputError::NotAnInteger { .. })));
        assert!(matches!(read_request(&fields("99999999999999999999", "2")), Err(InputError::OutOfRange { .. })));

        let err = read_request(&fields("1", "4294967296")).unwrap_err();
        assert_eq!(err, InputError::OutOfRange { field: "base".to_string() });
    }

    #[test]
    fn later_value_wins() {
        let mut f = fields("1", "2");
        f.insert(NUMBER_FIELD, "7");
        assert_eq!(read_request(&f).unwrap(), Request { number: 7, base: 2 });
    }
}
