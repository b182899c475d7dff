use std::fmt::Display;

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

const LOWER: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Letter case used for digit values 10 and above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigitCase {
    #[default]
    Lower,
    Upper
}

impl Display for DigitCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigitCase::Lower => write!(f, "lower"),
            DigitCase::Upper => write!(f, "upper"),
        }
    }
}

pub fn digit_char(value: u32, case: DigitCase) -> Option<char> {
    let alphabet = match case {
        DigitCase::Lower => LOWER,
        DigitCase::Upper => UPPER,
    };

    alphabet.get(value as usize).map(|&b| b as char)
}

/// Accepts either letter case.
pub fn digit_value(ch: char) -> Option<u32> {
    ch.to_digit(MAX_BASE)
}
