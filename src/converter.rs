use thiserror::Error;
use tracing::{debug, trace};

use crate::digits::{digit_char, digit_value, DigitCase, MAX_BASE, MIN_BASE};
use crate::stack::{Stack, StackError};

type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConvertError {
    #[error("base {0} is less than 2")]
    BaseTooSmall(u32),
    #[error("base {0} is greater than 36")]
    BaseTooLarge(u32),
    #[error("'{digit}' is not a digit in base {base}")]
    InvalidDigit { digit: char, base: u32 },
    #[error("no digits to parse")]
    Empty,
    #[error("value does not fit in 64 bits")]
    Overflow,
    #[error(transparent)]
    Stack(#[from] StackError)
}

/// Converts non-negative integers to their digit string in a given base.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    case: DigitCase
}

impl Converter {
    pub fn new(case: DigitCase) -> Self {
        Self { case }
    }

    pub fn convert(&self, number: u64, base: u32) -> Result<String> {
        let mut stack = Stack::new();
        self.convert_with(&mut stack, number, base)
    }

    /// Runs the conversion on `stack`, leaving any entries already on it untouched.
    pub fn convert_with(&self, stack: &mut Stack<u32>, mut number: u64, base: u32) -> Result<String> {
        check_base(base)?;

        let start = stack.len();
        let divisor = u64::from(base);

        // Body runs once even for 0, which yields "0".
        loop {
            let remainder = (number % divisor) as u32;
            stack.push(remainder);
            number /= divisor;
            trace!(remainder, quotient = number, "division step");

            if number == 0 {
                break;
            }
        }

        let mut converted = String::with_capacity(stack.len() - start);
        while stack.len() > start {
            let remainder = stack.pop()?;
            let ch = digit_char(remainder, self.case).ok_or(ConvertError::BaseTooLarge(base))?;
            converted.push(ch);
        }

        debug!(base, %converted, "converted");
        Ok(converted)
    }
}

/// Converts `number` to `base` using lowercase digits.
pub fn convert(number: u64, base: u32) -> Result<String> {
    Converter::default().convert(number, base)
}

/// Reads a digit string written in `base` back into a number. Letter case is ignored.
pub fn parse(digits: &str, base: u32) -> Result<u64> {
    check_base(base)?;

    if digits.is_empty() {
        return Err(ConvertError::Empty);
    }

    let mut number: u64 = 0;
    for digit in digits.chars() {
        let value = digit_value(digit)
            .filter(|&v| v < base)
            .ok_or(ConvertError::InvalidDigit { digit, base })?;

        number = number
            .checked_mul(u64::from(base))
            .and_then(|n| n.checked_add(u64::from(value)))
            .ok_or(ConvertError::Overflow)?;
    }

    Ok(number)
}

fn check_base(base: u32) -> Result<()> {
    if base < MIN_BASE {
        return Err(ConvertError::BaseTooSmall(base));
    }
    if base > MAX_BASE {
        return Err(ConvertError::BaseTooLarge(base));
    }

    Ok(())
}
