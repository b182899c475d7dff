pub mod converter;
pub mod digits;
pub mod input;
pub mod stack;

pub use converter::{convert, parse, ConvertError, Converter};
pub use digits::DigitCase;
