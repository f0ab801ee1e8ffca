//! Roman Core - Roman numeral conversion (pure logic, no IO)
//!
//! Contains the symbol table, the converter, and structured errors.
//! Only operates on in-memory strings, no file IO or terminal output.
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod converter;
pub mod error;
pub mod symbol;

// Re-export common types
pub use converter::{roman_to_int, Converter, Scan, Step};
pub use error::{ConvertError, ErrorKind, INVALID_INPUT_MESSAGE};
pub use symbol::{Symbol, SYMBOL_TABLE};
