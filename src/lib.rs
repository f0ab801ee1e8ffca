//! Roman - Roman numeral to integer conversion
//!
//! # Architecture
//!
//! ```text
//! roman-config/  - Pure configuration data
//! roman-core/    - Symbol table and converter (no IO)
//! roman-api/     - Run configuration, batch conversion, error reports
//! roman-cli/     - `roman` binary (arguments, logging, output)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use roman_workspace::roman_to_int;
//!
//! assert_eq!(roman_to_int("MCMXCIV"), Ok(1994));
//! ```

// 重导出常用类型
pub use roman_api::{
    convert, convert_batch, convert_value, parse_batch, quick_convert, BatchEntry, Conversion,
    ErrorReport, RomanError, RunConfig, DEFAULT_SAMPLES,
};
pub use roman_core::{roman_to_int, ConvertError, Converter, ErrorKind, Scan, Step, Symbol};
