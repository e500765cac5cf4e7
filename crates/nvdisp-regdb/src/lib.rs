//! Register-access description layer for the NVIDIA display engine.
//!
//! [`nvdisp_chip`] is the raw transcription of the `dev_disp` manual;
//! this crate is the view a driver consumes: typed descriptors, checked
//! instance addressing, field arithmetic, and word decoding. No
//! memory-mapped I/O lives here — an MMIO layer takes the
//! `(address, bit range)` pairs this crate produces and performs the
//! volatile accesses itself.
//!
//! # Quick start
//!
//! ```
//! use nvdisp_regdb::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let reg = nvdisp_regdb::table::lookup("PIPE_IN_LOADV_COUNTER")?;
//!
//! // Checked form of the manual's NAME(i) macro.
//! assert_eq!(reg.address(2)?, 0x0061_7118);
//! assert!(reg.address(4).is_err());
//!
//! // Field-by-field breakdown of a raw word.
//! let decoded = decode(reg, 0x0000_0000);
//! assert_eq!(decoded.fields[0].symbol, Some("ZERO"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod decode;
mod descriptor;
mod error;
pub mod table;

pub use decode::{decode, DecodedField, DecodedRegister};
pub use descriptor::{Access, BitRange, Field, NamedValue, RegisterDescriptor};
pub use error::{RegDbError, Result};

/// Commonly used types.
pub mod prelude {
    pub use crate::decode::decode;
    pub use crate::{
        Access, BitRange, DecodedRegister, Field, NamedValue, RegDbError, RegisterDescriptor,
        Result,
    };
}
