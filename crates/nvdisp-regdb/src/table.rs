//! Static descriptor table for the `dev_disp` register map.
//!
//! One entry per register published in the v02.04 manual fragment this
//! database covers. Entries are built from the [`nvdisp_chip`] constants
//! so the raw map and the descriptor view cannot drift apart.

use nvdisp_chip::dev_disp::pipe_in_loadv_counter as loadv;

use crate::descriptor::{Access, BitRange, Field, NamedValue, RegisterDescriptor};
use crate::error::{RegDbError, Result};

/// Per-pipe load-V counter (`PIPE_IN_LOADV_COUNTER`, `RW-4A`).
///
/// Four instances at the display-pipe bank stride; the `VALUE` field spans
/// the full word, resets to zero, and carries the named `ZERO` rearm
/// literal.
pub const PIPE_IN_LOADV_COUNTER: RegisterDescriptor = RegisterDescriptor {
    name: "PIPE_IN_LOADV_COUNTER",
    base: loadv::BASE,
    stride: loadv::STRIDE,
    instances: loadv::INSTANCES,
    access: Access::ReadWrite,
    fields: &[Field {
        name: "VALUE",
        range: BitRange::WORD,
        reset: Some(loadv::value::INIT),
        values: &[NamedValue {
            name: "ZERO",
            value: loadv::value::ZERO,
        }],
    }],
};

/// Every register in the `dev_disp` table, in manual order.
pub static DEV_DISP: &[RegisterDescriptor] = &[PIPE_IN_LOADV_COUNTER];

/// Look up a register by symbolic name (case-insensitive).
///
/// # Errors
///
/// Returns [`RegDbError::UnknownRegister`] if the table carries no
/// register of that name.
pub fn lookup(name: &str) -> Result<&'static RegisterDescriptor> {
    DEV_DISP
        .iter()
        .find(|reg| reg.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            tracing::debug!("lookup miss: {name}");
            RegDbError::unknown_register(name)
        })
}
