//! `dev_disp` register map, manual revision v02.04.
//!
//! Offsets are byte offsets from the device's register-space base. Arrayed
//! registers carry one instance per display pipe at the bank stride
//! described in [`crate::pipe`].
//!
//! The manual annotates each register with an access code; the codes that
//! apply here:
//!
//! ```text
//! RW-4A   register: read/write, 4-byte, arrayed
//! RWIUF   field:    read/write, initialized by reset
//! RWI-V   value:    the reset literal
//! RW--V   value:    a plain writable literal
//! ```

/// Per-pipe load-V counter (`PIPE_IN_LOADV_COUNTER`).
///
/// One instance per display pipe. The counter increments once per load-V
/// event on its pipe; software reads it to track state-load completion and
/// writes [`value::ZERO`] to rearm it. Read/write, 4-byte, arrayed
/// (`RW-4A`).
pub mod pipe_in_loadv_counter {
    use crate::pipe;

    /// Byte offset of pipe 0's instance.
    pub const BASE: u32 = 0x0061_6118;

    /// Byte stride between per-pipe instances.
    pub const STRIDE: u32 = pipe::BANK_STRIDE;

    /// Number of replicated instances, one per pipe (`__SIZE_1` in the
    /// manual).
    pub const INSTANCES: u32 = pipe::PIPE_COUNT;

    /// Byte offset of pipe `pipe`'s instance.
    ///
    /// Callers must uphold `pipe < INSTANCES`.
    #[must_use]
    pub const fn offset(pipe: u32) -> u32 {
        BASE + pipe * STRIDE
    }

    /// `VALUE` field — the counter itself, occupying the full word
    /// (bits 31:0, `RWIUF`).
    pub mod value {
        /// Highest bit of the field.
        pub const HIGH_BIT: u8 = 31;
        /// Lowest bit of the field.
        pub const LOW_BIT: u8 = 0;
        /// Power-on reset value (`RWI-V`).
        pub const INIT: u32 = 0x0000_0000;
        /// Named operational value: write to rearm the counter (`RW--V`).
        pub const ZERO: u32 = 0x0000_0000;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loadv_counter_instance_offsets() {
        // Manual-published addresses for all four pipes.
        assert_eq!(pipe_in_loadv_counter::offset(0), 0x0061_6118);
        assert_eq!(pipe_in_loadv_counter::offset(1), 0x0061_6918);
        assert_eq!(pipe_in_loadv_counter::offset(2), 0x0061_7118);
        assert_eq!(pipe_in_loadv_counter::offset(3), 0x0061_7918);
    }

    #[test]
    fn loadv_counter_replication() {
        assert_eq!(pipe_in_loadv_counter::INSTANCES, 4);
        assert_eq!(pipe_in_loadv_counter::STRIDE, 2048);
    }

    #[test]
    fn loadv_counter_value_field() {
        assert_eq!(pipe_in_loadv_counter::value::HIGH_BIT, 31);
        assert_eq!(pipe_in_loadv_counter::value::LOW_BIT, 0);
        assert_eq!(pipe_in_loadv_counter::value::INIT, 0);
        assert_eq!(pipe_in_loadv_counter::value::ZERO, 0);
    }
}
