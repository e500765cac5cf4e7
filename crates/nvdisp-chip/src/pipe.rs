//! Display-pipe bank topology.
//!
//! The display engine replicates its per-pipe registers in fixed-stride
//! banks: pipe *i*'s copy of a register lives at `base + i * 0x800`.
//! Every arrayed register in the v02.04 `dev_disp` map follows this
//! layout, so the stride is a property of the engine, not of any one
//! register.

/// Number of display pipes in this engine revision.
pub const PIPE_COUNT: u32 = BankLayout::V02_04.pipes;

/// Byte stride between per-pipe register banks.
pub const BANK_STRIDE: u32 = BankLayout::V02_04.stride;

/// Per-pipe register bank layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankLayout {
    /// Number of pipes (one bank per pipe).
    pub pipes: u32,
    /// Byte stride between successive banks.
    pub stride: u32,
}

impl BankLayout {
    /// Layout published in the v02.04 manual: 4 pipes, 2 KB banks.
    pub const V02_04: Self = Self { pipes: 4, stride: 0x800 };

    /// Byte offset of pipe `pipe`'s bank relative to pipe 0.
    ///
    /// Callers must uphold `pipe < self.pipes`; the descriptor layer
    /// provides the checked form.
    #[must_use]
    pub const fn bank_offset(&self, pipe: u32) -> u32 {
        pipe * self.stride
    }

    /// Total bytes spanned by all banks.
    #[must_use]
    pub const fn span(&self) -> u32 {
        self.pipes * self.stride
    }
}
