//! Register descriptor types.
//!
//! A [`RegisterDescriptor`] captures everything the manual publishes about
//! one register or register array: its base offset, replication (instance
//! count and stride), access code, and the bit fields it carries. The
//! descriptors themselves are immutable `'static` data; the only logic
//! here is bit-span arithmetic and the checked form of the manual's
//! `NAME(i)` address macro.

use crate::error::{RegDbError, Result};

/// Inclusive `high:low` bit span within a 32-bit register word.
///
/// Construction through [`BitRange::new`] upholds `low <= high <= 31`;
/// [`BitRange::from_bits`] exists for static tables and leaves the
/// invariant to the caller (re-checked by
/// [`RegisterDescriptor::validate`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitRange {
    high: u8,
    low: u8,
}

impl BitRange {
    /// The full 32-bit word, `31:0`.
    pub const WORD: Self = Self { high: 31, low: 0 };

    /// Checked constructor.
    ///
    /// # Errors
    ///
    /// Returns [`RegDbError::InvalidBitRange`] unless `low <= high <= 31`.
    pub fn new(high: u8, low: u8) -> Result<Self> {
        if high > 31 || low > high {
            return Err(RegDbError::InvalidBitRange { high, low });
        }
        Ok(Self { high, low })
    }

    /// Unchecked const constructor for static tables.
    ///
    /// Callers must uphold `low <= high <= 31`.
    #[must_use]
    pub const fn from_bits(high: u8, low: u8) -> Self {
        Self { high, low }
    }

    /// Inclusive high bit position.
    #[must_use]
    pub const fn high(&self) -> u8 {
        self.high
    }

    /// Inclusive low bit position.
    #[must_use]
    pub const fn low(&self) -> u8 {
        self.low
    }

    /// Width of the span in bits.
    #[must_use]
    pub const fn width(&self) -> u32 {
        (self.high - self.low) as u32 + 1
    }

    /// Mask of the span within the word.
    #[must_use]
    pub const fn mask(&self) -> u32 {
        if self.width() == 32 {
            u32::MAX
        } else {
            ((1u32 << self.width()) - 1) << self.low
        }
    }

    /// Extract the span's value from a register word.
    #[must_use]
    pub const fn extract(&self, word: u32) -> u32 {
        (word & self.mask()) >> self.low
    }

    /// Insert `value` into the span of `word`, leaving other bits intact.
    ///
    /// Bits of `value` beyond the span's width are discarded.
    #[must_use]
    pub const fn insert(&self, word: u32, value: u32) -> u32 {
        (word & !self.mask()) | ((value << self.low) & self.mask())
    }

    /// True if `value` is representable within the span.
    #[must_use]
    pub const fn holds(&self, value: u32) -> bool {
        value <= self.mask() >> self.low
    }
}

/// Read/write capability, from the manual's access annotation codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Software may only read the register.
    ReadOnly,
    /// Software may only write the register.
    WriteOnly,
    /// Software may read and write the register (`RW` codes).
    ReadWrite,
}

impl Access {
    /// True if software reads are legal.
    #[must_use]
    pub const fn readable(&self) -> bool {
        matches!(self, Self::ReadOnly | Self::ReadWrite)
    }

    /// True if software writes are legal.
    #[must_use]
    pub const fn writable(&self) -> bool {
        matches!(self, Self::WriteOnly | Self::ReadWrite)
    }
}

/// Symbolic literal occupying a field ("INIT", "ZERO", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedValue {
    /// Symbolic sub-name from the manual.
    pub name: &'static str,
    /// The literal, right-aligned to the field's low bit.
    pub value: u32,
}

/// One named bit field of a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Field name from the manual.
    pub name: &'static str,
    /// Bit span the field occupies.
    pub range: BitRange,
    /// Power-on reset value, when the manual publishes one (`I` access
    /// codes).
    pub reset: Option<u32>,
    /// Named literals for the field.
    pub values: &'static [NamedValue],
}

impl Field {
    /// Look up a named literal by symbolic sub-name (case-insensitive).
    #[must_use]
    pub fn named_value(&self, name: &str) -> Option<u32> {
        self.values
            .iter()
            .find(|nv| nv.name.eq_ignore_ascii_case(name))
            .map(|nv| nv.value)
    }

    /// Reverse lookup: the symbolic sub-name for a field value, if one is
    /// defined.
    #[must_use]
    pub fn value_name(&self, value: u32) -> Option<&'static str> {
        self.values
            .iter()
            .find(|nv| nv.value == value)
            .map(|nv| nv.name)
    }
}

/// One hardware register or register array.
///
/// Descriptors are immutable, process-wide `'static` constants; nothing
/// here performs device access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterDescriptor {
    /// Register name from the manual.
    pub name: &'static str,
    /// Byte offset of instance 0 from the register-space base.
    pub base: u32,
    /// Byte stride between replicated instances.
    pub stride: u32,
    /// Number of replicated instances (1 for a plain register).
    pub instances: u32,
    /// Access code.
    pub access: Access,
    /// Bit fields carried by the register word.
    pub fields: &'static [Field],
}

impl RegisterDescriptor {
    /// Byte offset of instance `instance`, the checked form of the
    /// manual's `NAME(i)` macro.
    ///
    /// # Errors
    ///
    /// Returns [`RegDbError::InstanceOutOfRange`] when
    /// `instance >= self.instances`.
    pub fn address(&self, instance: u32) -> Result<u32> {
        if instance >= self.instances {
            return Err(RegDbError::InstanceOutOfRange {
                register: self.name,
                index: instance,
                count: self.instances,
            });
        }
        Ok(self.address_unchecked(instance))
    }

    /// Byte offset of instance `instance`, without the bound check.
    ///
    /// Callers must uphold `instance < self.instances`.
    #[must_use]
    pub const fn address_unchecked(&self, instance: u32) -> u32 {
        self.base + instance * self.stride
    }

    /// Look up a field by name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`RegDbError::UnknownField`] if the register carries no
    /// field of that name.
    pub fn field(&self, name: &str) -> Result<&Field> {
        self.fields
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| RegDbError::unknown_field(self.name, name))
    }

    /// Check the descriptor's internal invariants: bit spans within the
    /// word, reset and named values representable in their fields, and
    /// replication parameters that address distinct instances.
    ///
    /// Static tables are built with the unchecked constructors; the test
    /// suite runs `validate` over every table entry.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<()> {
        if self.instances == 0 || (self.instances > 1 && self.stride < 4) {
            return Err(RegDbError::InvalidReplication {
                register: self.name,
                instances: self.instances,
                stride: self.stride,
            });
        }

        for field in self.fields {
            let range = BitRange::new(field.range.high(), field.range.low())?;

            if let Some(reset) = field.reset {
                if !range.holds(reset) {
                    return Err(RegDbError::ValueTooWide {
                        field: field.name,
                        value: reset,
                        high: range.high(),
                        low: range.low(),
                    });
                }
            }

            for nv in field.values {
                if !range.holds(nv.value) {
                    return Err(RegDbError::ValueTooWide {
                        field: nv.name,
                        value: nv.value,
                        high: range.high(),
                        low: range.low(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_range_full_word() {
        let word = BitRange::WORD;
        assert_eq!(word.width(), 32);
        assert_eq!(word.mask(), 0xFFFF_FFFF);
        assert_eq!(word.extract(0xDEAD_BEEF), 0xDEAD_BEEF);
        assert!(word.holds(u32::MAX));
    }

    #[test]
    fn bit_range_partial_span() {
        let span = BitRange::new(11, 4).unwrap();
        assert_eq!(span.width(), 8);
        assert_eq!(span.mask(), 0x0000_0FF0);
        assert_eq!(span.extract(0x0000_0A50), 0xA5);
        assert_eq!(span.insert(0xFFFF_FFFF, 0), 0xFFFF_F00F);
        assert!(span.holds(0xFF));
        assert!(!span.holds(0x100));
    }

    #[test]
    fn bit_range_rejects_out_of_word_spans() {
        assert_eq!(
            BitRange::new(32, 0),
            Err(RegDbError::InvalidBitRange { high: 32, low: 0 })
        );
        assert_eq!(
            BitRange::new(3, 7),
            Err(RegDbError::InvalidBitRange { high: 3, low: 7 })
        );
    }

    #[test]
    fn access_codes() {
        assert!(Access::ReadWrite.readable());
        assert!(Access::ReadWrite.writable());
        assert!(!Access::ReadOnly.writable());
        assert!(!Access::WriteOnly.readable());
    }

    const COUNTER: RegisterDescriptor = RegisterDescriptor {
        name: "COUNTER",
        base: 0x1000,
        stride: 0x100,
        instances: 2,
        access: Access::ReadWrite,
        fields: &[Field {
            name: "VALUE",
            range: BitRange::WORD,
            reset: Some(0),
            values: &[NamedValue {
                name: "ZERO",
                value: 0,
            }],
        }],
    };

    #[test]
    fn checked_addressing_honors_the_bound() {
        assert_eq!(COUNTER.address(0), Ok(0x1000));
        assert_eq!(COUNTER.address(1), Ok(0x1100));
        assert_eq!(
            COUNTER.address(2),
            Err(RegDbError::InstanceOutOfRange {
                register: "COUNTER",
                index: 2,
                count: 2,
            })
        );
    }

    #[test]
    fn field_lookup_is_case_insensitive() {
        let field = COUNTER.field("value").unwrap();
        assert_eq!(field.named_value("zero"), Some(0));
        assert_eq!(field.value_name(0), Some("ZERO"));
        assert!(COUNTER.field("STATUS").is_err());
    }

    #[test]
    fn validate_rejects_overwide_reset() {
        // The slice must be a named const: field slices are 'static.
        const NARROW_FIELDS: &[Field] = &[Field {
            name: "NARROW",
            range: BitRange::from_bits(3, 0),
            reset: Some(0x10),
            values: &[],
        }];
        let bad = RegisterDescriptor {
            fields: NARROW_FIELDS,
            ..COUNTER
        };
        assert_eq!(
            bad.validate(),
            Err(RegDbError::ValueTooWide {
                field: "NARROW",
                value: 0x10,
                high: 3,
                low: 0,
            })
        );
    }

    #[test]
    fn validate_rejects_degenerate_replication() {
        let bad = RegisterDescriptor {
            instances: 0,
            ..COUNTER
        };
        assert!(matches!(
            bad.validate(),
            Err(RegDbError::InvalidReplication { .. })
        ));

        let overlapping = RegisterDescriptor {
            stride: 2,
            ..COUNTER
        };
        assert!(matches!(
            overlapping.validate(),
            Err(RegDbError::InvalidReplication { .. })
        ));
    }
}
