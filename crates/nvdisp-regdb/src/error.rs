//! Error types for register-database operations.

use thiserror::Error;

/// Result type alias for register-database operations.
pub type Result<T> = std::result::Result<T, RegDbError>;

/// Errors that can occur when resolving or validating register
/// descriptors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegDbError {
    /// Instance index beyond the register's replication count.
    #[error("{register}: instance {index} out of range ({count} instances)")]
    InstanceOutOfRange {
        /// Register whose address was requested.
        register: &'static str,
        /// Requested instance index.
        index: u32,
        /// Number of valid instances.
        count: u32,
    },

    /// No register with the given name in the table.
    #[error("unknown register: {name}")]
    UnknownRegister {
        /// Name that was looked up.
        name: String,
    },

    /// No field with the given name in the register.
    #[error("{register}: unknown field: {name}")]
    UnknownField {
        /// Register that was searched.
        register: &'static str,
        /// Field name that was looked up.
        name: String,
    },

    /// A bit range extends beyond the 32-bit register word.
    #[error("invalid bit range {high}:{low} in a 32-bit register word")]
    InvalidBitRange {
        /// Inclusive high bit position.
        high: u8,
        /// Inclusive low bit position.
        low: u8,
    },

    /// A literal does not fit in the field it belongs to.
    #[error("{field}: value {value:#010x} does not fit in bits {high}:{low}")]
    ValueTooWide {
        /// Field (or named value) the literal belongs to.
        field: &'static str,
        /// The offending literal.
        value: u32,
        /// Inclusive high bit of the field.
        high: u8,
        /// Inclusive low bit of the field.
        low: u8,
    },

    /// A register array whose replication parameters cannot address
    /// distinct instances.
    #[error("{register}: invalid replication ({instances} instances, stride {stride:#x})")]
    InvalidReplication {
        /// The offending register.
        register: &'static str,
        /// Declared instance count.
        instances: u32,
        /// Declared instance stride in bytes.
        stride: u32,
    },
}

impl RegDbError {
    /// Create an unknown-register error.
    pub fn unknown_register(name: impl Into<String>) -> Self {
        Self::UnknownRegister { name: name.into() }
    }

    /// Create an unknown-field error.
    pub fn unknown_field(register: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownField {
            register,
            name: name.into(),
        }
    }
}
