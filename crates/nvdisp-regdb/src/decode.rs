//! Decode raw register words against descriptors.
//!
//! This is what a driver log line wants: given a 32-bit word read from a
//! register, split it into per-field values and name the symbolic
//! literals it matches.

use std::fmt;

use crate::descriptor::RegisterDescriptor;

/// One field's slice of a decoded word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedField {
    /// Field name.
    pub field: &'static str,
    /// Field value, right-aligned.
    pub value: u32,
    /// Symbolic sub-name the value matches, if any.
    pub symbol: Option<&'static str>,
    /// True if the value equals the field's published reset value.
    pub at_reset: bool,
}

/// A register word split into its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRegister {
    /// Register name.
    pub register: &'static str,
    /// The raw word that was decoded.
    pub word: u32,
    /// Per-field breakdown, in descriptor order.
    pub fields: Vec<DecodedField>,
}

/// Decode a raw register word against its descriptor.
#[must_use]
pub fn decode(reg: &RegisterDescriptor, word: u32) -> DecodedRegister {
    let fields = reg
        .fields
        .iter()
        .map(|field| {
            let value = field.range.extract(word);
            DecodedField {
                field: field.name,
                value,
                symbol: field.value_name(value),
                at_reset: field.reset == Some(value),
            }
        })
        .collect();

    tracing::debug!("decoded {} word {word:#010x}", reg.name);

    DecodedRegister {
        register: reg.name,
        word,
        fields,
    }
}

impl fmt::Display for DecodedRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {:#010x}", self.register, self.word)?;
        for field in &self.fields {
            write!(f, "\n  {:<12} {:#010x}", field.field, field.value)?;
            if let Some(symbol) = field.symbol {
                write!(f, " ({symbol})")?;
            }
            if field.at_reset {
                write!(f, " [reset]")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::PIPE_IN_LOADV_COUNTER;

    #[test]
    fn reset_word_matches_the_named_zero() {
        let decoded = decode(&PIPE_IN_LOADV_COUNTER, 0);
        assert_eq!(decoded.fields.len(), 1);
        assert_eq!(decoded.fields[0].field, "VALUE");
        assert_eq!(decoded.fields[0].value, 0);
        assert_eq!(decoded.fields[0].symbol, Some("ZERO"));
        assert!(decoded.fields[0].at_reset);
    }

    #[test]
    fn live_count_has_no_symbol() {
        let decoded = decode(&PIPE_IN_LOADV_COUNTER, 0x0000_01A4);
        assert_eq!(decoded.fields[0].value, 0x1A4);
        assert_eq!(decoded.fields[0].symbol, None);
        assert!(!decoded.fields[0].at_reset);
    }

    #[test]
    fn display_renders_field_breakdown() {
        let rendered = decode(&PIPE_IN_LOADV_COUNTER, 0).to_string();
        assert!(rendered.contains("PIPE_IN_LOADV_COUNTER = 0x00000000"));
        assert!(rendered.contains("VALUE"));
        assert!(rendered.contains("(ZERO)"));
        assert!(rendered.contains("[reset]"));
    }
}
