//! `nvdisp` — command-line inspector for the display-engine register
//! database.
//!
//! ```text
//! USAGE:
//!   nvdisp list                       List all registers in the table
//!   nvdisp info <register>            Fields, reset values, instance addresses
//!   nvdisp addr <register> [-i N]     Byte address of one instance
//!   nvdisp decode <register> <value>  Field-by-field decode of a raw word
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nvdisp", about = "Display-engine register database inspector", version)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// List all registers in the table.
    List,
    /// Print fields, reset values, and instance addresses for one register.
    Info {
        /// Register name (e.g. PIPE_IN_LOADV_COUNTER).
        register: String,
    },
    /// Print the byte address of one register instance.
    Addr {
        /// Register name.
        register: String,
        /// Instance index (display pipe).
        #[arg(short, long, default_value_t = 0)]
        instance: u32,
    },
    /// Decode a raw register word field by field.
    Decode {
        /// Register name.
        register: String,
        /// Raw word, decimal or 0x-prefixed hex.
        value: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Cmd::List => cmd_list()?,
        Cmd::Info { register } => cmd_info(&register)?,
        Cmd::Addr { register, instance } => cmd_addr(&register, instance)?,
        Cmd::Decode { register, value } => cmd_decode(&register, &value)?,
    }

    Ok(())
}

fn cmd_list() -> Result<()> {
    println!("dev_disp registers: {}", nvdisp_regdb::table::DEV_DISP.len());
    println!();

    for reg in nvdisp_regdb::table::DEV_DISP {
        println!(
            "{:<28} base {:#010x}  {} instance(s), stride {:#x}",
            reg.name, reg.base, reg.instances, reg.stride
        );
    }

    Ok(())
}

fn cmd_info(register: &str) -> Result<()> {
    let reg = nvdisp_regdb::table::lookup(register)?;

    println!("Register  : {}", reg.name);
    println!("Base      : {:#010x}", reg.base);
    println!("Instances : {} (stride {:#x})", reg.instances, reg.stride);
    println!("Access    : {:?}", reg.access);

    for i in 0..reg.instances {
        println!("  [{i}] {:#010x}", reg.address(i)?);
    }

    for field in reg.fields {
        println!(
            "Field {}  bits {}:{}",
            field.name,
            field.range.high(),
            field.range.low()
        );
        if let Some(reset) = field.reset {
            println!("  reset  {reset:#010x}");
        }
        for nv in field.values {
            println!("  {:<6} {:#010x}", nv.name, nv.value);
        }
    }

    Ok(())
}

fn cmd_addr(register: &str, instance: u32) -> Result<()> {
    let reg = nvdisp_regdb::table::lookup(register)?;
    let addr = reg.address(instance)?;
    println!("{}({instance}) = {addr:#010x}", reg.name);
    Ok(())
}

fn cmd_decode(register: &str, value: &str) -> Result<()> {
    let reg = nvdisp_regdb::table::lookup(register)?;
    let word = parse_word(value)?;
    println!("{}", nvdisp_regdb::decode(reg, word));
    Ok(())
}

/// Parse a register word, accepting decimal or `0x`-prefixed hex.
fn parse_word(s: &str) -> Result<u32> {
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    parsed.with_context(|| format!("not a 32-bit register word: {s}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_renders_the_table() {
        assert!(cmd_list().is_ok());
    }

    #[test]
    fn parse_word_accepts_both_radices() {
        assert_eq!(parse_word("420").unwrap(), 420);
        assert_eq!(parse_word("0x616118").unwrap(), 0x0061_6118);
        assert!(parse_word("pipe").is_err());
    }
}
