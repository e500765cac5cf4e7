//! Silicon model of the NVIDIA display engine register space.
//!
//! This crate has **no dependencies** and **no hardware access** — it is a
//! pure transcription of the published `dev_disp` register manual
//! (revision v02.04): byte offsets, per-pipe bank strides, bit fields,
//! and reset values.
//!
//! Nothing here touches a device. Address computation is plain integer
//! arithmetic; the checked descriptor layer and any memory-mapped access
//! live in the crates that consume this one.
//!
//! # Crate organisation
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`pipe`] | Display-pipe bank topology (pipe count, bank stride) |
//! | [`dev_disp`] | `dev_disp` register map — offsets, fields, reset values |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod dev_disp;
pub mod pipe;
