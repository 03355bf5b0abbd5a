//! SkinForge CLI library.
//!
//! Document loading and the command implementations behind the
//! `skinforge` binary.

pub mod commands;
pub mod input;
