//! CLI command implementations

pub mod apply;
pub mod catalog;
pub mod json_output;
pub mod presets;
pub mod preview;
pub mod render;
pub mod validate;

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
