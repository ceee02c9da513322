pub use anstream::eprintln;
pub use anstream::println;
pub use color_eyre::eyre::{eyre, OptionExt, Result, WrapErr};

pub fn new_table() -> prettytable::Table {
    let mut table = prettytable::Table::new();

    let format = prettytable::format::FormatBuilder::new()
        .padding(1, 1)
        .build();

    table.set_format(format);

    table
}

/// Pretty JSON for any output type
pub fn to_json<T: serde::Serialize>(output: &T) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}
