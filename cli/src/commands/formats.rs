use std::io::{stdout, Write};

use anyhow::Result;
use geodecode_core::format::{FormatFamily, FormatTag};

/// Run the `formats` command
pub fn run_formats() -> Result<()> {
    let mut out = stdout().lock();
    for tag in FormatTag::ALL {
        let description = match tag.family() {
            FormatFamily::Delimited(d) => format!("delimited by {d:?}"),
            FormatFamily::Wkt => "Well-Known Text".to_string(),
            FormatFamily::GeoJson => "GeoJSON geometry or feature".to_string(),
        };
        writeln!(out, "{:<14}{description}", tag.name())?;
    }
    Ok(())
}
