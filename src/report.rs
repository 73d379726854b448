use crate::types::{FileRecord, ScanResult};
use colored::Colorize;
use std::io::{self, Write};
use std::sync::Arc;

pub fn write_report<W: Write>(out: &mut W, result: &ScanResult, human: bool) -> io::Result<()> {
    writeln!(out)?;
    write_section(out, "Big Dirs:", &result.top_dirs, human)?;
    write_section(out, "Big Files:", &result.top_files, human)
}

fn write_section<W: Write>(
    out: &mut W,
    title: &str,
    records: &[Arc<FileRecord>],
    human: bool,
) -> io::Result<()> {
    writeln!(out, "{}", title.cyan())?;
    writeln!(out, "{}", "-".repeat(title.len()))?;
    for r in records {
        if human {
            writeln!(
                out,
                "size: {} -> {}",
                human_bytes::human_bytes(r.size as f64),
                r.path.display()
            )?;
        } else {
            writeln!(out, "{r}")?;
        }
    }
    Ok(())
}
