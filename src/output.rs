use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::config::Config;
use crate::record::Record;
use crate::store::RecordStore;

pub const LISTING_HEADER: &str = "--- Student Database ---";
pub const LISTING_FOOTER: &str = "------------------------";

/// Write every record in insertion order, framed by header and footer lines
pub fn write_listing<W: Write>(writer: W, store: &RecordStore) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);

    writeln!(writer, "{}", LISTING_HEADER)?;
    for record in store {
        writeln!(writer, "{}", record)?;
    }
    writeln!(writer, "{}", LISTING_FOOTER)?;

    writer.flush()
}

/// Write the outcome of a lookup; a miss is reported, not treated as an error
pub fn write_lookup<W: Write>(
    writer: &mut W,
    id: i32,
    found: Option<&Record>,
) -> io::Result<()> {
    match found {
        Some(r) => writeln!(
            writer,
            "Found Student -> ID: {}, Name: {}, GPA: {:.2}",
            r.id, r.name, r.gpa
        ),
        None => writeln!(writer, "Student with ID {} not found.", id),
    }
}

/// Open output file or return stdout
pub fn open_output(config: &Config) -> io::Result<Box<dyn Write>> {
    match &config.output_file {
        Some(path) => {
            let file = File::create(path)?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
