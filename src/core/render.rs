use std::io::{self, Write};

use crate::ListOptions;
use crate::models::FileDescription;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const TIMESTAMP_WIDTH: usize = 19;
const SIZE_WIDTH: usize = 8;

/// Write one line per record, in the order given.
///
/// Long format always carries the type suffix, whether or not `filetype` is set.
pub fn write_descriptions<W: Write>(
    writer: &mut W,
    records: &[FileDescription],
    options: &ListOptions,
) -> io::Result<()> {
    for record in records {
        if options.long_format {
            match record.modified_at {
                Some(modified_at) => write!(writer, "{}", modified_at.format(TIMESTAMP_FORMAT))?,
                None => write!(writer, "{:<width$}", "-", width = TIMESTAMP_WIDTH)?,
            }
            write!(writer, " {:>width$} ", record.size_bytes, width = SIZE_WIDTH)?;
            writer.write_all(record.name.as_bytes())?;
            writer.write_all(record.kind.suffix().as_bytes())?;
        } else if options.filetype {
            writer.write_all(record.name.as_bytes())?;
            writer.write_all(record.kind.suffix().as_bytes())?;
        } else {
            writer.write_all(record.name.as_bytes())?;
        }

        writer.write_all(b"\n")?;
    }

    Ok(())
}
