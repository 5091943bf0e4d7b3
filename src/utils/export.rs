use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// On-disk layout for exported points and convergence curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    /// Column separator, or `None` for JSON.
    pub fn delimiter(self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json => None,
        }
    }
}

pub(crate) fn create_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>, Error> {
    Ok(BufWriter::new(File::create(path)?))
}

/// Writes a JSON array with one object per line.
pub(crate) fn write_json_lines<W, I>(w: &mut W, rows: I) -> Result<(), Error>
where
    W: Write,
    I: ExactSizeIterator<Item = serde_json::Value>,
{
    let len = rows.len();
    writeln!(w, "[")?;
    for (i, row) in rows.enumerate() {
        let sep = if i + 1 == len { "" } else { "," };
        writeln!(w, "  {row}{sep}")?;
    }
    writeln!(w, "]")?;
    Ok(())
}
