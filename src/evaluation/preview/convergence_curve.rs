use crate::evaluation::Snapshot;
use crate::utils::ExportFormat;
use crate::utils::export::{create_writer, write_json_lines};
use std::io::{Error, Write};
use std::path::Path;

/// Ordered trace of [`Snapshot`]s taken while an estimate converges.
#[derive(Debug, Clone, Default)]
pub struct ConvergenceCurve {
    entries: Vec<Snapshot>,
}

impl ConvergenceCurve {
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn latest(&self) -> Option<Snapshot> {
        self.entries.last().copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.entries.iter()
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: ExportFormat) -> Result<(), Error> {
        let mut w = create_writer(path)?;
        match fmt.delimiter() {
            Some(d) => self.write_delimited(&mut w, d)?,
            None => write_json_lines(
                &mut w,
                self.entries
                    .iter()
                    .map(|s| serde_json::to_value(s).map_err(Error::other))
                    .collect::<Result<Vec<_>, Error>>()?
                    .into_iter(),
            )?,
        }
        w.flush()
    }

    fn write_delimited<W: Write>(&self, w: &mut W, d: char) -> Result<(), Error> {
        writeln!(
            w,
            "iteration{d}points_seen{d}inside{d}estimate{d}deviation{d}seconds"
        )?;
        for s in &self.entries {
            writeln!(
                w,
                "{}{d}{}{d}{}{d}{:.12}{d}{:.12}{d}{:.6}",
                s.iteration, s.points_seen, s.inside, s.estimate, s.deviation, s.seconds
            )?;
        }
        Ok(())
    }
}
