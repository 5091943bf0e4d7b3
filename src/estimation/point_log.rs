use std::collections::VecDeque;
use std::io::{Error, Write};
use std::path::Path;

use serde_json::json;

use crate::sampling::Point;
use crate::utils::ExportFormat;
use crate::utils::export::{create_writer, write_json_lines};

/// Retention rule for the visited-points log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogPolicy {
    /// Keep every point ever sampled; memory grows with each call.
    #[default]
    Unbounded,
    /// Keep only the most recent `n` points.
    Bounded(usize),
    /// Record nothing.
    Disabled,
}

/// Ordered record of sampled points, kept across estimation calls.
#[derive(Debug, Clone, Default)]
pub struct PointLog {
    policy: LogPolicy,
    points: VecDeque<Point>,
    recorded: u64,
}

impl PointLog {
    /// Storage grows with the recorded points; a bound is not reserved up front.
    pub fn new(policy: LogPolicy) -> Self {
        Self {
            policy,
            points: VecDeque::new(),
            recorded: 0,
        }
    }

    pub fn policy(&self) -> LogPolicy {
        self.policy
    }

    pub fn record(&mut self, point: Point) {
        self.recorded += 1;
        match self.policy {
            LogPolicy::Unbounded => self.points.push_back(point),
            LogPolicy::Bounded(0) | LogPolicy::Disabled => {}
            LogPolicy::Bounded(n) => {
                if self.points.len() == n {
                    self.points.pop_front();
                }
                self.points.push_back(point);
            }
        }
    }

    /// Number of points currently retained.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points ever passed to [`record`](Self::record).
    pub fn recorded(&self) -> u64 {
        self.recorded
    }

    /// Points recorded but no longer retained.
    pub fn dropped(&self) -> u64 {
        self.recorded - self.points.len() as u64
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Point> {
        self.points.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Writes the retained points with one coordinate column per dimension
    /// followed by an `inside` flag, ready for plotting.
    pub fn export<P: AsRef<Path>>(
        &self,
        path: P,
        fmt: ExportFormat,
        classify: impl Fn(&Point) -> bool,
    ) -> Result<(), Error> {
        let mut w = create_writer(path)?;
        match fmt.delimiter() {
            Some(d) => self.write_delimited(&mut w, d, &classify)?,
            None => write_json_lines(
                &mut w,
                self.points
                    .iter()
                    .map(|p| json!({ "coordinates": p.coordinates(), "inside": classify(p) })),
            )?,
        }
        w.flush()
    }

    fn write_delimited<W: Write>(
        &self,
        w: &mut W,
        d: char,
        classify: &impl Fn(&Point) -> bool,
    ) -> Result<(), Error> {
        let dims = self.points.front().map_or(0, Point::dimensions);
        let mut header: Vec<String> = (0..dims).map(|i| format!("x{i}")).collect();
        header.push("inside".into());
        writeln!(w, "{}", header.join(d.to_string().as_str()))?;

        for p in &self.points {
            for x in p.coordinates() {
                write!(w, "{x:.12}{d}")?;
            }
            writeln!(w, "{}", u8::from(classify(p)))?;
        }
        Ok(())
    }
}
