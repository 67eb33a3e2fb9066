//! Output topic for temperature estimates

use crate::error::Result;
use std::io::Write;

/// Sink for finished temperature estimates
pub trait EstimatePublisher {
    fn publish(&mut self, estimate: f64) -> Result<()>;
}

/// Writes one `<topic> <estimate>` line per estimate and flushes it.
pub struct LinePublisher<W: Write> {
    topic: String,
    writer: W,
}

impl<W: Write> LinePublisher<W> {
    pub fn new(topic: &str, writer: W) -> Self {
        Self {
            topic: topic.to_string(),
            writer,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EstimatePublisher for LinePublisher<W> {
    fn publish(&mut self, estimate: f64) -> Result<()> {
        writeln!(self.writer, "{} {}", self.topic, estimate)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line_per_estimate() {
        let mut publisher = LinePublisher::new("/power_board/temperature_estimate", Vec::new());
        publisher.publish(46005.0).unwrap();
        publisher.publish(31.25).unwrap();

        let output = String::from_utf8(publisher.into_inner()).unwrap();
        assert_eq!(
            output,
            "/power_board/temperature_estimate 46005\n/power_board/temperature_estimate 31.25\n"
        );
    }
}
