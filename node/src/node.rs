//! The volt_filt node: callback plus idle loop

use crate::publisher::EstimatePublisher;
use crossbeam_channel::{Receiver, RecvTimeoutError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use volt_filt::VoltageTemperatureEstimator;

/// Counters reported at shutdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeStats {
    pub received: u64,
    pub published: u64,
    pub skipped: u64,
}

pub struct VoltFiltNode<P: EstimatePublisher> {
    name: String,
    estimator: VoltageTemperatureEstimator,
    publisher: P,
    /// Time reference taken when the first sample seeded the buffer
    first_sample_at: Option<Instant>,
    stats: NodeStats,
}

impl<P: EstimatePublisher> VoltFiltNode<P> {
    pub fn new(name: &str, estimator: VoltageTemperatureEstimator, publisher: P) -> Self {
        Self {
            name: name.to_string(),
            estimator,
            publisher,
            first_sample_at: None,
            stats: NodeStats::default(),
        }
    }

    pub fn estimator(&self) -> &VoltageTemperatureEstimator {
        &self.estimator
    }

    pub fn stats(&self) -> NodeStats {
        self.stats
    }

    pub fn first_sample_at(&self) -> Option<Instant> {
        self.first_sample_at
    }

    pub fn into_publisher(self) -> P {
        self.publisher
    }

    /// Handle one inbound reading to completion.
    ///
    /// Numeric failures skip the sample and keep the node running.
    pub fn callback(&mut self, raw_voltage: f64) {
        self.stats.received += 1;

        match self.estimator.on_sample(raw_voltage) {
            Ok(None) => {
                self.first_sample_at = Some(Instant::now());
                log::info!(
                    "[{}] Buffer initialized: {} samples at {:.1}",
                    self.name,
                    self.estimator.buffer().len(),
                    self.estimator.buffer().front().unwrap_or(raw_voltage)
                );
            }
            Ok(Some(estimate)) => {
                log::debug!(
                    "[{}] raw {:.1} -> estimate {:.4}",
                    self.name,
                    raw_voltage,
                    estimate
                );
                match self.publisher.publish(estimate) {
                    Ok(()) => self.stats.published += 1,
                    Err(e) => log::error!("[{}] Failed to publish estimate: {}", self.name, e),
                }
            }
            Err(e) => {
                self.stats.skipped += 1;
                log::warn!("[{}] Skipping sample {}: {}", self.name, raw_voltage, e);
            }
        }
    }

    /// Dispatch readings until shutdown is signalled or the input closes.
    ///
    /// Between readings the loop wakes every `idle_period` only to check
    /// `running`.
    pub fn spin(
        &mut self,
        samples: &Receiver<f64>,
        running: &AtomicBool,
        idle_period: Duration,
    ) -> NodeStats {
        while running.load(Ordering::Relaxed) {
            match samples.recv_timeout(idle_period) {
                Ok(raw_voltage) => self.callback(raw_voltage),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    log::info!("[{}] Input topic closed", self.name);
                    break;
                }
            }
        }

        if let Some(start) = self.first_sample_at {
            log::info!(
                "[{}] Processed samples for {:.1}s",
                self.name,
                start.elapsed().as_secs_f64()
            );
        }
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crossbeam_channel::unbounded;
    use volt_filt::Config;

    #[derive(Default)]
    struct Recorder {
        estimates: Vec<f64>,
        fail: bool,
    }

    impl EstimatePublisher for Recorder {
        fn publish(&mut self, estimate: f64) -> Result<()> {
            if self.fail {
                return Err(Error::MalformedMessage("sink closed".to_string()));
            }
            self.estimates.push(estimate);
            Ok(())
        }
    }

    fn node(recorder: Recorder) -> VoltFiltNode<Recorder> {
        let config = Config::new(0.0, 5.0, &[0.0, 0.0, 1.0, 0.0]).unwrap();
        let estimator = VoltageTemperatureEstimator::new(config).unwrap();
        VoltFiltNode::new("volt_filt_test", estimator, recorder)
    }

    #[test]
    fn test_first_callback_records_time_reference() {
        let mut node = node(Recorder::default());
        assert!(node.first_sample_at().is_none());

        node.callback(46000.0);

        assert!(node.first_sample_at().is_some());
        assert!(node.estimator().is_initialized());
        assert_eq!(node.stats().published, 0);
    }

    #[test]
    fn test_nan_is_skipped() {
        let mut node = node(Recorder::default());
        node.callback(46000.0);
        node.callback(f64::NAN);
        node.callback(46000.0);

        let stats = node.stats();
        assert_eq!(stats.received, 3);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.published, 1);
    }

    #[test]
    fn test_publish_failure_is_not_counted() {
        let mut node = node(Recorder {
            fail: true,
            ..Recorder::default()
        });
        node.callback(46000.0);
        node.callback(46000.0);

        assert_eq!(node.stats().published, 0);
        assert_eq!(node.stats().skipped, 0);
    }

    #[test]
    fn test_spin_exits_when_input_closes() {
        let (tx, rx) = unbounded();
        for _ in 0..10 {
            tx.send(46000.0).unwrap();
        }
        drop(tx);

        let running = AtomicBool::new(true);
        let mut node = node(Recorder::default());
        let stats = node.spin(&rx, &running, Duration::from_millis(10));

        assert_eq!(stats.received, 10);
        assert_eq!(stats.published, 9);
        let recorder = node.into_publisher();
        assert!(recorder.estimates.iter().all(|e| (e - 46005.0).abs() < 1e-6));
    }

    #[test]
    fn test_spin_exits_on_shutdown() {
        let (_tx, rx) = unbounded::<f64>();
        let running = AtomicBool::new(false);
        let mut node = node(Recorder::default());

        let stats = node.spin(&rx, &running, Duration::from_millis(10));
        assert_eq!(stats, NodeStats::default());
    }
}
