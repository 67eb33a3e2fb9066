//! volt_filt - power board temperature estimator node
//!
//! Subscribes to the raw voltage topic, smooths it with a Savitzky-Golay
//! filter and publishes the estimated temperature on the output topic.

use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use volt_filt::{VoltageTemperatureEstimator, polynomial};
use volt_filt_node::error::Result;
use volt_filt_node::{LinePublisher, NodeParams, VoltFiltNode, topic};

/// Readings buffered between the subscriber thread and the node
const SUBSCRIBER_QUEUE: usize = 1024;

#[derive(Parser, Debug)]
#[command(name = "volt-filt-node", version, about)]
struct Args {
    /// Parameter file (TOML)
    #[arg(short, long, default_value = "volt_filt.toml")]
    params: PathBuf,

    /// Input topic stream, `-` for stdin
    #[arg(short, long, default_value = "-")]
    input: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    log::info!("Using parameters: {}", args.params.display());
    let params = NodeParams::from_file(&args.params)?;
    let config = params.estimator_config()?;
    let idle_period = params.idle_period()?;

    log::info!(
        "theta = {}, off_y = {}, abcd = {:?} (degree {:?})",
        config.theta,
        config.off_y,
        config.abcd.as_slice(),
        polynomial::degree(&config.abcd)
    );
    log::info!(
        "Savitzky-Golay window {} order {}, buffer {} samples, sensor range [{}, {}]",
        config.window_size,
        config.filter_order,
        config.buffer_len(),
        config.range.min,
        config.range.max
    );

    let estimator = VoltageTemperatureEstimator::new(config)?;

    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);
    ctrlc::set_handler(move || {
        log::info!("Received shutdown signal");
        r.store(false, Ordering::Relaxed);
    })?;

    let source: Box<dyn BufRead + Send> = if args.input == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        Box::new(BufReader::new(File::open(&args.input)?))
    };
    let subscription = topic::subscribe(source, &params.topics.input, SUBSCRIBER_QUEUE)?;
    log::info!("Subscribed to {}", params.topics.input);

    let publisher = LinePublisher::new(&params.topics.output, io::stdout());
    log::info!("Publishing on {}", params.topics.output);

    let mut node = VoltFiltNode::new(&params.node.name, estimator, publisher);
    log::info!("[{}] Node running. Press Ctrl-C to stop.", params.node.name);

    let stats = node.spin(&subscription.receiver, &running, idle_period);

    log::info!(
        "[{}] Stopped: {} received, {} published, {} skipped",
        params.node.name,
        stats.received,
        stats.published,
        stats.skipped
    );
    Ok(())
}
