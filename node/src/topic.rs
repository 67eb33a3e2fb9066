//! Input topic: line-oriented `Float64` messages
//!
//! Each line carries one reading, either as a bare value or as
//! `<topic> <value>`. Lines addressed to other topics, blank lines and `#`
//! comments are ignored.

use crate::error::{Error, Result};
use crossbeam_channel::{Receiver, Sender, bounded};
use std::io::BufRead;
use std::thread::{self, JoinHandle};

/// Decode one line of the input stream.
///
/// Returns `None` when the line carries no reading for `topic`.
pub fn parse_line(line: &str, topic: &str) -> Option<Result<f64>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut fields = line.split_whitespace();
    let (first, second) = (fields.next()?, fields.next());
    if fields.next().is_some() {
        return Some(Err(Error::MalformedMessage(line.to_string())));
    }

    let value = match second {
        None => first,
        Some(value) if first == topic => value,
        Some(_) => return None,
    };

    Some(
        value
            .parse::<f64>()
            .map_err(|_| Error::MalformedMessage(line.to_string())),
    )
}

/// Live subscription to the input topic
pub struct Subscription {
    pub receiver: Receiver<f64>,
    pub handle: JoinHandle<()>,
}

/// Spawn the reader thread for `topic` over `source`.
///
/// The channel closes when the source reaches end of input or fails.
pub fn subscribe<R>(source: R, topic: &str, capacity: usize) -> Result<Subscription>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = bounded(capacity);
    let topic = topic.to_string();

    let handle = thread::Builder::new()
        .name("voltage-subscriber".to_string())
        .spawn(move || read_topic(source, &topic, &tx))?;

    Ok(Subscription {
        receiver: rx,
        handle,
    })
}

fn read_topic<R: BufRead>(source: R, topic: &str, tx: &Sender<f64>) {
    for line in source.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("Read error on {}: {}", topic, e);
                break;
            }
        };

        match parse_line(&line, topic) {
            Some(Ok(value)) => {
                if tx.send(value).is_err() {
                    // Node is gone
                    break;
                }
            }
            Some(Err(e)) => log::warn!("Skipping message on {}: {}", topic, e),
            None => {}
        }
    }
    log::info!("Topic {} closed", topic);
}
