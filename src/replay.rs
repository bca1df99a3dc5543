//! Line-oriented event traces for driving the pad without a live host.
//!
//! A trace is a plain-text script, one step per line; blank lines and `#`
//! comments are skipped:
//!
//! ```text
//! # a short stroke, then wipe the surface
//! down 10 10
//! move 20 15
//! move 30 25
//! up
//! key c
//! resize 480
//! ```

use anyhow::{Context, Result, bail};

use crate::host::{HostEvent, ImageHost, Key};
use crate::pad::StrokePad;

/// One scripted step of a replay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraceStep {
    /// Dispatch a host event as-is.
    Event(HostEvent),
    /// Change the container content width, then dispatch a resize.
    Resize(f64),
}

/// Parses a trace script into steps.
///
/// # Errors
/// Reports the 1-based line number for unknown commands, wrong argument
/// counts, and unparsable numbers or keys.
pub fn parse_trace(input: &str) -> Result<Vec<TraceStep>> {
    let mut steps = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            continue;
        };
        let args: Vec<&str> = tokens.collect();

        let step = match command {
            "down" => TraceStep::Event(HostEvent::PointerDown {
                x: coord(&args, 0, line_no)?,
                y: coord(&args, 1, line_no)?,
            }),
            "move" => TraceStep::Event(HostEvent::PointerMove {
                x: coord(&args, 0, line_no)?,
                y: coord(&args, 1, line_no)?,
            }),
            // Release coordinates are optional; the pad ignores them anyway.
            "up" => {
                if args.is_empty() {
                    TraceStep::Event(HostEvent::PointerUp { x: 0.0, y: 0.0 })
                } else {
                    TraceStep::Event(HostEvent::PointerUp {
                        x: coord(&args, 0, line_no)?,
                        y: coord(&args, 1, line_no)?,
                    })
                }
            }
            "key" => {
                let name = args
                    .first()
                    .with_context(|| format!("line {line_no}: 'key' needs a key name"))?;
                let key = Key::parse(name)
                    .with_context(|| format!("line {line_no}: unknown key '{name}'"))?;
                TraceStep::Event(HostEvent::KeyDown(key))
            }
            "resize" => TraceStep::Resize(coord(&args, 0, line_no)?),
            other => bail!("line {line_no}: unknown command '{other}'"),
        };
        steps.push(step);
    }

    Ok(steps)
}

fn coord(args: &[&str], index: usize, line_no: usize) -> Result<f64> {
    let token = args
        .get(index)
        .with_context(|| format!("line {line_no}: missing argument {}", index + 1))?;
    token
        .parse::<f64>()
        .with_context(|| format!("line {line_no}: invalid number '{token}'"))
}

/// Replays parsed steps against a pad mounted in an [`ImageHost`].
pub fn run(pad: &mut StrokePad<ImageHost>, steps: &[TraceStep]) {
    for step in steps {
        match step {
            TraceStep::Event(event) => pad.handle_event(*event),
            TraceStep::Resize(width) => {
                pad.host_mut().set_container_width(*width);
                pad.handle_event(HostEvent::Resized);
            }
        }
    }
}
