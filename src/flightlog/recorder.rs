//! # Pose log recording
//!
//! Writing a pose log is split in two layers. [`PoseLogWriter`] is the
//! synchronous CSV writer over anything [`Write`]. [`record_stream`] drains
//! an async stream of samples into one, which is the shape a live recording
//! takes: a capture task pushes samples into a channel, the recording task
//! owns the file and runs until the sender side hangs up.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use futures::{pin_mut, Stream, StreamExt};

use crate::flightlog::{PoseSample, POSE_LOG_HEADER};
use crate::Result;

/// What a finished recording amounted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordingInfo {
    /// Number of sample rows written.
    pub samples: usize,
    /// Seconds covered, first to last timestamp. Zero below two samples.
    pub duration: f64,
}

/// CSV writer for pose samples.
///
/// Writes the header row on construction, then one row per sample. Values
/// are formatted with round-trip precision: reading the file back yields
/// bit-identical samples.
#[derive(Debug)]
pub struct PoseLogWriter<W: Write> {
    writer: W,
    samples: usize,
    first_time: Option<f64>,
    last_time: Option<f64>,
}

impl PoseLogWriter<BufWriter<File>> {
    /// Creates the log file at `path` and writes the header row.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(BufWriter::new(File::create(path)?))
    }
}

impl<W: Write> PoseLogWriter<W> {
    /// Wraps a writer and writes the header row to it.
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "{}", POSE_LOG_HEADER)?;

        Ok(PoseLogWriter {
            writer,
            samples: 0,
            first_time: None,
            last_time: None,
        })
    }

    /// Appends one sample row.
    ///
    /// A timestamp earlier than its predecessor is still written, with a
    /// warning. Mid-recording, a suspect clock is not a reason to drop
    /// flight data.
    pub fn record(&mut self, sample: &PoseSample) -> Result<()> {
        if let Some(last) = self.last_time {
            if sample.time < last {
                log::warn!(
                    "non-monotonic timestamp in recording: {} follows {}",
                    sample.time,
                    last
                );
            }
        }

        writeln!(
            self.writer,
            "{},{},{},{},{},{},{},{}",
            sample.time,
            sample.position.x,
            sample.position.y,
            sample.position.z,
            sample.attitude.x,
            sample.attitude.y,
            sample.attitude.z,
            sample.attitude.w,
        )?;

        self.samples += 1;
        if self.first_time.is_none() {
            self.first_time = Some(sample.time);
        }
        self.last_time = Some(sample.time);

        Ok(())
    }

    /// Flushes the underlying writer and reports what was recorded.
    pub fn finish(mut self) -> Result<RecordingInfo> {
        self.writer.flush()?;

        let duration = match (self.first_time, self.last_time) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        };

        Ok(RecordingInfo {
            samples: self.samples,
            duration,
        })
    }
}

/// Drains an async sample stream into a writer.
///
/// Runs until the stream ends, which for a channel stream means every sender
/// has been dropped. The writer is consumed and finished; its report is
/// returned. No executor is assumed.
///
/// # Example
///
/// ```no_run
/// # async fn record() -> crazyflie_postflight::Result<()> {
/// use crazyflie_postflight::flightlog::{self, PoseLogWriter, PoseSample};
///
/// let (tx, rx) = flume::unbounded::<PoseSample>();
/// // A capture task owns `tx` and sends one sample per mocap frame.
/// # drop(tx);
/// let writer = PoseLogWriter::create("hover.csv")?;
/// let info = flightlog::record_stream(rx.into_stream(), writer).await?;
/// println!("recorded {} samples over {:.1} s", info.samples, info.duration);
/// # Ok(())
/// # }
/// ```
pub async fn record_stream<W: Write>(
    samples: impl Stream<Item = PoseSample>,
    mut writer: PoseLogWriter<W>,
) -> Result<RecordingInfo> {
    pin_mut!(samples);

    while let Some(sample) = samples.next().await {
        writer.record(&sample)?;
    }

    writer.finish()
}
