use log::{debug, error, warn};
use serde::Serialize;

use crate::bits::read_uint_be;
use crate::ebml::ids;
use crate::streams::adapter::ByteAdapter;

use super::cues::{CueList, CuePointEntry};
use super::index::SeekIndex;

/// Number of bytes checked against the EBML header ID before walking
pub const EBML_MAGIC_LEN: usize = 4;

/// Lifecycle of one parsing session. Only ever moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ParserStatus {
    #[default]
    Init,
    AwaitingHeader,
    ParsingBody,
    Finished,
}

/// Outcome of one `step` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParserResult {
    /// Progress saved, call again once more bytes are buffered
    Ok,
    /// First Cluster or end of Cues reached, the index is complete
    Done,
    /// Input does not start with an EBML header
    NotSupported,
    /// The adapter state contradicts the saved resume offset
    ErrorParam,
    /// Not enough bytes to check the EBML header yet
    InsufficientData,
    /// The adapter mapped fewer bytes than it reported available
    Error,
}

/// State of one incremental Matroska seek-index parse.
///
/// Only integer offsets survive between `step` calls, so the caller is free
/// to append to (or compact, see [`ParserState::on_flush`]) its buffer
/// between calls.
#[derive(Debug, Default)]
pub struct ParserState {
    pub(super) status: ParserStatus,
    /// Bytes consumed since the EBML header, never decreases within a segment
    pub(super) total_consumed: u64,
    /// Position inside the adapter where the next decode starts
    pub(super) resume_offset: usize,
    pub(super) segment_offset: u64,
    pub(super) segment_data_offset: u64,
    pub(super) segment_seekhead_offset: u64,
    pub(super) time_scale: u64,
    pub(super) duration: u64,
    /// Consumed count at which the whole Cues element has been seen
    pub(super) cues_end_threshold: Option<u64>,
    pub(super) cue_points: CueList,
    /// Set once the walk hit a header no amount of extra input can decode
    pub(super) stalled: bool,
}

impl ParserState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to a fresh session.
    ///
    /// A non-empty cue list here means the previous session was never
    /// released; that is logged and the list dropped anyway.
    pub fn initialize(&mut self) {
        if !self.cue_points.is_empty() {
            error!(
                "parser initialized with {} cue points still held, previous session was not released",
                self.cue_points.len()
            );
        }
        *self = Self::default();
    }

    /// Drop the cue list and zero the state.
    ///
    /// Call [`ParserState::take_index`] first to keep the result; releasing
    /// a list that was never taken is logged.
    pub fn release(&mut self) {
        if !self.cue_points.is_empty() {
            error!(
                "releasing {} cue points that were never taken",
                self.cue_points.len()
            );
        }
        *self = Self::default();
    }

    /// Advance through as many states as the buffered bytes allow.
    ///
    /// Returns `Done` exactly once; later calls are no-ops returning `Ok`.
    pub fn step<A: ByteAdapter + ?Sized>(&mut self, adapter: &A) -> ParserResult {
        loop {
            match self.status {
                ParserStatus::Init => {
                    self.initialize();
                    self.status = ParserStatus::AwaitingHeader;
                }
                ParserStatus::AwaitingHeader => {
                    let res = self.check_ebml_magic(adapter);
                    if res != ParserResult::Ok {
                        return res;
                    }
                    self.status = ParserStatus::ParsingBody;
                }
                ParserStatus::ParsingBody => {
                    let res = self.extract_data(adapter);
                    if res != ParserResult::Done {
                        return res;
                    }
                    self.status = ParserStatus::Finished;
                    return res;
                }
                ParserStatus::Finished => return ParserResult::Ok,
            }
        }
    }

    fn check_ebml_magic<A: ByteAdapter + ?Sized>(&self, adapter: &A) -> ParserResult {
        let avail = adapter.available();
        if avail < EBML_MAGIC_LEN {
            debug!("insufficient data for EBML header, len = {}", avail);
            return ParserResult::InsufficientData;
        }

        let view = adapter.map(EBML_MAGIC_LEN);
        let res = if view.len() < EBML_MAGIC_LEN {
            error!(
                "adapter mapped {} bytes, expected {}",
                view.len(),
                EBML_MAGIC_LEN
            );
            ParserResult::Error
        } else if read_uint_be(&view[..EBML_MAGIC_LEN]) == Some(u64::from(ids::EBML_HEADER)) {
            ParserResult::Ok
        } else {
            warn!("stream does not start with an EBML header: {:02X?}", view);
            ParserResult::NotSupported
        };
        adapter.unmap();
        res
    }

    fn extract_data<A: ByteAdapter + ?Sized>(&mut self, adapter: &A) -> ParserResult {
        let avail = adapter.available();
        if self.resume_offset > avail {
            error!(
                "resume offset {} beyond {} available bytes, buffer flushed without on_flush?",
                self.resume_offset, avail
            );
            return ParserResult::ErrorParam;
        }

        let view = adapter.map(avail);
        let res = if view.len() < avail {
            error!("adapter mapped {} of {} available bytes", view.len(), avail);
            ParserResult::Error
        } else {
            self.walk(view)
        };
        adapter.unmap();
        res
    }

    /// Rebase the resume point after the caller discarded `n` bytes from the
    /// front of its buffer.
    pub fn on_flush(&mut self, n: usize) {
        self.resume_offset = self.resume_offset.saturating_sub(n);
    }

    /// Move the collected index out, leaving the state's cue list empty.
    pub fn take_index(&mut self) -> SeekIndex {
        SeekIndex {
            time_scale: self.time_scale,
            duration: self.duration,
            segment_offset: self.segment_offset,
            segment_data_offset: self.segment_data_offset,
            segment_seekhead_offset: self.segment_seekhead_offset,
            cue_points: self.cue_points.take(),
        }
    }

    pub fn status(&self) -> ParserStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == ParserStatus::Finished
    }

    /// Whether parsing is stuck on a malformed element header.
    pub fn is_stalled(&self) -> bool {
        self.stalled
    }

    pub fn total_consumed(&self) -> u64 {
        self.total_consumed
    }

    pub fn resume_offset(&self) -> usize {
        self.resume_offset
    }

    pub fn segment_offset(&self) -> u64 {
        self.segment_offset
    }

    pub fn segment_data_offset(&self) -> u64 {
        self.segment_data_offset
    }

    pub fn segment_seekhead_offset(&self) -> u64 {
        self.segment_seekhead_offset
    }

    pub fn time_scale(&self) -> u64 {
        self.time_scale
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn cues_end_threshold(&self) -> Option<u64> {
        self.cues_end_threshold
    }

    pub fn cue_points(&self) -> &[CuePointEntry] {
        self.cue_points.as_slice()
    }
}
