use log::{debug, info, warn};

use crate::bits::read_uint_be;
use crate::ebml::ids::{self, element_name};
use crate::ebml::{decode_one_header, ByteSpan, ElementHeader};

use super::parser::{ParserResult, ParserState};

/// Integer payload of a leaf element, `None` when its size is 0 or above 8.
fn read_uint_payload(header: &ElementHeader<'_>) -> Option<u64> {
    let value = read_uint_be(header.payload);
    if value.is_none() {
        warn!(
            "skipping {} (0x{:X}) with invalid integer size {}",
            element_name(header.id),
            header.id,
            header.size
        );
    }
    value
}

impl ParserState {
    /// Walk elements from the saved resume offset until the view runs out,
    /// the first Cluster shows up or the Cues element has been consumed.
    pub(super) fn walk(&mut self, view: &[u8]) -> ParserResult {
        let mut span = ByteSpan::new(view, self.resume_offset);

        loop {
            let (header, mut consume) = match decode_one_header(span.rest()) {
                Ok(decoded) => decoded,
                Err(err) => {
                    self.resume_offset = span.cursor();
                    if err.is_recoverable() {
                        debug!(
                            "insufficient data, offset = {}, remain len = {}: {}",
                            span.cursor(),
                            span.remaining(),
                            err
                        );
                    } else if !self.stalled {
                        // More input cannot fix this, later calls stay here
                        self.stalled = true;
                        warn!(
                            "malformed element header at consumed offset {}: {}",
                            self.total_consumed, err
                        );
                    }
                    return ParserResult::Ok;
                }
            };

            // These may be unknown-sized; only their header has to be buffered
            if matches!(header.id, ids::SEGMENT | ids::CUES | ids::CLUSTER) && consume > header.size
            {
                consume -= header.size;
            }

            if consume > span.remaining() as u64 {
                self.resume_offset = span.cursor();
                debug!(
                    "insufficient data, offset = {}, remain len = {}, consume = {}",
                    span.cursor(),
                    span.remaining(),
                    consume
                );
                return ParserResult::Ok;
            }

            match header.id {
                ids::EBML_HEADER => {
                    self.total_consumed = 0;
                    debug!("id: ebml header, size = {}", header.size);
                }
                ids::SEGMENT => {
                    self.segment_offset = self.total_consumed;
                    consume = header.header_len();
                    self.segment_data_offset = self.total_consumed + consume;
                    debug!("id: segment, size = {}", header.size);
                }
                ids::SEEK_HEAD => {
                    self.segment_seekhead_offset = self.total_consumed;
                    debug!(
                        "id: seek head, offset = {}, size = {}",
                        self.segment_seekhead_offset, header.size
                    );
                }
                ids::SEGMENT_INFO => {
                    consume = header.header_len();
                    debug!("id: segment info, size = {}", header.size);
                }
                ids::TIMECODE_SCALE => {
                    if let Some(v) = read_uint_payload(&header) {
                        self.time_scale = v;
                    }
                }
                ids::DURATION => {
                    if let Some(v) = read_uint_payload(&header) {
                        self.duration = v;
                    }
                }
                ids::CUES => {
                    consume = header.header_len();
                    self.cues_end_threshold = Some(
                        self.total_consumed
                            .saturating_add(consume)
                            .saturating_add(header.size),
                    );
                    debug!(
                        "id: cues, size = {}, ends at {:?}",
                        header.size, self.cues_end_threshold
                    );
                }
                ids::CUE_POINT => {
                    self.cue_points.push_empty();
                    consume = header.header_len();
                    debug!(
                        "id: cue point, num = {}, size = {}",
                        self.cue_points.len(),
                        header.size
                    );
                }
                ids::CUE_TIME => {
                    if let (Some(v), Some(entry)) =
                        (read_uint_payload(&header), self.cue_points.current_mut())
                    {
                        entry.cue_time = v;
                    }
                }
                ids::CUE_TRACK_POSITIONS => {
                    consume = header.header_len();
                    debug!(
                        "id: track position, num = {}, size = {}",
                        self.cue_points.len(),
                        header.size
                    );
                }
                ids::CUE_TRACK => {
                    if let (Some(v), Some(entry)) =
                        (read_uint_payload(&header), self.cue_points.current_mut())
                    {
                        entry.track_position.track = v;
                    }
                }
                ids::CUE_CLUSTER_POSITION => {
                    if let (Some(v), Some(entry)) =
                        (read_uint_payload(&header), self.cue_points.current_mut())
                    {
                        entry.track_position.cluster_position = v;
                    }
                }
                ids::CLUSTER => {
                    self.resume_offset = span.cursor();
                    info!(
                        "id: cluster, offset = {}, {} cue points",
                        self.total_consumed,
                        self.cue_points.len()
                    );
                    return ParserResult::Done;
                }
                _ => {
                    debug!(
                        "unhandled id = 0x{:X} ({}), size = {}, data_offset = {}, consume = {}",
                        header.id,
                        element_name(header.id),
                        header.size,
                        header.payload_offset,
                        self.total_consumed
                    );
                }
            }

            span.advance(consume);
            self.total_consumed += consume;

            if let Some(threshold) = self.cues_end_threshold {
                if self.total_consumed >= threshold {
                    self.resume_offset = span.cursor();
                    info!(
                        "all cues read, offset in buffer = {}, consume = {}, len = {}, {} cue points",
                        self.resume_offset,
                        self.total_consumed,
                        threshold,
                        self.cue_points.len()
                    );
                    return ParserResult::Done;
                }
            }
        }
    }
}
