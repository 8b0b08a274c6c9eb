use serde::Serialize;

use super::cues::CuePointEntry;

/// Time scale assumed when a stream carries no TimecodeScale (1ms ticks)
pub const DEFAULT_TIME_SCALE: u64 = 1_000_000;

/// Completed seek index handed to the caller once parsing is done
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeekIndex {
    /// Nanoseconds per tick as read from TimecodeScale, 0 if absent
    pub time_scale: u64,
    /// Raw Duration value in ticks
    pub duration: u64,
    /// Consumed byte count where the Segment element starts
    pub segment_offset: u64,
    /// Consumed byte count where the Segment payload starts
    pub segment_data_offset: u64,
    /// Consumed byte count where the SeekHead element starts
    pub segment_seekhead_offset: u64,
    pub cue_points: Vec<CuePointEntry>,
}

impl SeekIndex {
    pub fn len(&self) -> usize {
        self.cue_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cue_points.is_empty()
    }

    /// Time scale in nanoseconds per tick, falling back to the Matroska default.
    pub fn effective_time_scale(&self) -> u64 {
        if self.time_scale == 0 {
            DEFAULT_TIME_SCALE
        } else {
            self.time_scale
        }
    }

    pub fn cue_time_ns(&self, entry: &CuePointEntry) -> u64 {
        entry.cue_time.saturating_mul(self.effective_time_scale())
    }

    pub fn duration_ns(&self) -> u64 {
        self.duration.saturating_mul(self.effective_time_scale())
    }

    /// Absolute byte offset of the cluster referenced by `entry`.
    pub fn cluster_offset(&self, entry: &CuePointEntry) -> u64 {
        self.segment_data_offset
            .saturating_add(entry.track_position.cluster_position)
    }

    /// Cue to seek to for `time_ns`: the latest cue at or before it, or the
    /// earliest cue when the target precedes every cue.
    pub fn find_cue(&self, time_ns: u64) -> Option<&CuePointEntry> {
        self.cue_points
            .iter()
            .filter(|cue| self.cue_time_ns(cue) <= time_ns)
            .max_by_key(|cue| cue.cue_time)
            .or_else(|| self.cue_points.iter().min_by_key(|cue| cue.cue_time))
    }

    pub fn cues_for_track(&self, track: u64) -> impl Iterator<Item = &CuePointEntry> + '_ {
        self.cue_points
            .iter()
            .filter(move |cue| cue.track_position.track == track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matroska::cues::CueTrackPosition;

    fn cue(time: u64, track: u64, pos: u64) -> CuePointEntry {
        CuePointEntry {
            cue_time: time,
            track_position: CueTrackPosition {
                track,
                cluster_position: pos,
            },
        }
    }

    fn sample_index() -> SeekIndex {
        SeekIndex {
            time_scale: 1_000_000,
            duration: 5000,
            segment_offset: 5,
            segment_data_offset: 17,
            segment_seekhead_offset: 17,
            cue_points: vec![
                cue(0, 1, 0),
                cue(2000, 1, 512),
                cue(2000, 2, 640),
                cue(4000, 1, 1024),
            ],
        }
    }

    #[test]
    fn test_time_conversion() {
        let index = sample_index();
        assert_eq!(index.duration_ns(), 5_000_000_000);
        assert_eq!(index.cue_time_ns(&index.cue_points[1]), 2_000_000_000);

        let unset = SeekIndex {
            duration: 3,
            ..SeekIndex::default()
        };
        assert_eq!(unset.effective_time_scale(), DEFAULT_TIME_SCALE);
        assert_eq!(unset.duration_ns(), 3_000_000);
    }

    #[test]
    fn test_find_cue() {
        let index = sample_index();
        assert_eq!(index.find_cue(0), Some(&index.cue_points[0]));
        assert_eq!(index.find_cue(1_999_999_999), Some(&index.cue_points[0]));
        assert_eq!(index.find_cue(3_000_000_000).map(|c| c.cue_time), Some(2000));
        assert_eq!(index.find_cue(u64::MAX), Some(&index.cue_points[3]));
        assert_eq!(SeekIndex::default().find_cue(10), None);

        let late = SeekIndex {
            cue_points: vec![cue(100, 1, 0)],
            ..SeekIndex::default()
        };
        assert_eq!(late.find_cue(0), Some(&late.cue_points[0]));
    }

    #[test]
    fn test_cluster_offset_and_track_filter() {
        let index = sample_index();
        assert_eq!(index.cluster_offset(&index.cue_points[1]), 529);
        let track_two: Vec<_> = index.cues_for_track(2).collect();
        assert_eq!(track_two, vec![&index.cue_points[2]]);
        assert_eq!(index.cues_for_track(1).count(), 3);
    }

    #[test]
    fn test_index_serializes_to_json() {
        let value = serde_json::to_value(sample_index()).expect("json");
        assert_eq!(value["time_scale"], 1_000_000);
        assert_eq!(value["duration"], 5000);
        assert_eq!(value["segment_offset"], 5);
        assert_eq!(value["segment_data_offset"], 17);
        assert_eq!(value["segment_seekhead_offset"], 17);

        let cues = value["cue_points"].as_array().expect("cue array");
        assert_eq!(cues.len(), 4);
        assert_eq!(cues[2]["cue_time"], 2000);
        assert_eq!(cues[2]["track_position"]["track"], 2);
        assert_eq!(cues[2]["track_position"]["cluster_position"], 640);
    }
}
