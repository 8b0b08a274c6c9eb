//! Element IDs consulted while building the seek index.
//!
//! IDs keep their VINT marker bits, so they compare directly against the raw
//! big-endian bytes found on the wire.

/// EBML header (level 0).
pub const EBML_HEADER: u32 = 0x1A45_DFA3;

/// Segment (level 0).
pub const SEGMENT: u32 = 0x1853_8067;
/// Cluster, first media payload container (level 1).
pub const CLUSTER: u32 = 0x1F43_B675;

// Level 1, children of Segment
pub const SEEK_HEAD: u32 = 0x114D_9B74;
pub const SEGMENT_INFO: u32 = 0x1549_A966;
pub const TRACKS: u32 = 0x1654_AE6B;
pub const CUES: u32 = 0x1C53_BB6B;
pub const TAGS: u32 = 0x1254_C367;
pub const ATTACHMENTS: u32 = 0x1941_A469;
pub const CHAPTERS: u32 = 0x1043_A770;

// Level 2, children of SegmentInfo
pub const TIMECODE_SCALE: u32 = 0x2A_D7B1;
pub const DURATION: u32 = 0x4489;

/// CuePoint, child of Cues.
pub const CUE_POINT: u32 = 0xBB;
/// CueTime, child of CuePoint.
pub const CUE_TIME: u32 = 0xB3;
/// CueTrackPositions, child of CuePoint.
pub const CUE_TRACK_POSITIONS: u32 = 0xB7;
/// CueTrack, child of CueTrackPositions.
pub const CUE_TRACK: u32 = 0xF7;
/// CueClusterPosition, child of CueTrackPositions.
pub const CUE_CLUSTER_POSITION: u32 = 0xF1;
pub const CUE_BLOCK_NUMBER: u32 = 0x5378;

/// Human readable name for the IDs above, used in log output.
pub fn element_name(id: u32) -> &'static str {
    match id {
        EBML_HEADER => "EBML",
        SEGMENT => "Segment",
        CLUSTER => "Cluster",
        SEEK_HEAD => "SeekHead",
        SEGMENT_INFO => "Info",
        TRACKS => "Tracks",
        CUES => "Cues",
        TAGS => "Tags",
        ATTACHMENTS => "Attachments",
        CHAPTERS => "Chapters",
        TIMECODE_SCALE => "TimecodeScale",
        DURATION => "Duration",
        CUE_POINT => "CuePoint",
        CUE_TIME => "CueTime",
        CUE_TRACK_POSITIONS => "CueTrackPositions",
        CUE_TRACK => "CueTrack",
        CUE_CLUSTER_POSITION => "CueClusterPosition",
        CUE_BLOCK_NUMBER => "CueBlockNumber",
        _ => "unhandled",
    }
}
