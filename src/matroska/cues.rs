use serde::Serialize;

/// Location of the cluster holding a cued sample for one track
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CueTrackPosition {
    pub track: u64,
    /// Byte offset of the cluster relative to the Segment data start
    pub cluster_position: u64,
}

/// One CuePoint: a time in time scale ticks and where to find it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CuePointEntry {
    pub cue_time: u64,
    pub track_position: CueTrackPosition,
}

/// Append-only list of cue points in stream order.
///
/// Entries are pushed zeroed when their CuePoint is entered and filled in
/// place by the children that follow, always through the last entry.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CueList {
    entries: Vec<CuePointEntry>,
}

impl CueList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a zero-valued entry, which becomes the current one.
    pub fn push_empty(&mut self) {
        self.entries.push(CuePointEntry::default());
    }

    /// The entry currently being filled, if any CuePoint has been seen.
    pub fn current_mut(&mut self) -> Option<&mut CuePointEntry> {
        self.entries.last_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[CuePointEntry] {
        &self.entries
    }

    /// Move every entry out, leaving the list empty.
    pub fn take(&mut self) -> Vec<CuePointEntry> {
        std::mem::take(&mut self.entries)
    }
}
