#![allow(dead_code)]

use mkvindex::ebml::ids;
use mkvindex::ebml::{write_element_header, write_unknown_size_header};

/// Minimal big-endian encoding of an unsigned integer payload.
pub fn uint_bytes(value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(7);
    bytes[start..].to_vec()
}

pub fn element(id: u32, payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    write_element_header(&mut buf, id, payload.len() as u64);
    buf.extend_from_slice(payload);
    buf
}

/// Element header declaring `size` payload bytes, none of which are written.
pub fn element_header(id: u32, size: u64) -> Vec<u8> {
    let mut buf = Vec::new();
    write_element_header(&mut buf, id, size);
    buf
}

pub fn uint_element(id: u32, value: u64) -> Vec<u8> {
    element(id, &uint_bytes(value))
}

pub fn cue_point(time: u64, track: u64, position: u64) -> Vec<u8> {
    let positions = element(
        ids::CUE_TRACK_POSITIONS,
        &[
            uint_element(ids::CUE_TRACK, track),
            uint_element(ids::CUE_CLUSTER_POSITION, position),
        ]
        .concat(),
    );
    element(
        ids::CUE_POINT,
        &[uint_element(ids::CUE_TIME, time), positions].concat(),
    )
}

/// EBML header, unknown-sized Segment, SegmentInfo, Cues and a Cluster header.
pub fn matroska_stream(
    time_scale: u64,
    duration: u64,
    cues: &[(u64, u64, u64)],
    unknown_size_cues: bool,
) -> Vec<u8> {
    let mut out = element(ids::EBML_HEADER, &uint_element(0x4286, 1));
    write_unknown_size_header(&mut out, ids::SEGMENT);
    out.extend(element(
        ids::SEGMENT_INFO,
        &[
            uint_element(ids::TIMECODE_SCALE, time_scale),
            uint_element(ids::DURATION, duration),
        ]
        .concat(),
    ));
    out.extend(element(ids::TRACKS, &[0xAE, 0x83, 0xD7, 0x81, 0x01]));

    let points: Vec<u8> = cues
        .iter()
        .flat_map(|&(time, track, pos)| cue_point(time, track, pos))
        .collect();
    if unknown_size_cues {
        write_unknown_size_header(&mut out, ids::CUES);
        out.extend(points);
    } else {
        out.extend(element(ids::CUES, &points));
    }

    write_unknown_size_header(&mut out, ids::CLUSTER);
    out.extend(uint_element(0xE7, 0));
    out
}

/// Same layout with a known-size Segment and Cluster whose declared sizes run
/// far past the bytes actually written.
pub fn known_size_stream(
    segment_size: u64,
    cluster_size: u64,
    cues: &[(u64, u64, u64)],
) -> Vec<u8> {
    let mut out = element(ids::EBML_HEADER, &[]);
    out.extend(element_header(ids::SEGMENT, segment_size));
    out.extend(element(
        ids::SEGMENT_INFO,
        &uint_element(ids::TIMECODE_SCALE, 1_000_000),
    ));
    write_unknown_size_header(&mut out, ids::CUES);
    for &(time, track, pos) in cues {
        out.extend(cue_point(time, track, pos));
    }
    out.extend(element_header(ids::CLUSTER, cluster_size));
    out.extend(uint_element(0xE7, 0));
    out.extend(vec![0xA3; 64]);
    out
}
