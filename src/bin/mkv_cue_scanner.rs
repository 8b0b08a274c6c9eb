use std::env;

use mkvindex::{build_seek_index_from_path, ScanOptions, SeekIndex};

fn main() {
    println!("🔍 MKV Cue Scanner - Seek Index Extraction");
    println!("==========================================");

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: mkv_cue_scanner <file.mkv|file.webm> [chunk_size]");
        println!("Example: mkv_cue_scanner tests/testdata/sample.webm 4096");
        return;
    }
    let file_path = &args[1];

    let mut options = ScanOptions::default();
    if let Some(raw) = args.get(2) {
        match raw.parse::<usize>() {
            Ok(size) if size > 0 => options.chunk_size = size,
            _ => {
                println!("❌ Invalid chunk size: {}", raw);
                return;
            }
        }
    }

    match build_seek_index_from_path(file_path, &options) {
        Ok(index) => {
            print_index(file_path, &index);
            println!("\n✅ Scan completed successfully");
        }
        Err(e) => println!("\n❌ Scan failed: {}", e),
    }
}

fn print_index(path: &str, index: &SeekIndex) {
    println!("📄 File: {}", path);
    println!(
        "⏱️  Time scale: {} ns/tick{}",
        index.effective_time_scale(),
        if index.time_scale == 0 { " (default)" } else { "" }
    );
    println!(
        "📏 Duration: {} ticks ({:.3} s)",
        index.duration,
        index.duration_ns() as f64 / 1e9
    );
    println!(
        "📦 Segment at {}, data at {}, seek head at {}",
        index.segment_offset, index.segment_data_offset, index.segment_seekhead_offset
    );
    println!("🎯 {} cue points", index.len());

    for (i, cue) in index.cue_points.iter().enumerate() {
        println!(
            "  #{:<4} time {:>10.3} s  track {:<3} cluster {:>10} (abs {})",
            i,
            index.cue_time_ns(cue) as f64 / 1e9,
            cue.track_position.track,
            cue.track_position.cluster_position,
            index.cluster_offset(cue)
        );
    }
}
