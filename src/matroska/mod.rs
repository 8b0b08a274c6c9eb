pub mod cues;
pub use cues::{CueList, CuePointEntry, CueTrackPosition};
pub mod index;
pub use index::{SeekIndex, DEFAULT_TIME_SCALE};
pub mod parser;
pub use parser::{ParserResult, ParserState, ParserStatus, EBML_MAGIC_LEN};
mod walker;
