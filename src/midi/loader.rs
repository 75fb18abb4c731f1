use std::io::Read;

use crate::midi::error::Result;
use crate::midi::reader::ByteReader;
use crate::midi::timebase::TimeBase;

/// Decode the MThd chunk.
/// Returns the declared track count and the tick-to-seconds time base.
pub fn decode_header<R: Read>(
    reader: &mut ByteReader<R>,
    bpm_override: Option<f64>,
) -> Result<(u16, TimeBase)> {
    reader.expect_magic("MThd")?;

    // Chunk size and format word. The format is not interpreted: tracks
    // are decoded in file order regardless.
    reader.skip(4)?;
    reader.skip(2)?;

    let num_tracks = reader.read_fixed(2)? as u16;
    let division = reader.read_fixed(2)? as u16;

    Ok((num_tracks, TimeBase::from_division(division, bpm_override)))
}
