use std::io::{self, Read};

use crate::midi::error::{MidiError, Result};

/// Sequential byte source with the two SMF integer codecs
/// (fixed-width big-endian and base-128 variable-length).
pub struct ByteReader<R: Read> {
    inner: R,
}

impl<R: Read> ByteReader<R> {
    pub fn new(inner: R) -> Self {
        ByteReader { inner }
    }

    /// Read the next byte, failing if the stream is exhausted.
    pub fn read_u8(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.inner.read_exact(&mut buf).map_err(map_eof)?;
        Ok(buf[0])
    }

    /// Discard exactly `n` bytes.
    pub fn skip(&mut self, n: u64) -> Result<()> {
        let copied = io::copy(&mut self.inner.by_ref().take(n), &mut io::sink())?;
        if copied < n {
            return Err(MidiError::UnexpectedEof);
        }
        Ok(())
    }

    /// Read an `n`-byte big-endian unsigned integer, 1 <= n <= 4.
    pub fn read_fixed(&mut self, n: usize) -> Result<u32> {
        debug_assert!((1..=4).contains(&n));
        let mut value = 0u32;
        for _ in 0..n {
            value = (value << 8) | u32::from(self.read_u8()?);
        }
        Ok(value)
    }

    /// Decode a variable-length quantity: low 7 bits per byte, most
    /// significant group first, stop on the first byte with bit 7 clear.
    pub fn read_varlen(&mut self) -> Result<u32> {
        let mut value = 0u32;
        loop {
            let byte = self.read_u8()?;
            value = (value << 7) | u32::from(byte & 0x7F);
            if (byte & 0x80) == 0 {
                break;
            }
        }
        Ok(value)
    }

    /// Read the 4-byte chunk signature and compare against `expected`.
    pub fn expect_magic(&mut self, expected: &'static str) -> Result<()> {
        let mut magic = [0u8; 4];
        for slot in magic.iter_mut() {
            *slot = self.read_u8()?;
        }
        if magic != expected.as_bytes() {
            return Err(MidiError::BadMagic { expected });
        }
        Ok(())
    }
}

fn map_eof(err: io::Error) -> MidiError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        MidiError::UnexpectedEof
    } else {
        MidiError::Io(err)
    }
}
