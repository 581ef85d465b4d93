//! The resolved byte stream handed to the caller.

use std::fmt;
use std::io::{self, Cursor, Read};

/// An open readable byte stream over a resolved resource.
///
/// Ownership transfers to the caller on success; the resolver keeps no
/// reference. Dropping the stream releases everything, there is no explicit
/// close.
pub struct ResourceStream {
    body: Cursor<Vec<u8>>,
}

impl ResourceStream {
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            body: Cursor::new(bytes),
        }
    }

    /// Total length of the resource in bytes, regardless of read position.
    pub fn len(&self) -> u64 {
        self.body.get_ref().len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.body.get_ref().is_empty()
    }

    /// Consumes the stream and returns the remaining unread bytes.
    pub fn into_bytes(mut self) -> Vec<u8> {
        let pos = self.body.position() as usize;
        let mut bytes = self.body.into_inner();
        if pos > 0 {
            bytes.drain(..pos.min(bytes.len()));
        }
        bytes
    }
}

impl Read for ResourceStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.body.read(buf)
    }
}

impl fmt::Debug for ResourceStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceStream")
            .field("len", &self.len())
            .field("pos", &self.body.position())
            .finish()
    }
}
