// Loose object file format: the zlib-compressed bytes of
// `"<kind> <len>\0<content>"`.

use std::io::{self, Read, Write};
use std::str;

use flate2::{read::ZlibDecoder, write::ZlibEncoder, Compression};

use minigit_core::object::{Kind, Object};

pub(crate) fn encode(object: &Object) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&object.header())?;
    encoder.write_all(object.content())?;
    encoder.finish()
}

// Returns `None` if the bytes don't inflate to a well-formed object.
pub(crate) fn decode(compressed: &[u8]) -> Option<Object> {
    let mut raw = Vec::new();
    ZlibDecoder::new(compressed).read_to_end(&mut raw).ok()?;

    let nul = raw.iter().position(|b| *b == 0)?;
    let header = str::from_utf8(&raw[..nul]).ok()?;

    let mut words = header.splitn(2, ' ');
    let kind = words.next()?.parse::<Kind>().ok()?;
    let len = words.next()?;
    if !len.bytes().all(|b| b.is_ascii_digit()) || (len.starts_with('0') && len != "0") {
        return None;
    }
    let len = len.parse::<usize>().ok()?;

    let content = raw.split_off(nul + 1);
    if content.len() != len {
        return None;
    }

    Some(Object::new(kind, content))
}
