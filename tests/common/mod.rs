//! Builds Standard MIDI File bytes for tests.
#![allow(dead_code)]

/// Canonical variable-length encoding of `value`.
pub fn vlq(value: u32) -> Vec<u8> {
    let mut out = vec![(value & 0x7F) as u8];
    let mut rest = value >> 7;
    while rest > 0 {
        out.push((rest & 0x7F) as u8 | 0x80);
        rest >>= 7;
    }
    out.reverse();
    out
}

pub fn chunk(id: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut out = id.to_vec();
    out.extend_from_slice(&(body.len() as u32).to_be_bytes());
    out.extend_from_slice(body);
    out
}

pub fn header(format: u16, num_tracks: u16, division: u16) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&format.to_be_bytes());
    body.extend_from_slice(&num_tracks.to_be_bytes());
    body.extend_from_slice(&division.to_be_bytes());
    chunk(b"MThd", &body)
}

/// A complete file from a header and already framed chunks.
pub fn smf(format: u16, division: u16, tracks: &[Vec<u8>]) -> Vec<u8> {
    let mut out = header(format, tracks.len() as u16, division);
    for track in tracks {
        out.extend_from_slice(track);
    }
    out
}

/// Event bytes of one track.
#[derive(Default)]
pub struct TrackBytes {
    bytes: Vec<u8>,
}

impl TrackBytes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(mut self, delta: u32, bytes: &[u8]) -> Self {
        self.bytes.extend(vlq(delta));
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn note_on(self, delta: u32, channel: u8, key: u8, velocity: u8) -> Self {
        self.raw(delta, &[0x90 | channel, key, velocity])
    }

    pub fn note_off(self, delta: u32, channel: u8, key: u8) -> Self {
        self.raw(delta, &[0x80 | channel, key, 0])
    }

    pub fn meta(self, delta: u32, kind: u8, data: &[u8]) -> Self {
        let mut bytes = vec![0xFF, kind];
        bytes.extend(vlq(data.len() as u32));
        bytes.extend_from_slice(data);
        self.raw(delta, &bytes)
    }

    pub fn tempo(self, delta: u32, micros_per_quarter: u32) -> Self {
        self.meta(delta, 0x51, &micros_per_quarter.to_be_bytes()[1..])
    }

    pub fn name(self, name: &str) -> Self {
        self.meta(0, 0x03, name.as_bytes())
    }

    pub fn end(self, delta: u32) -> Self {
        self.meta(delta, 0x2F, &[])
    }

    /// The event bytes without chunk framing.
    pub fn body(self) -> Vec<u8> {
        self.bytes
    }

    /// The events framed as an `MTrk` chunk.
    pub fn chunk(self) -> Vec<u8> {
        chunk(b"MTrk", &self.bytes)
    }
}
