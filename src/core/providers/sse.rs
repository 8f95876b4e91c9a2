/// Accumulates raw SSE bytes and yields complete event blocks.
///
/// Bytes are kept undecoded until a block boundary is seen, so a multi-byte
/// character split across network chunks is never mangled.
#[derive(Debug, Default)]
pub struct SseBuffer {
    buffer: Vec<u8>,
}

impl SseBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn push_chunk(&mut self, chunk: &[u8]) {
        self.buffer.extend_from_slice(chunk);
    }

    pub fn next_event_block(&mut self) -> Option<String> {
        let (boundary, separator_len) = find_boundary(&self.buffer)?;
        let remaining = self.buffer.split_off(boundary + separator_len);
        let block = std::mem::replace(&mut self.buffer, remaining);
        Some(String::from_utf8_lossy(&block).into_owned())
    }
}

fn find_boundary(bytes: &[u8]) -> Option<(usize, usize)> {
    let lf = bytes.windows(2).position(|w| w == b"\n\n").map(|i| (i, 2));
    let crlf = bytes
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .map(|i| (i, 4));
    match (lf, crlf) {
        (Some(a), Some(b)) => Some(if a.0 <= b.0 { a } else { b }),
        (a, b) => a.or(b),
    }
}

pub fn parse_data_lines(event_block: &str) -> Vec<&str> {
    event_block
        .lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .map(|data| data.strip_prefix(' ').unwrap_or(data))
        .collect()
}

pub fn parse_data_lines_without_done(event_block: &str) -> Vec<&str> {
    parse_data_lines(event_block)
        .into_iter()
        .filter(|data| data.trim() != "[DONE]")
        .collect()
}
