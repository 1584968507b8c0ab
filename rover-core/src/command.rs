use heapless::Vec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    Forward,
    Backward,
    Left,
    Right,
    Stop,
    Avoid,
    SpeedUp,
    SpeedDown,
}

impl Command {
    /// Parses one line of input. Matching is exact and case sensitive after
    /// trimming surrounding whitespace.
    pub fn parse(line: &[u8]) -> Option<Self> {
        let token = core::str::from_utf8(line).ok()?.trim();

        Some(match token {
            "FORWARD" => Command::Forward,
            "BACKWARD" => Command::Backward,
            "LEFT" => Command::Left,
            "RIGHT" => Command::Right,
            "STOP" => Command::Stop,
            "AVOID" => Command::Avoid,
            "SPEEDUP" => Command::SpeedUp,
            "SPEEDDOWN" => Command::SpeedDown,
            _ => return None,
        })
    }
}

/// Splits a byte stream into newline terminated lines.
///
/// Lines longer than `N` are dropped whole once their terminator arrives.
#[derive(Default)]
pub struct LineReader<const N: usize> {
    buf: Vec<u8, N>,
    overflowed: bool,
}

impl<const N: usize> LineReader<N> {
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            overflowed: false,
        }
    }

    /// Feeds one byte, returning the finished line (without the `\n`).
    pub fn push(&mut self, byte: u8) -> Option<Vec<u8, N>> {
        if byte == b'\n' {
            let line = core::mem::take(&mut self.buf);
            if core::mem::take(&mut self.overflowed) {
                return None;
            }
            return Some(line);
        }

        if self.buf.push(byte).is_err() {
            self.overflowed = true;
        }
        None
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.buf.is_empty() && !self.overflowed
    }

    pub fn clear(&mut self) {
        self.buf.clear();
        self.overflowed = false;
    }
}
