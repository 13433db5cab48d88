/// Which stream an output line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Everything a finished command reports: its output lines, in order, and
/// its exit code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    lines: Vec<(Stream, String)>,
    pub exit_code: i32,
}

impl Outcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn out(&mut self, message: impl Into<String>) {
        self.lines.push((Stream::Stdout, message.into()));
    }

    pub fn err(&mut self, message: impl Into<String>) {
        self.lines.push((Stream::Stderr, message.into()));
    }

    pub fn lines(&self) -> &[(Stream, String)] {
        &self.lines
    }

    pub fn has_output(&self) -> bool {
        !self.lines.is_empty()
    }

    /// Lines written to one stream
    pub fn stream(&self, stream: Stream) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, line)| line.as_str())
            .collect()
    }
}
