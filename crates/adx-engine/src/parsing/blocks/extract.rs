use super::markers::Markers;

/// One documentation block: trimmed content lines with markers stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub lines: Vec<String>,
}

impl Block {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Line-at-a-time block extraction.
///
/// In block mode `current` is `Some` while a block is open. In line mode it is
/// `Some` while a run of prefixed lines is in progress.
pub struct BlockExtractor<'m> {
    markers: &'m Markers,
    current: Option<Vec<String>>,
    out: Vec<Block>,
}

impl<'m> BlockExtractor<'m> {
    pub fn new(markers: &'m Markers) -> Self {
        Self {
            markers,
            current: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &str) {
        let trimmed = line.trim();
        let markers = self.markers;
        match markers {
            Markers::Block { begin, middle, end } => {
                self.push_delimited(trimmed, begin, middle.as_deref(), end)
            }
            Markers::Line { begin } => self.push_prefixed(trimmed, begin),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        match self.markers {
            // Unterminated block: dropped
            Markers::Block { .. } => {}
            Markers::Line { .. } => self.flush_run(),
        }
        self.out
    }

    fn push_delimited(&mut self, trimmed: &str, begin: &str, middle: Option<&str>, end: &str) {
        if self.current.is_none() {
            if let Some(rest) = trimmed.strip_prefix(begin) {
                let mut lines = Vec::new();
                push_non_empty(&mut lines, rest);
                if begin == end {
                    self.out.push(Block::new(lines));
                } else {
                    self.current = Some(lines);
                }
            }
            return;
        }

        if trimmed.starts_with(end) {
            let lines = self.current.take().unwrap_or_default();
            self.out.push(Block::new(lines));
            return;
        }

        if let Some(lines) = self.current.as_mut() {
            match middle.and_then(|m| trimmed.strip_prefix(m)) {
                Some(rest) => push_non_empty(lines, rest),
                None if middle.is_some() => lines.push(trimmed.to_string()),
                None => push_non_empty(lines, trimmed),
            }
        }
    }

    fn push_prefixed(&mut self, trimmed: &str, begin: &str) {
        match trimmed.strip_prefix(begin) {
            Some(rest) => push_non_empty(self.current.get_or_insert_with(Vec::new), rest),
            None => self.flush_run(),
        }
    }

    fn flush_run(&mut self) {
        if let Some(lines) = self.current.take()
            && !lines.is_empty()
        {
            self.out.push(Block::new(lines));
        }
    }
}

fn push_non_empty(lines: &mut Vec<String>, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        lines.push(text.to_string());
    }
}

/// Convenience: run a [`BlockExtractor`] over a line sequence.
pub fn extract_blocks<'a, I>(lines: I, markers: &Markers) -> Vec<Block>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut extractor = BlockExtractor::new(markers);
    for line in lines {
        extractor.push(line);
    }
    extractor.finish()
}
