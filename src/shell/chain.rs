/// Separator between two commands on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainOperator {
    /// Start of a line, or no operator after the last segment.
    #[default]
    None,
    /// `;`
    Sequence,
    /// `&&`
    And,
    /// `||`
    Or,
}

impl ChainOperator {
    fn at(bytes: &[u8]) -> Option<(ChainOperator, usize)> {
        match bytes {
            [b'|', b'|', ..] => Some((ChainOperator::Or, 2)),
            [b'&', b'&', ..] => Some((ChainOperator::And, 2)),
            [b';', ..] => Some((ChainOperator::Sequence, 1)),
            _ => None,
        }
    }
}

/// Byte span of one command inside the loaded line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    /// Operator between this segment and the one before it.
    pub preceded_by: ChainOperator,
    /// Operator that ended this segment.
    pub terminator: ChainOperator,
}

/// Whether a segment runs, given the operator in front of it and the status
/// of the command before.
pub fn should_run(preceded_by: ChainOperator, last_status: i32) -> bool {
    match preceded_by {
        ChainOperator::And => last_status == 0,
        ChainOperator::Or => last_status != 0,
        ChainOperator::Sequence | ChainOperator::None => true,
    }
}

/// Walks a line segment by segment, keeping its cursor between calls.
#[derive(Debug, Default)]
pub struct ChainSplitter {
    line: String,
    position: usize,
    previous: ChainOperator,
}

impl ChainSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current line and rewinds the cursor.
    pub fn load(&mut self, line: String) {
        self.line = line;
        self.position = 0;
        self.previous = ChainOperator::None;
    }

    pub fn has_pending(&self) -> bool {
        self.position < self.line.len()
    }

    pub fn next_segment(&mut self) -> Option<Segment> {
        if !self.has_pending() {
            return None;
        }

        let bytes = self.line.as_bytes();
        let start = self.position;
        let mut end = bytes.len();
        let mut terminator = ChainOperator::None;
        let mut next = bytes.len();

        for index in start..bytes.len() {
            if let Some((operator, width)) = ChainOperator::at(&bytes[index..]) {
                end = index;
                terminator = operator;
                next = index + width;
                break;
            }
        }

        let segment = Segment {
            start,
            end,
            preceded_by: self.previous,
            terminator,
        };
        self.position = next;
        self.previous = terminator;
        Some(segment)
    }

    /// Text of `segment`, trimmed.
    pub fn text(&self, segment: &Segment) -> &str {
        self.line[segment.start..segment.end].trim()
    }

    /// Drops whatever is left of the current line.
    pub fn skip_remaining(&mut self) {
        self.position = self.line.len();
    }
}
