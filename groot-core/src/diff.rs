use similar::{ChangeTag, TextDiff};
use std::fmt;

/// Prefix put in front of every added line when rendering.
pub const ADDED_PREFIX: &str = "++";
/// Prefix put in front of every removed line when rendering.
pub const REMOVED_PREFIX: &str = "--";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Unchanged,
    Added,
    Removed,
}

/// A maximal run of consecutive lines sharing one kind. `text` keeps the
/// original line endings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSegment {
    pub kind: SegmentKind,
    pub text: String,
}

impl DiffSegment {
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

/// Computes a line-level diff between `old_text` and `new_text`.
///
/// Uses Myers' algorithm, which yields a minimal edit script (the complement
/// of a longest common subsequence) and always segments the same inputs the
/// same way. Within a replaced region the removed lines come first.
pub fn diff_lines(old_text: &str, new_text: &str) -> Vec<DiffSegment> {
    if old_text == new_text {
        return vec![DiffSegment::new(SegmentKind::Unchanged, old_text)];
    }

    let diff = TextDiff::from_lines(old_text, new_text);
    let mut segments: Vec<DiffSegment> = Vec::new();

    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => SegmentKind::Unchanged,
            ChangeTag::Insert => SegmentKind::Added,
            ChangeTag::Delete => SegmentKind::Removed,
        };

        match segments.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(change.value()),
            _ => segments.push(DiffSegment::new(kind, change.value())),
        }
    }

    segments
}

/// One display line produced by [`render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub kind: SegmentKind,
    pub text: String,
}

impl fmt::Display for RenderedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Formats segments for display: unchanged lines pass through, added lines
/// get [`ADDED_PREFIX`] and removed lines get [`REMOVED_PREFIX`].
pub fn render(segments: &[DiffSegment]) -> Vec<RenderedLine> {
    let mut lines = Vec::new();

    for segment in segments {
        let prefix = match segment.kind {
            SegmentKind::Unchanged => "",
            SegmentKind::Added => ADDED_PREFIX,
            SegmentKind::Removed => REMOVED_PREFIX,
        };

        for line in segment.text.lines() {
            lines.push(RenderedLine {
                kind: segment.kind,
                text: format!("{}{}", prefix, line),
            });
        }
    }

    lines
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
}

impl DiffStats {
    pub fn from_segments(segments: &[DiffSegment]) -> Self {
        segments.iter().fold(Self::default(), |mut stats, segment| {
            match segment.kind {
                SegmentKind::Added => stats.added += segment.line_count(),
                SegmentKind::Removed => stats.removed += segment.line_count(),
                SegmentKind::Unchanged => {}
            }
            stats
        })
    }
}
