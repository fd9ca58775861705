//! Natural ordering for source tags.
//!
//! Section tags like `COURSE-1.2` and `COURSE-1.10` must sort by their
//! numeric parts, not lexicographically. Tags with fewer than two digit runs
//! have no reliable numeric shape and fall back to plain string order; the
//! numeric partition always sorts ahead of the string partition so the two
//! key shapes are never compared against each other.

/// Sort key for one source tag. Variant order matters: numeric keys sort
/// before string keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SourceKey {
    Numeric(Vec<u64>),
    Text(String),
}

impl SourceKey {
    /// Build the key for a tag: the tuple of its digit runs when there are
    /// at least two of them, otherwise the raw string.
    pub fn for_tag(tag: &str) -> Self {
        let runs = digit_runs(tag);
        if runs.len() >= 2 {
            Self::Numeric(runs)
        } else {
            Self::Text(tag.to_string())
        }
    }
}

/// All maximal runs of ASCII digits in `tag`, left to right.
fn digit_runs(tag: &str) -> Vec<u64> {
    let mut runs = Vec::new();
    let mut current = String::new();
    for c in tag.chars() {
        if c.is_ascii_digit() {
            current.push(c);
        } else if !current.is_empty() {
            runs.push(parse_run(&current));
            current.clear();
        }
    }
    if !current.is_empty() {
        runs.push(parse_run(&current));
    }
    runs
}

fn parse_run(digits: &str) -> u64 {
    // Runs longer than u64 saturate; ordering stays sane.
    digits.parse().unwrap_or(u64::MAX)
}
