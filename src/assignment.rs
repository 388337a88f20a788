/// Closed interval of section ids, `lo..=hi`. `lo <= hi` is assumed, not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRange {
    pub lo: i64,
    pub hi: i64,
}

impl SectionRange {
    pub fn new(lo: i64, hi: i64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, other: &SectionRange) -> bool {
        self.lo <= other.lo && self.hi >= other.hi
    }

    pub fn overlaps(&self, other: &SectionRange) -> bool {
        !(self.lo > other.hi || self.hi < other.lo)
    }
}

/// The two ranges listed on one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub first: SectionRange,
    pub second: SectionRange,
}

impl Assignment {
    pub fn one_contains_other(&self) -> bool {
        self.first.contains(&self.second) || self.second.contains(&self.first)
    }

    pub fn overlapping(&self) -> bool {
        self.first.overlaps(&self.second)
    }
}
