//! Site identification: 4 character code and DOMES number
use gnss::prelude::DOMES;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Code field width
pub const CODE_LEN: usize = 4;

/// DOMES number width
pub const DOMES_LEN: usize = 9;

/// [SiteId] identifies a station in a catalog, by its
/// 4 character code and 9 character DOMES number.
/// Its composite form is `CODE DOMES` (14 characters), which also
/// defines the ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SiteId {
    code: String,
    domes: String,
}

/// Fixed width, blank padded copy of `content`
fn fixed_width(content: &str, width: usize) -> String {
    let mut s: String = content.chars().take(width).collect();
    let len = s.chars().count();
    s.extend(std::iter::repeat(' ').take(width - len));
    s
}

impl SiteId {
    /// Builds a new [SiteId]. Both fields are
    /// blank padded (or truncated) to their fixed width.
    pub fn new(code: &str, domes: &str) -> Self {
        Self {
            code: fixed_width(code, CODE_LEN),
            domes: fixed_width(domes, DOMES_LEN),
        }
    }
    /// Site code (4 characters)
    pub fn code(&self) -> &str {
        &self.code
    }
    /// DOMES number (9 characters)
    pub fn domes(&self) -> &str {
        &self.domes
    }
    /// Interprets DOMES number field
    pub fn domes_number(&self) -> Option<DOMES> {
        DOMES::from_str(self.domes.trim()).ok()
    }
    /// Normalizes a user request into the composite layout.
    /// With [Matching::Code], the request is a site code (possibly
    /// a full `CODE DOMES` descriptor, only the code is retained for matching).
    /// With [Matching::Domes], the request is a bare DOMES number,
    /// which is shifted by 5 positions, past the (blank) code field.
    pub fn from_request(request: &str, matching: Matching) -> Self {
        let request = request.trim();
        match matching {
            Matching::Code => {
                let code = request.to_uppercase();
                match code.split_once(' ') {
                    Some((code, domes)) => Self::new(code, domes.trim()),
                    None => Self::new(&code, ""),
                }
            },
            Matching::Domes => Self::new("", request),
        }
    }
}

impl std::fmt::Display for SiteId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.code, self.domes)
    }
}

/// [Matching] selects which projection of the [SiteId]
/// is compared when looking up requested sites.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Matching {
    /// Compare 4 character codes
    #[default]
    Code,
    /// Compare DOMES numbers
    Domes,
}

impl Matching {
    /// Returns true if both sites share the selected projection
    pub fn matches(&self, lhs: &SiteId, rhs: &SiteId) -> bool {
        match self {
            Self::Code => lhs.code == rhs.code,
            Self::Domes => lhs.domes == rhs.domes,
        }
    }
}
