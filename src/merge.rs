use itertools::Itertools;

use crate::coordinates::StationCoordinates;

/// Merges two result sets (typically resolved by code, then by DOMES number).
/// Output is sorted by site identity and holds a single entry per identity:
/// the first one encountered, `lhs` coming before `rhs`.
pub fn merge(lhs: Vec<StationCoordinates>, rhs: Vec<StationCoordinates>) -> Vec<StationCoordinates> {
    lhs.into_iter()
        .chain(rhs)
        .sorted_by(|a, b| a.site.cmp(&b.site))
        .coalesce(|a, b| if a.site == b.site { Ok(a) } else { Err((a, b)) })
        .collect()
}
