use crate::entities::*;
use std::cmp::Ordering;

/// Selects all locations within `max_distance` of `reference`,
/// nearest first.
///
/// Locations without a valid position never match. Locations
/// with equal distances keep the order of `candidates`.
pub fn filter_nearby<I>(
    reference: MapPoint,
    candidates: I,
    max_distance: Distance,
) -> Vec<(Location, Distance)>
where
    I: IntoIterator<Item = Location>,
{
    let mut nearby: Vec<_> = candidates
        .into_iter()
        .filter_map(|location| {
            let pos = location.pos.filter(|pos| pos.is_valid())?;
            let distance = MapPoint::distance(reference, pos)?;
            (distance <= max_distance).then_some((location, distance))
        })
        .collect();
    nearby.sort_by(|(_, lhs), (_, rhs)| lhs.partial_cmp(rhs).unwrap_or(Ordering::Equal));
    nearby
}
