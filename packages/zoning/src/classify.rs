//! Majority-vote zone classification from nearby labeled areas.

use parcelscope_zoning_models::{NearbyArea, ZoneType};

/// Infers the dominant zone type among nearby areas by majority vote.
///
/// Ties break toward the zone type that reached the winning tally first in
/// input order, so callers that care about tie behavior control it through
/// the order of `nearby`. No nearby areas means no signal: the result is
/// [`ZoneType::Residential`], the system-wide default.
#[must_use]
pub fn classify(nearby: &[NearbyArea]) -> ZoneType {
    if nearby.is_empty() {
        log::debug!("no nearby areas; defaulting zone classification to residential");
        return ZoneType::Residential;
    }

    // First-seen order so ties resolve deterministically for a given input.
    let mut tallies: Vec<(ZoneType, usize)> = Vec::new();
    for area in nearby {
        match tallies.iter_mut().find(|(zone, _)| *zone == area.zone_type) {
            Some((_, count)) => *count += 1,
            None => tallies.push((area.zone_type, 1)),
        }
    }

    let mut winner = tallies[0];
    for &(zone, count) in &tallies[1..] {
        if count > winner.1 {
            winner = (zone, count);
        }
    }

    log::debug!(
        "classified zone as {} from {} nearby areas",
        winner.0,
        nearby.len()
    );
    winner.0
}
