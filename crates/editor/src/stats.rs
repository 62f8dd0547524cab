//! Seat and revenue statistics for the preview panel

use std::collections::BTreeMap;

use serde::Serialize;

use crate::state::categories::CategoryRegistry;
use crate::state::scene::SceneState;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeatStats {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    /// Occupied share of all seats, 0.0 when there are none
    pub occupancy_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub id: String,
    pub name: String,
    pub seats: usize,
    pub revenue: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SceneStats {
    pub seats: SeatStats,
    /// One entry per registered category, in registry order
    pub categories: Vec<CategoryStats>,
    /// Sum of effective seat prices
    pub total_revenue: f64,
    /// Entity count per kind, nested entities included
    pub counts: BTreeMap<String, usize>,
}

/// Walk the whole scene, group children included.
///
/// Seats with an unknown category count toward the default category.
pub fn scene_stats(scene: &SceneState, categories: &CategoryRegistry) -> SceneStats {
    let mut stats = SceneStats {
        categories: categories
            .all()
            .iter()
            .map(|c| CategoryStats {
                id: c.id.clone(),
                name: c.name.clone(),
                seats: 0,
                revenue: 0.0,
            })
            .collect(),
        ..Default::default()
    };

    scene.visit(&mut |entity| {
        *stats.counts.entry(entity.kind().as_str().to_string()).or_default() += 1;

        let Some(seat) = entity.seat() else {
            return;
        };
        let category = categories.resolve(&seat.category_id);
        let price = seat.price_override.unwrap_or(category.price);

        stats.seats.total += 1;
        if seat.is_available {
            stats.seats.available += 1;
        } else {
            stats.seats.occupied += 1;
        }
        stats.total_revenue += price;
        if let Some(entry) = stats.categories.iter_mut().find(|c| c.id == category.id) {
            entry.seats += 1;
            entry.revenue += price;
        }
    });

    if stats.seats.total > 0 {
        stats.seats.occupancy_rate = stats.seats.occupied as f64 / stats.seats.total as f64;
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{group_of, scene_of, seat_with as seat, stage_at};

    #[test]
    fn test_empty_scene() {
        let stats = scene_stats(&SceneState::default(), &CategoryRegistry::default());
        assert_eq!(stats.seats, SeatStats::default());
        assert_eq!(stats.categories.len(), 3);
        assert_eq!(stats.total_revenue, 0.0);
    }

    #[test]
    fn test_totals_include_nested_seats() {
        let scene = scene_of(vec![
            seat("a", "vip", true, None),
            seat("b", "class-b", false, Some(10.0)),
            group_of("row", vec![seat("c", "class-a", true, None), seat("d", "gone", false, None)]),
            stage_at("s", 0.0, 0.0),
        ]);
        let stats = scene_stats(&scene, &CategoryRegistry::default());

        assert_eq!(stats.seats.total, 4);
        assert_eq!(stats.seats.available, 2);
        assert_eq!(stats.seats.occupied, 2);
        assert_eq!(stats.seats.occupancy_rate, 0.5);
        // 35 + 10 + 25 + 35 (unknown category falls back to vip)
        assert_eq!(stats.total_revenue, 105.0);

        let vip = &stats.categories[0];
        assert_eq!((vip.seats, vip.revenue), (2, 70.0));
        assert_eq!(stats.categories[2].revenue, 10.0);

        assert_eq!(stats.counts["seat"], 4);
        assert_eq!(stats.counts["generic-group"], 1);
        assert_eq!(stats.counts["stage"], 1);
    }
}
