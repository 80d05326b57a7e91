//! Text rendition of the mine profile: one lane per truck, the marker placed
//! at the truck's route progress and coloured by status.

use crate::models::{Truck, TruckStatus};
use crate::utils::colors::{dim, paint_status};

/// Characters between the lane fences; covers progress 0..100.
pub const TRACK_WIDTH: usize = 50;

fn marker(status: TruckStatus) -> char {
    if status.is_at_shovel() {
        '■'
    } else if status.is_hauling() {
        '▶'
    } else {
        '▷'
    }
}

/// Track column for a progress value.
pub fn lane_position(progress: f64) -> usize {
    let col = (progress.max(0.0) / 100.0 * TRACK_WIDTH as f64).floor() as usize;
    col.min(TRACK_WIDTH - 1)
}

pub fn render_lane(truck: &Truck, color: bool) -> String {
    let pos = lane_position(truck.progress);
    let mark = paint_status(truck.status, &marker(truck.status).to_string(), color);

    let before = dim(&"·".repeat(pos), color);
    let after = dim(&"·".repeat(TRACK_WIDTH - pos - 1), color);

    format!(
        "{} |{}{}{}| {:>5.1}%  {}",
        paint_status(truck.status, &truck.id, color),
        before,
        mark,
        after,
        truck.progress,
        truck.status
    )
}

pub fn render_profile(trucks: &[Truck], color: bool) -> String {
    let mut out = String::new();

    out.push_str("Mine Profile - Truck Movement\n");
    for truck in trucks {
        out.push_str(&render_lane(truck, color));
        out.push('\n');
    }

    out.push_str(&format!(
        "    0%{}100%  Route Progress (%)\n",
        " ".repeat(TRACK_WIDTH - 4)
    ));
    out.push_str(&legend(color));
    out.push('\n');
    out
}

fn legend(color: bool) -> String {
    [TruckStatus::Loading, TruckStatus::Loaded, TruckStatus::Empty]
        .iter()
        .map(|s| {
            paint_status(
                *s,
                &format!("{} {}", marker(*s), s.ts_as_str()),
                color,
            )
        })
        .collect::<Vec<_>>()
        .join("   ")
}

/// "loading: 3 | loaded: 8 | empty: 3"
pub fn fleet_summary(trucks: &[Truck]) -> String {
    let count = |s: TruckStatus| trucks.iter().filter(|t| t.status == s).count();
    format!(
        "loading: {} | loaded: {} | empty: {}",
        count(TruckStatus::Loading),
        count(TruckStatus::Loaded),
        count(TruckStatus::Empty)
    )
}
