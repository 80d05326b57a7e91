//! Truck state-transition rule.
//!
//! Each refresh advances every truck along its round trip by a random amount
//! and derives status, payload and speed from the band the new progress falls
//! into:
//!
//! | progress        | status    | weight (t)          | speed (km/h) |
//! |-----------------|-----------|---------------------|--------------|
//! | `< 10`          | `loading` | uniform `[5, 15)`   | 0            |
//! | `10 ..< 60`     | `loaded`  | 19.59               | `[18, 25]`   |
//! | `60 ..< 90`     | `empty`   | 0                   | `[18, 25]`   |
//! | `>= 90`         | wrap: progress back to 0, see [`WrapPolicy`] |

use crate::core::haul_log::HaulLog;
use crate::core::rng::SimRandom;
use crate::errors::{AppError, AppResult};
use crate::models::{LogRecord, Truck, TruckStatus, WrapPolicy};
use crate::utils::formatting::round2;
use chrono::NaiveTime;
use std::fmt::Write;

pub const TIME_FORMAT: &str = "%H:%M:%S";

pub const INCREMENT_MIN: f64 = 3.0;
pub const INCREMENT_MAX: f64 = 7.0;

pub const LOADING_WEIGHT_MIN: f64 = 5.0;
pub const LOADING_WEIGHT_MAX: f64 = 15.0;
pub const LOADED_WEIGHT: f64 = 19.59;

pub const SPEED_MIN: u32 = 18;
pub const SPEED_MAX: u32 = 25;

pub const LOADING_END: f64 = 10.0;
pub const LOADED_END: f64 = 60.0;
pub const ROUTE_END: f64 = 90.0;

/// Band for a progress value, `None` once the truck has reached the end of the route.
pub fn band_for(progress: f64) -> Option<TruckStatus> {
    if progress < LOADING_END {
        Some(TruckStatus::Loading)
    } else if progress < LOADED_END {
        Some(TruckStatus::Loaded)
    } else if progress < ROUTE_END {
        Some(TruckStatus::Empty)
    } else {
        None
    }
}

/// Advance a single truck by one refresh.
pub fn advance_truck<R: SimRandom + ?Sized>(truck: &mut Truck, rng: &mut R, policy: WrapPolicy) {
    truck.progress += rng.uniform(INCREMENT_MIN, INCREMENT_MAX);

    match band_for(truck.progress) {
        Some(TruckStatus::Loading) => enter_loading(truck, rng),
        Some(TruckStatus::Loaded) => {
            truck.status = TruckStatus::Loaded;
            truck.weight = LOADED_WEIGHT;
            truck.speed = rng.int_inclusive(SPEED_MIN, SPEED_MAX);
        }
        Some(TruckStatus::Empty) => {
            truck.status = TruckStatus::Empty;
            truck.weight = 0.0;
            truck.speed = rng.int_inclusive(SPEED_MIN, SPEED_MAX);
        }
        None => {
            truck.progress = 0.0;
            if policy == WrapPolicy::Restart {
                enter_loading(truck, rng);
            }
        }
    }
}

fn enter_loading<R: SimRandom + ?Sized>(truck: &mut Truck, rng: &mut R) {
    truck.status = TruckStatus::Loading;
    truck.weight = round2(rng.uniform(LOADING_WEIGHT_MIN, LOADING_WEIGHT_MAX));
    truck.speed = 0;
}

/// Wall-clock stamp used in log records.
pub fn format_clock(now: NaiveTime) -> AppResult<String> {
    let mut out = String::new();
    write!(out, "{}", now.format(TIME_FORMAT)).map_err(|e| {
        log::error!("failed to format clock {now:?}: {e}");
        AppError::Clock(e.to_string())
    })?;
    Ok(out)
}

/// One simulation refresh over the whole fleet.
///
/// The clock is formatted before any truck moves, so a failure leaves the
/// fleet and the log untouched. Returns the number of records appended.
pub fn step<R: SimRandom + ?Sized>(
    trucks: &mut [Truck],
    log: &mut HaulLog,
    rng: &mut R,
    policy: WrapPolicy,
    shift_id: &str,
    now: NaiveTime,
) -> AppResult<usize> {
    let stamp = format_clock(now)?;

    for truck in trucks.iter_mut() {
        advance_truck(truck, rng, policy);
        log.push(LogRecord::capture(truck, &stamp, shift_id));
    }

    log::debug!("step at {stamp}: {} trucks advanced", trucks.len());
    Ok(trucks.len())
}
