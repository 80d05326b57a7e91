//! Colour helpers for terminal output.

use crate::models::TruckStatus;
use ansi_term::Colour;

pub fn status_colour(status: TruckStatus) -> Colour {
    match status {
        TruckStatus::Loading => Colour::RGB(255, 153, 51), // orange
        TruckStatus::Loaded => Colour::Green,
        TruckStatus::Empty => Colour::Yellow,
    }
}

/// Paint `text` in the colour of `status`, or return it unchanged when colour is off.
pub fn paint_status(status: TruckStatus, text: &str, enabled: bool) -> String {
    if enabled {
        status_colour(status).paint(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn dim(text: &str, enabled: bool) -> String {
    if enabled {
        Colour::Fixed(244).paint(text).to_string()
    } else {
        text.to_string()
    }
}
