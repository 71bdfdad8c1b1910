//! Day-view time grid for the schedule.
//!
//! Pure layout: a linear mapping from time of day to a rem offset down the
//! ruler. Appointment blocks are positioned absolutely; overlapping
//! appointments are drawn as-is, there is no collision handling.

use api::Schedule;
use chrono::Timelike;
use dioxus::prelude::*;

/// First visible hour of the ruler.
pub const GRID_START_HOUR: u32 = 7;
/// Last visible hour of the ruler (inclusive gridline).
pub const GRID_END_HOUR: u32 = 23;
/// Vertical scale of the grid.
pub const REM_PER_HOUR: f64 = 4.0;

/// Distance in rem from the top of the grid to a point in time.
pub fn hour_offset_rem(hour: u32, minute: u32, start_hour: u32, rem_per_hour: f64) -> f64 {
    (hour as f64 + minute as f64 / 60.0 - start_hour as f64) * rem_per_hour
}

/// Height in rem of a block lasting `duration_min` minutes.
pub fn duration_height_rem(duration_min: u32, rem_per_hour: f64) -> f64 {
    duration_min as f64 / 60.0 * rem_per_hour
}

/// The schedule day view: an hour ruler with one positioned block per
/// appointment. Blocks starting outside the visible range are clamped to
/// the ruler's edge rather than hidden.
#[component]
pub fn DayGrid(appointments: Vec<Schedule>, on_select: EventHandler<i64>) -> Element {
    let total_height = (GRID_END_HOUR - GRID_START_HOUR) as f64 * REM_PER_HOUR;

    rsx! {
        div {
            class: "day-grid",
            style: "height: {total_height}rem;",

            // Hour ruler
            for hour in GRID_START_HOUR..=GRID_END_HOUR {
                div {
                    key: "{hour}",
                    class: "day-grid-hour",
                    style: {
                        let top = hour_offset_rem(hour, 0, GRID_START_HOUR, REM_PER_HOUR);
                        format!("top: {top}rem;")
                    },
                    span { class: "day-grid-hour-label", "{hour:02}:00" }
                }
            }

            // Appointment blocks
            for appointment in appointments {
                {
                    let top = hour_offset_rem(
                        appointment.time.hour(),
                        appointment.time.minute(),
                        GRID_START_HOUR,
                        REM_PER_HOUR,
                    )
                    .max(0.0);
                    let height = duration_height_rem(appointment.duration_min, REM_PER_HOUR);
                    let id = appointment.id;
                    let name = appointment
                        .client
                        .as_ref()
                        .map(|c| c.full_name())
                        .unwrap_or_else(|| format!("Cliente #{}", appointment.client_id));
                    let start = appointment.time.format("%H:%M");
                    rsx! {
                        div {
                            key: "{id}",
                            class: "day-grid-block",
                            style: "top: {top}rem; height: {height}rem;",
                            onclick: move |_| on_select.call(id),
                            span { class: "day-grid-block-time", "{start}" }
                            span { class: "day-grid-block-name", "{name}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_maps_time_linearly() {
        // 14:30 on a 07:00 grid at 4 rem/hour sits 30rem down.
        assert_eq!(hour_offset_rem(14, 30, GRID_START_HOUR, REM_PER_HOUR), 30.0);
        // The grid origin is 07:00 itself.
        assert_eq!(hour_offset_rem(7, 0, GRID_START_HOUR, REM_PER_HOUR), 0.0);
    }

    #[test]
    fn test_height_follows_duration() {
        assert_eq!(duration_height_rem(60, REM_PER_HOUR), 4.0);
        assert_eq!(duration_height_rem(45, REM_PER_HOUR), 3.0);
        assert_eq!(duration_height_rem(90, REM_PER_HOUR), 6.0);
    }
}
