use crate::error::Result;
use crate::models::{EventName, Gender, NewEvent};

/// Divisions each event name is held in
pub const DIVISIONS: std::ops::RangeInclusive<i32> = 1..=6;

/// The events a tournament is seeded with: one Mixed event per division and,
/// for every other event name, one event per division and gender.
pub fn standard_events() -> Result<Vec<NewEvent>> {
    let mut events = Vec::new();

    for event_name in EventName::ALL {
        for division in DIVISIONS {
            if event_name.is_gendered() {
                for gender in Gender::ALL {
                    events.push(NewEvent::new(event_name, division, Some(gender))?);
                }
            } else {
                events.push(NewEvent::new(event_name, division, None)?);
            }
        }
    }

    Ok(events)
}
