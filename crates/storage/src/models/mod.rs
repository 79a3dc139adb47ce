pub mod bowler;
pub mod event;
pub mod gender;
pub mod participation;

pub use bowler::{Bowler, NewBowler};
pub use event::{Event, EventKey, EventName, NewEvent};
pub use gender::Gender;
pub use participation::Participation;

use crate::error::InvalidEnum;

/// Case-insensitive lookup of `value` in a fixed name table.
fn lookup<T: Copy>(
    table: &[(&'static str, T)],
    kind: &'static str,
    value: &str,
) -> Result<T, InvalidEnum> {
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(value))
        .map(|(_, variant)| *variant)
        .ok_or_else(|| InvalidEnum {
            kind,
            value: value.to_string(),
        })
}
