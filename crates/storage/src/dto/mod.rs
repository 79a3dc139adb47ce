pub mod bowler;
pub mod enrollment;
pub mod event;
pub mod roster;
