pub mod attendance_state;
pub mod coordinates;
pub mod facts;
pub mod movement;
pub mod profile;
