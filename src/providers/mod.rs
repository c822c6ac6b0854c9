pub mod device;
pub mod location;
