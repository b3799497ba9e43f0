// libport100/src/device/mod.rs
//! Chipset command channel and the sensing session on top of it.

pub mod builder;
pub mod chipset;
pub mod handle;

pub use builder::DeviceBuilder;
pub use chipset::Chipset;
pub use handle::Device;
