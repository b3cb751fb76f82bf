//! Result shapes returned by the gateway routes.
//!
//! - `mcstatus`: opaque pass-through of the upstream Minecraft status object
//! - `website` : up/down classification of a fetched URL
//! - `sysinfo` : host metric snapshot (cpu temp, cpu load, ram usage)

pub mod mcstatus;
pub mod sysinfo;
pub mod website;

pub use mcstatus::McStatus;
pub use sysinfo::{MemorySnapshot, SysInfo};
pub use website::WebsiteStatus;
