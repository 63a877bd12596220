pub mod carousel;
pub mod effects;
pub mod stats;
pub mod tabs;
pub mod waitlist;
