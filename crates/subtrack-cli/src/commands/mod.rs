pub mod between;
pub mod build;
pub mod describe;
pub mod next;
pub mod preview;
pub mod spend;
