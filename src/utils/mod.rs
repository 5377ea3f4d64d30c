// Tue Jan 13 2026 - Alex

pub mod hex;
pub mod logging;
