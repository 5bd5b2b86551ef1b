pub mod context;
pub mod error;
pub mod inventory;
pub mod logs;
pub mod metrics;
pub mod traits;
