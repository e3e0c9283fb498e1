//! Forecasting domain models.
//!
//! Value types for describing a team's capacity and backlog, and the
//! schedule the engine produces from them.
//!
//! # Domain Mappings
//!
//! | u-forecast | Product planning | Services | Manufacturing |
//! |------------|------------------|----------|---------------|
//! | CapacityProfile | Team velocity | Billable hours | Line throughput |
//! | WorkItem | Epic/Feature | Engagement | Order |
//! | TeamSchedule | Roadmap | Staffing plan | Production plan |

mod capacity;
mod month;
mod schedule;
mod work_item;

pub use capacity::{capacity_for, CapacityProfile};
pub use month::CalendarMonth;
pub use schedule::{ScheduledItem, TeamSchedule};
pub use work_item::WorkItem;
