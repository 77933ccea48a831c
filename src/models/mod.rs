mod notification;
mod series_store;

pub use notification::{AlertLevel, Notification, NotificationCenter, NotificationId};
pub use series_store::SeriesStore;
