pub mod common;
pub mod icon;
pub mod lead_form;
pub mod notifications;
pub mod pages;
pub mod sections;

pub use icon::{Icon, icons};
pub use lead_form::LeadForm;
pub use notifications::{
    NotificationManager, NotificationsContainer, provide_notifications, use_notifications,
};
