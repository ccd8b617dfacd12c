mod contact;
mod service;

pub use contact::{ContactMessage, ContactSubmission, NewContact};
pub use service::{NewService, ServiceOffering, DEFAULT_SERVICES};
