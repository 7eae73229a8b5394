//! IT help-desk requests and their approval, comment, attachment,
//! escalation and history tables.

pub mod it_request;
pub mod request_action;
pub mod request_approval;
pub mod request_attachment;
pub mod request_comment;
pub mod request_escalation;

pub use it_request::Entity as ItRequest;
