//! Procurement workflow: requests, line items, approval chain, activity
//! history, documents, and vendor quotes.

pub mod procurement_activity;
pub mod procurement_approval;
pub mod procurement_document;
pub mod procurement_item;
pub mod procurement_request;
pub mod quote_item;
pub mod vendor_quote;

pub use procurement_request::Entity as ProcurementRequest;
pub use vendor_quote::Entity as VendorQuote;
