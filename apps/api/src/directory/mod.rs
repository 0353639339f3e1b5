// Chef directory: resume accessor, filtering, pagination and contact masking,
// plus the HTTP handlers that serve them.

pub mod accessor;
pub mod filter;
pub mod handlers;
pub mod masking;
pub mod pagination;
pub mod sources;
