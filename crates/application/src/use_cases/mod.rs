//! Application use cases (business logic orchestration).

mod render_request;

pub use render_request::*;
