pub mod http;

pub use http::{render_response, select_body, ProbeResponder};
