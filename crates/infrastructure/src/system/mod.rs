pub mod interface;

pub use interface::{detect_local_ipv4, is_usable_interface_address};
