pub mod dns;
pub mod probe;
pub mod system;
