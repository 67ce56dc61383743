pub mod codec;
pub mod server;
pub mod system_resolver;
pub mod udp_listener;
pub mod wire_response;

pub use codec::{AnswerRecord, Header, Message, QueryName, Question};
pub use server::DnsServerHandler;
pub use system_resolver::SystemResolver;
pub use udp_listener::UdpResponder;
pub use wire_response::{assemble, ResponseOptions};
