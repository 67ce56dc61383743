use super::codec::{AnswerRecord, Message};
use forge_dns_domain::{Resolution, UnresolvedResponse};

/// QR, RD and RA set, rcode NOERROR.
pub const RESPONSE_FLAGS: u16 = 0x8180;
/// QR, RD and RA set, rcode NXDOMAIN.
pub const NAME_ERROR_FLAGS: u16 = 0x8183;

pub const DEFAULT_ANSWER_TTL: u32 = 190;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseOptions {
    pub ttl: u32,
    pub unresolved: UnresolvedResponse,
}

impl Default for ResponseOptions {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_ANSWER_TTL,
            unresolved: UnresolvedResponse::default(),
        }
    }
}

/// Turns a decoded A query into the response message for `resolution`.
///
/// The question is carried over untouched. Authority and additional counts
/// are cleared because those sections are never echoed back.
pub fn assemble(query: &Message, resolution: &Resolution, options: &ResponseOptions) -> Message {
    let mut response = query.clone();
    response.header.authority_count = 0;
    response.header.additional_count = 0;

    match resolution.address {
        Some(address) => {
            response.header.flags = RESPONSE_FLAGS;
            response.header.answer_count = 1;
            response.answer = Some(AnswerRecord::new(address, options.ttl));
        }
        None => {
            response.header.answer_count = 0;
            response.answer = None;
            if options.unresolved == UnresolvedResponse::NameError {
                response.header.flags = NAME_ERROR_FLAGS;
            }
        }
    }

    response
}
