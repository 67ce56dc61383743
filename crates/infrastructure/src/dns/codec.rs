//! Wire codec for single-question DNS queries (RFC 1035 §4.1).
//!
//! Decoding keeps the exact question bytes so a response can echo them
//! unchanged. Compressed names in the question are rejected.

use forge_dns_domain::{parse_dotted_quad, DomainError};
use std::net::Ipv4Addr;

pub const HEADER_LEN: usize = 12;
pub const MAX_LABEL_LEN: usize = 63;
/// Encoded name length limit, terminator included.
pub const MAX_NAME_LEN: usize = 255;

pub const TYPE_A: u16 = 1;
pub const CLASS_IN: u16 = 1;

/// Compression pointer to offset 12, where the question name always starts.
pub const QUESTION_NAME_POINTER: u16 = 0xC00C;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    fn read(buf: &[u8]) -> Result<Self, DomainError> {
        if buf.len() < HEADER_LEN {
            return Err(DomainError::MalformedPacket(format!(
                "{} bytes is shorter than the {}-byte header",
                buf.len(),
                HEADER_LEN
            )));
        }

        let field = |i: usize| u16::from_be_bytes([buf[i], buf[i + 1]]);

        Ok(Self {
            id: field(0),
            flags: field(2),
            question_count: field(4),
            answer_count: field(6),
            authority_count: field(8),
            additional_count: field(10),
        })
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.id.to_be_bytes());
        out.extend_from_slice(&self.flags.to_be_bytes());
        out.extend_from_slice(&self.question_count.to_be_bytes());
        out.extend_from_slice(&self.answer_count.to_be_bytes());
        out.extend_from_slice(&self.authority_count.to_be_bytes());
        out.extend_from_slice(&self.additional_count.to_be_bytes());
    }
}

/// A question name in both dotted and encoded form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryName {
    dotted: String,
    /// Label-length-prefixed bytes including the zero terminator.
    raw: Vec<u8>,
}

impl QueryName {
    /// Returns the dotted name (e.g. `"example.com"`, no trailing dot).
    pub fn as_str(&self) -> &str {
        &self.dotted
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Walks labels starting at `start`, returning the name and the offset
    /// just past its terminator.
    fn read(buf: &[u8], start: usize) -> Result<(Self, usize), DomainError> {
        let mut dotted = String::new();
        let mut pos = start;
        let mut first_label = true;

        loop {
            let Some(&len_byte) = buf.get(pos) else {
                return Err(DomainError::MalformedPacket(
                    "question name is missing its terminator".to_string(),
                ));
            };
            pos += 1;

            if len_byte == 0 {
                break;
            }

            if len_byte & 0xC0 != 0 {
                return Err(DomainError::MalformedPacket(format!(
                    "unsupported label type 0x{:02x} at offset {}",
                    len_byte,
                    pos - 1
                )));
            }

            let label_len = len_byte as usize;
            let end = pos + label_len;
            if end > buf.len() {
                return Err(DomainError::MalformedPacket(format!(
                    "label of {} bytes at offset {} runs past the end of the packet",
                    label_len,
                    pos - 1
                )));
            }
            if end - start + 1 > MAX_NAME_LEN {
                return Err(DomainError::MalformedPacket(format!(
                    "question name exceeds {} bytes",
                    MAX_NAME_LEN
                )));
            }

            if !first_label {
                dotted.push('.');
            }
            first_label = false;
            dotted.extend(buf[pos..end].iter().map(|&b| char::from(b)));
            pos = end;
        }

        let raw = buf[start..pos].to_vec();
        Ok((Self { dotted, raw }, pos))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: QueryName,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn is_address_query(&self) -> bool {
        self.qtype == TYPE_A
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.name.raw());
        out.extend_from_slice(&self.qtype.to_be_bytes());
        out.extend_from_slice(&self.qclass.to_be_bytes());
    }
}

/// An IPv4 resource record whose owner name points back at the question.
///
/// Usable for the authority and additional sections as well, although only
/// the answer section is ever populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord {
    pub name_ref: u16,
    pub rtype: u16,
    pub class: u16,
    pub ttl: u32,
    pub address: Ipv4Addr,
}

impl AnswerRecord {
    pub const ENCODED_LEN: usize = 16;
    const RDLENGTH: u16 = 4;

    pub fn new(address: Ipv4Addr, ttl: u32) -> Self {
        Self {
            name_ref: QUESTION_NAME_POINTER,
            rtype: TYPE_A,
            class: CLASS_IN,
            ttl,
            address,
        }
    }

    /// Builds a record from a dotted-quad string, failing with
    /// [`DomainError::InvalidAddress`] when it does not parse.
    pub fn from_dotted(address: &str, ttl: u32) -> Result<Self, DomainError> {
        Ok(Self::new(parse_dotted_quad(address)?, ttl))
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.name_ref.to_be_bytes());
        out.extend_from_slice(&self.rtype.to_be_bytes());
        out.extend_from_slice(&self.class.to_be_bytes());
        out.extend_from_slice(&self.ttl.to_be_bytes());
        out.extend_from_slice(&Self::RDLENGTH.to_be_bytes());
        out.extend_from_slice(&self.address.octets());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub question: Question,
    pub answer: Option<AnswerRecord>,
}

impl Message {
    /// Parses the header and the single question of a query datagram.
    ///
    /// Anything after the question (authority, additional, EDNS OPT) is
    /// ignored.
    pub fn decode(buf: &[u8]) -> Result<Self, DomainError> {
        let header = Header::read(buf)?;

        if header.question_count != 1 {
            return Err(DomainError::MalformedPacket(format!(
                "expected exactly one question, found {}",
                header.question_count
            )));
        }

        let (name, pos) = QueryName::read(buf, HEADER_LEN)?;

        if pos + 4 > buf.len() {
            return Err(DomainError::MalformedPacket(format!(
                "{} bytes left for question type/class, need 4",
                buf.len() - pos
            )));
        }
        let qtype = u16::from_be_bytes([buf[pos], buf[pos + 1]]);
        let qclass = u16::from_be_bytes([buf[pos + 2], buf[pos + 3]]);

        Ok(Self {
            header,
            question: Question {
                name,
                qtype,
                qclass,
            },
            answer: None,
        })
    }

    /// Serializes header, echoed question and the answer record if present.
    pub fn encode(&self) -> Vec<u8> {
        let answer_len = if self.answer.is_some() {
            AnswerRecord::ENCODED_LEN
        } else {
            0
        };
        let mut out =
            Vec::with_capacity(HEADER_LEN + self.question.name.raw().len() + 4 + answer_len);

        self.header.write(&mut out);
        self.question.write(&mut out);
        if let Some(ref answer) = self.answer {
            answer.write(&mut out);
        }

        out
    }
}
