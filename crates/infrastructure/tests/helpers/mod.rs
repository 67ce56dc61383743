#![allow(dead_code)]

mod upstream;

pub use upstream::{FailingUpstream, FixedUpstream};

use forge_dns_application::use_cases::ResolveNameUseCase;
use forge_dns_domain::NameTable;
use forge_dns_infrastructure::dns::{DnsServerHandler, ResponseOptions};
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Builds a single-question query with RD set and no additional records.
pub fn build_query(id: u16, domain: &str, qtype: u16) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&id.to_be_bytes());
    buf.extend_from_slice(&[0x01, 0x00]); // flags: RD set
    buf.extend_from_slice(&[0x00, 0x01]); // QDCOUNT = 1
    buf.extend_from_slice(&[0x00, 0x00]); // ANCOUNT = 0
    buf.extend_from_slice(&[0x00, 0x00]); // NSCOUNT = 0
    buf.extend_from_slice(&[0x00, 0x00]); // ARCOUNT = 0
    buf.extend_from_slice(&encode_name(domain));
    buf.extend_from_slice(&qtype.to_be_bytes());
    buf.extend_from_slice(&[0x00, 0x01]); // QCLASS = IN
    buf
}

pub fn build_a_query(id: u16, domain: &str) -> Vec<u8> {
    build_query(id, domain, 1)
}

pub fn encode_name(domain: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in domain.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0x00); // root label
    out
}

/// Appends an EDNS0 OPT record and bumps ARCOUNT, as `dig` does by default.
pub fn append_opt_record(buf: &mut Vec<u8>) {
    buf[11] += 1;
    buf.push(0x00); // NAME = root
    buf.extend_from_slice(&[0x00, 41]); // TYPE = OPT
    buf.extend_from_slice(&[0x10, 0x00]); // CLASS = 4096 (UDP payload size)
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // extended RCODE, version, flags
    buf.extend_from_slice(&[0x00, 0x00]); // RDLEN = 0
}

pub fn table(entries: &[(&str, &str)]) -> Arc<NameTable> {
    let mut builder = NameTable::builder();
    for (name, address) in entries {
        builder.bind(name, address).unwrap();
    }
    Arc::new(builder.build())
}

pub fn make_handler(entries: &[(&str, &str)], options: ResponseOptions) -> DnsServerHandler {
    let use_case = ResolveNameUseCase::new(table(entries), Arc::new(FailingUpstream));
    DnsServerHandler::new(Arc::new(use_case), options)
}

pub fn make_handler_with_upstream(
    entries: &[(&str, &str)],
    upstream_answer: Ipv4Addr,
    options: ResponseOptions,
) -> DnsServerHandler {
    let use_case = ResolveNameUseCase::new(table(entries), Arc::new(FixedUpstream(upstream_answer)));
    DnsServerHandler::new(Arc::new(use_case), options)
}
