use anyhow::Context;
use forge_dns_domain::config::RecordBinding;
use forge_dns_domain::NameTable;
use std::net::Ipv4Addr;
use tracing::info;

/// Seeds the name table. Records without an address resolve to `self_address`.
pub fn build_name_table(
    records: &[RecordBinding],
    self_address: Ipv4Addr,
) -> anyhow::Result<NameTable> {
    let mut builder = NameTable::builder();

    for record in records {
        let address = record
            .resolve_address(self_address)
            .with_context(|| format!("Record '{}'", record.name))?;
        builder.bind_addr(&record.name, address);
        info!(name = %record.name, address = %address, "Bound name");
    }

    let table = builder.build();
    info!(entries = table.len(), wildcard = ?table.wildcard(), "Name table ready");
    Ok(table)
}
