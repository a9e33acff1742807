mod consensus;
mod memory;
mod network;
mod storage;

use crate::error::{Result, TriageError};
use crate::signatures::types::Signature;
use std::sync::LazyLock;

static CATALOG: LazyLock<Vec<Signature>> = LazyLock::new(|| {
    let mut signatures = Vec::with_capacity(20);
    signatures.extend(consensus::signatures());
    signatures.extend(memory::signatures());
    signatures.extend(storage::signatures());
    signatures.extend(network::signatures());
    signatures
});

/// All known signatures, in declaration order.
pub fn catalog() -> &'static [Signature] {
    &CATALOG
}

/// Find the catalog entry for a signature seen during analysis.
///
/// Every name recorded by the engine comes out of the catalog, so a miss
/// here is a catalog authoring bug, not a runtime condition.
pub fn lookup(name: &str) -> Result<&'static Signature> {
    catalog()
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| TriageError::UnknownSignature(name.to_string()))
}
