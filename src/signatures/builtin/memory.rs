//! Memory pressure signatures.

use crate::signatures::types::Signature;
use regex::Regex;

pub fn signatures() -> Vec<Signature> {
    vec![
        soft_memory_limit(),
        operation_memory_limit(),
        write_rejected_memory(),
    ]
}

fn soft_memory_limit() -> Signature {
    Signature {
        name: "Soft memory limit exceeded",
        pattern: Regex::new(r"Soft memory limit exceeded").unwrap(),
        remediation: "The process crossed its soft memory limit and is throttling \
            work.{br}{tab}Check {code}--memory_limit_hard_bytes{ecode} and \
            {code}--default_memory_limit_to_ram_ratio{ecode} against the host's \
            RAM.{br}{tab}Frequent hits mean the node needs more memory or fewer \
            tablets.{br}{tab}See \
            {link https://docs.yugabyte.com/preview/troubleshoot/nodes/check-memory/}",
    }
}

fn operation_memory_limit() -> Signature {
    Signature {
        name: "Operation memory consumption exceeded limit",
        pattern: Regex::new(r"memory consumption has exceeded its limit").unwrap(),
        remediation: "A single operation tripped the per-tablet memory \
            tracker.{br}{tab}Large batched writes are the usual cause; shrink the batch size \
            on the client.{br}{tab}{code}--tablet_operation_memory_limit_mb{ecode} can be \
            raised when hosts have headroom.",
    }
}

fn write_rejected_memory() -> Signature {
    Signature {
        name: "Write rejected under memory pressure",
        pattern: Regex::new(r"Rejecting Write request").unwrap(),
        remediation: "The tserver is shedding writes to protect itself; clients should retry \
            with backoff.{br}{tab}Look at the companion signature on the same lines ({i}Soft \
            memory limit exceeded{ei} or {i}SST files limit exceeded{ei}) for the underlying \
            resource.{br}{tab}If rejections persist, rebalance tablets or add capacity.",
    }
}
