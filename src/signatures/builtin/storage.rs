//! WAL and RocksDB storage signatures.

use crate::signatures::types::Signature;
use regex::Regex;

pub fn signatures() -> Vec<Signature> {
    vec![
        sst_files_limit(),
        slow_wal_fsync(),
        slow_wal_append(),
        compaction_pending(),
        remote_bootstrap(),
    ]
}

fn sst_files_limit() -> Signature {
    Signature {
        name: "SST files limit exceeded",
        pattern: Regex::new(r"SST files limit exceeded").unwrap(),
        remediation: "Writes outpace compaction and the tablet accumulated too many SST \
            files.{br}{tab}Check for a cold or failing disk slowing compactions \
            down.{br}{tab}{code}--sst_files_hard_limit{ecode} and \
            {code}--rocksdb_compact_flush_rate_limit_bytes_per_sec{ecode} control the \
            ceiling and compaction throughput.{br}{tab}See \
            {link https://docs.yugabyte.com/preview/troubleshoot/nodes/check-disk-io/}",
    }
}

fn slow_wal_fsync() -> Signature {
    Signature {
        name: "Slow WAL fsync",
        pattern: Regex::new(r"Time spent Fsync log took a long time").unwrap(),
        remediation: "Flushing the write-ahead log to disk is slow.{br}{tab}Almost always a \
            disk problem: measure fsync latency with {code}ioping{ecode} on the WAL \
            volume.{br}{tab}Shared or network volumes behind the WAL are a common \
            culprit.",
    }
}

fn slow_wal_append() -> Signature {
    Signature {
        name: "Slow WAL append",
        pattern: Regex::new(r"Time spent Append to log took a long time").unwrap(),
        remediation: "Appending entries to the WAL is slow, which delays every write on the \
            tablet.{br}{tab}Inspect disk utilization and queue depth on the WAL volume; \
            pair with the {i}Slow WAL fsync{ei} signature to separate buffering from \
            flushing cost.",
    }
}

fn compaction_pending() -> Signature {
    Signature {
        name: "Compaction tasks piling up",
        pattern: Regex::new(r"Compaction tasks has been delayed|pending compaction").unwrap(),
        remediation: "Background compactions cannot keep up.{br}{tab}Verify \
            {code}--rocksdb_max_background_compactions{ecode} is not starving tablets on \
            large hosts.{br}{tab}Watch the tserver's compaction metrics before and after \
            tuning.",
    }
}

fn remote_bootstrap() -> Signature {
    Signature {
        name: "Remote bootstrap triggered",
        pattern: Regex::new(r"Remote bootstrap").unwrap(),
        remediation: "A replica fell too far behind the WAL retention window and is being \
            rebuilt wholesale from the leader.{br}{tab}Expected after long node outages; \
            unexpected occurrences point at WAL retention being too short \
            ({code}--log_min_seconds_to_retain{ecode}) or chronic follower \
            lag.{br}{tab}See \
            {link https://docs.yugabyte.com/preview/architecture/docdb-replication/replication/}",
    }
}
