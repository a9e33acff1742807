//! Raft consensus and leadership signatures.

use crate::signatures::types::Signature;
use regex::Regex;

pub fn signatures() -> Vec<Signature> {
    vec![
        leader_election_lost(),
        stepping_down(),
        committed_index_term_boundary(),
        update_consensus_backpressure(),
        long_wait_for_safe_op_id(),
        leader_master_not_found(),
    ]
}

fn leader_election_lost() -> Signature {
    Signature {
        name: "Leader election lost",
        pattern: Regex::new(r"Leader election lost for term|FAILED_ELECTION").unwrap(),
        remediation: "Repeated lost elections usually mean peers cannot reach each other in \
            time.{br}{tab}Check inter-node latency and clock synchronization across the \
            cluster.{br}{tab}Raise {code}--leader_failure_max_missed_heartbeat_periods{ecode} \
            on high-latency links.{br}{tab}See \
            {link https://docs.yugabyte.com/preview/troubleshoot/cluster/replication/}",
    }
}

fn stepping_down() -> Signature {
    Signature {
        name: "Leader stepping down",
        pattern: Regex::new(r"Stepping down as leader of term").unwrap(),
        remediation: "A leader voluntarily stepped down, commonly after losing contact with a \
            majority of peers.{br}{tab}{b}Occasional{eb} step-downs during rolling restarts are \
            expected; {b}sustained{eb} step-downs indicate network instability or an overloaded \
            node.{br}{tab}Correlate with {i}Connection timed out{ei} and load signatures in the \
            same window.",
    }
}

fn committed_index_term_boundary() -> Signature {
    Signature {
        name: "Cannot advance committed index",
        pattern: Regex::new(r"Can't advance the committed index across term boundaries")
            .unwrap(),
        remediation: "The new leader is waiting to commit an operation from its own term before \
            older entries can be acknowledged.{br}{tab}Transient after leader changes; if it \
            persists, inspect the tablet's Raft status on the \
            {code}/tablet-consensus{ecode} page of the tserver web UI.",
    }
}

fn update_consensus_backpressure() -> Signature {
    Signature {
        name: "UpdateConsensus backpressure",
        pattern: Regex::new(r"UpdateConsensus.+dropped due to backpressure").unwrap(),
        remediation: "Replication RPCs are being shed because the service queue is full, so \
            followers fall further behind.{br}{tab}Raise \
            {code}--rpc_throttle_threshold_bytes{ecode} only after confirming the node is not \
            CPU or disk bound.{br}{tab}Persistent backpressure is an undersizing signal: \
            consider more tservers or faster disks.{br}{tab}See \
            {link https://docs.yugabyte.com/preview/troubleshoot/nodes/check-processes/}",
    }
}

fn long_wait_for_safe_op_id() -> Signature {
    Signature {
        name: "Long wait for safe op id",
        pattern: Regex::new(r"Long wait for safe op id").unwrap(),
        remediation: "Reads are stalling behind replication: the tablet waited a long time for \
            an op id to become safe.{br}{tab}Usually accompanies WAL fsync slowness or follower \
            lag.{br}{tab}Check disk write latency on this node and the \
            {i}Slow WAL fsync{ei} signature in the same period.",
    }
}

fn leader_master_not_found() -> Signature {
    Signature {
        name: "Could not locate the leader master",
        pattern: Regex::new(r"Could not locate the leader master").unwrap(),
        remediation: "The server cannot find a master leader.{br}{tab}Verify the \
            {code}--tserver_master_addrs{ecode} list matches the actual master placement, and \
            that a master quorum is up.{br}{tab}If masters were moved, update the flag on every \
            tserver and restart.{br}{tab}See \
            {link https://docs.yugabyte.com/preview/troubleshoot/cluster/recover_server/}",
    }
}
