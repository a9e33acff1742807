//! Connectivity and clock signatures.

use crate::signatures::types::Signature;
use regex::Regex;

pub fn signatures() -> Vec<Signature> {
    vec![
        connection_refused(),
        connection_timed_out(),
        broken_pipe(),
        clock_skew(),
    ]
}

fn connection_refused() -> Signature {
    Signature {
        name: "Connection refused",
        pattern: Regex::new(r"Connection refused").unwrap(),
        remediation: "A peer actively refused the connection: the process on the far end is \
            down or listening elsewhere.{br}{tab}Confirm the peer process is running and that \
            its bind address matches what this node dials.{br}{tab}See \
            {link https://docs.yugabyte.com/preview/troubleshoot/cluster/connect/}",
    }
}

fn connection_timed_out() -> Signature {
    Signature {
        name: "Connection timed out",
        pattern: Regex::new(r"Connection timed out|Timed out: .+ passed its deadline").unwrap(),
        remediation: "RPCs are timing out rather than being refused, which points at the \
            network path or an overloaded peer.{br}{tab}Check firewall rules and packet loss \
            between the nodes involved.{br}{tab}Sustained timeouts alongside consensus \
            signatures usually precede leader churn.",
    }
}

fn broken_pipe() -> Signature {
    Signature {
        name: "Broken pipe",
        pattern: Regex::new(r"Broken pipe").unwrap(),
        remediation: "An established connection was torn down mid-write.{br}{tab}Common \
            during rolling restarts; outside of those, look for flapping NICs, aggressive \
            idle-connection reaping on load balancers, or OOM-killed peers.",
    }
}

fn clock_skew() -> Signature {
    Signature {
        name: "Clock skew detected",
        pattern: Regex::new(r"Too big clock skew is detected").unwrap(),
        remediation: "Hybrid time requires tightly synchronized clocks; this node saw skew \
            beyond {code}--max_clock_skew_usec{ecode}.{br}{tab}{b}Fix NTP/chrony first{eb}; \
            raising the flag only hides the problem and hurts read \
            latency.{br}{tab}See \
            {link https://docs.yugabyte.com/preview/deploy/manual-deployment/system-config/}",
    }
}
