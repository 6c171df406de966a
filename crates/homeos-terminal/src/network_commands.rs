//! Simulated network commands: ping, ifconfig.
//!
//! Pure canned output. Nothing here opens a socket or queries the host OS;
//! the addresses and latencies are part of the simulation.

use homeos_types::error::Result;

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register network commands.
pub fn register_network_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(PingCmd));
    reg.register(Box::new(IfconfigCmd));
}

// ---------------------------------------------------------------------------
// ping
// ---------------------------------------------------------------------------

struct PingCmd;
impl Command for PingCmd {
    fn name(&self) -> &str {
        "ping"
    }
    fn description(&self) -> &str {
        "Simulates a network ping"
    }
    fn usage(&self) -> &str {
        "ping [ip/host]"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(&host) = args.first() else {
            return Ok(CommandOutput::Text(
                "Usage: ping [ip/host]\nSimulates sending data packets to a network host."
                    .to_string(),
            ));
        };
        let mut lines = vec![format!("PING {host} ({host}): 56 data bytes")];
        for seq in 1..=4u64 {
            let time_ms = simulated_latency(host, seq);
            lines.push(format!(
                "64 bytes from {host}: icmp_seq={seq} ttl=64 time={time_ms} ms"
            ));
        }
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

/// Latency in the 10..50 ms band, stable for a given host and sequence
/// number (FNV-1a over the host name, offset by the sequence).
fn simulated_latency(host: &str, seq: u64) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in host.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    10 + hash.wrapping_add(seq.wrapping_mul(0x9e37_79b9)) % 40
}

// ---------------------------------------------------------------------------
// ifconfig
// ---------------------------------------------------------------------------

struct IfconfigCmd;
impl Command for IfconfigCmd {
    fn name(&self) -> &str {
        "ifconfig"
    }
    fn description(&self) -> &str {
        "Displays mock network configuration"
    }
    fn usage(&self) -> &str {
        "ifconfig"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(
            [
                "eth0: flags=209<UP,BROADCAST,MULTICAST>  mtu 1500",
                "        inet 192.168.1.10  netmask 255.255.255.0  broadcast 192.168.1.255",
                "        ether 00:11:22:33:44:55  txqueuelen 1000  (Ethernet)",
                "lo: flags=73<UP,LOOPBACK,RUNNING>  mtu 65536",
                "        inet 127.0.0.1  netmask 255.0.0.0",
            ]
            .join("\n"),
        ))
    }
}
