// Firmware-style main loop against a real game server.
//
// Usage: cargo run --example prop_loop -- <server-ip> [tag-hex]
//
// Sends heartbeats every tick and, if a tag id is given (8 hex digits),
// reports it once and prints the mission the server assigns.

use std::net::IpAddr;
use std::time::Duration;

use anyhow::Context;
use rfidlink::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let server: IpAddr = args
        .next()
        .context("missing server ip")?
        .parse()
        .context("invalid server ip")?;
    let tag = match args.next() {
        Some(s) => {
            let bytes = hex::decode(&s).context("tag id must be hex")?;
            Some(TagId::try_from(bytes.as_slice()).context("tag id must be 4 bytes")?)
        }
        None => None,
    };

    let mut link = ServerLink::new(LinkConfig::default());
    let mut state = DeviceState::new();

    if let Some(tag) = tag {
        let report = TagReport::new(tag, state.mission, 0x64, 0x0F);
        match link.tag_report_cycle(server, &report, &mut state) {
            TagReportOutcome::Acknowledged { command, mission } => {
                println!("tag {} -> command {:#04x}, mission {:#04x}", tag.to_hex(), command, mission)
            }
            other => println!("tag report failed: {:?}", other),
        }
    }

    let mut last_display = state.led_display;
    loop {
        link.heartbeat_cycle(server, &mut state);
        if state.led_display != last_display {
            let d = state.led_display;
            println!(
                "display {:#04x}: color {} {:?} {:?}{}",
                d.as_u8(),
                d.color_index(),
                d.pattern(),
                d.motion(),
                if d.is_win() { " WIN" } else { "" }
            );
            last_display = d;
        }
        std::thread::sleep(Duration::from_millis(100));
    }
}
