//! recordkit CLI — exercise the record-storage client from the terminal.
//!
//! Usage:
//! ```bash
//! # Fetch record zones against a live endpoint
//! recordkit zones --settings settings.json --production-url https://records.example.com/api/client \
//!     --device-id 6ba7b810-9dad-11d1-80b4-00c04fd430c8 --zone _defaultZone
//!
//! # Decode a captured response body (length-delimited frames)
//! recordkit decode --file response.bin
//! ```

use std::env;
use std::process;

use anyhow::{anyhow, Context, Result};
use bytes::Bytes;

use recordkit_client::bootstrap::{client_for_session, DeviceContext};
use recordkit_client::ops::zones;
use recordkit_client::session::{AccountSession, AccountSettings};
use recordkit_core::frame;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "zones" => cmd_zones(&args[2..]).await,
        "decode" => cmd_decode(&args[2..]),
        "version" | "--version" | "-V" => {
            println!("recordkit {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn print_usage() {
    println!("recordkit {}", env!("CARGO_PKG_VERSION"));
    println!("Inspect a record-storage endpoint from the terminal\n");
    println!("USAGE:");
    println!("    recordkit <COMMAND>\n");
    println!("COMMANDS:");
    println!("    zones      Fetch record zones against a live endpoint");
    println!("    decode     Decode a captured response body");
    println!("    version    Print version");
    println!("    help       Print this help\n");
    println!("ZONES FLAGS:");
    println!("    --settings <FILE>        account settings JSON  [required]");
    println!("    --production-url <URL>   fallback endpoint URL  [required]");
    println!("    --device-id <UUID>       device identifier      [required]");
    println!("    --zone <NAME>            zone to fetch (repeatable)");
    println!("    --container <ID>         application container  [default: com.example.backup]");
    println!("    --bundle <ID>            application bundle     [default: com.example.backupd]");
    println!("    --hardware-id <ID>       device hardware id     [default: unknown]\n");
    println!("DECODE FLAGS:");
    println!("    --file <FILE>            captured response body [required]");
}

async fn cmd_zones(args: &[String]) -> Result<()> {
    let settings_path = parse_flag(args, "--settings")
        .ok_or_else(|| anyhow!("--settings is required"))?;
    let production_url = parse_flag(args, "--production-url")
        .ok_or_else(|| anyhow!("--production-url is required"))?;
    let device_id = parse_flag(args, "--device-id")
        .ok_or_else(|| anyhow!("--device-id is required"))?;
    let zone_names = parse_repeated_flag(args, "--zone");
    if zone_names.is_empty() {
        return Err(anyhow!("at least one --zone is required"));
    }

    let raw = std::fs::read(&settings_path)
        .with_context(|| format!("reading {settings_path}"))?;
    let settings = AccountSettings::from_json(&raw)?;
    let session = AccountSession::resolve(&settings, &production_url)?;

    let device = DeviceContext {
        container: parse_flag(args, "--container")
            .unwrap_or_else(|| "com.example.backup".into()),
        bundle: parse_flag(args, "--bundle")
            .unwrap_or_else(|| "com.example.backupd".into()),
        device_identifier: device_id,
        device_hardware_id: parse_flag(args, "--hardware-id")
            .unwrap_or_else(|| "unknown".into()),
    };
    let client = client_for_session(&session, &device)?;

    println!("Fetching {} zone(s) as {}...", zone_names.len(), client.user_id());
    let refs: Vec<&str> = zone_names.iter().map(String::as_str).collect();
    let responses = zones::retrieve(&client, &refs).await?;

    for (name, response) in refs.iter().zip(&responses) {
        match response.zone.as_ref().and_then(|z| z.zone_identifier.as_ref()) {
            Some(id) => {
                let owner = id
                    .owner_identifier
                    .as_ref()
                    .map(|o| o.name.as_str())
                    .unwrap_or("-");
                println!("  {name}: present (owner: {owner})");
            }
            None => println!("  {name}: no zone returned"),
        }
    }
    Ok(())
}

fn cmd_decode(args: &[String]) -> Result<()> {
    let path = parse_flag(args, "--file").ok_or_else(|| anyhow!("--file is required"))?;
    let raw = std::fs::read(&path).with_context(|| format!("reading {path}"))?;

    let responses = frame::decode(Bytes::from(raw))?;
    println!("{} response operation(s)", responses.len());
    for (i, op) in responses.iter().enumerate() {
        let uuid = op
            .response
            .as_ref()
            .map(|o| o.uuid.as_str())
            .unwrap_or("-");
        let code = match op.result_code() {
            Some(code) => format!("{code:?}"),
            None => format!("unrecognized({})", op.result_code_raw()),
        };
        println!("  [{i}] uuid: {uuid}  result: {code}");
    }
    Ok(())
}

fn parse_flag(args: &[String], flag: &str) -> Option<String> {
    let pos = args.iter().position(|a| a == flag)?;
    args.get(pos + 1).cloned()
}

fn parse_repeated_flag(args: &[String], flag: &str) -> Vec<String> {
    args.iter()
        .enumerate()
        .filter(|(_, a)| *a == flag)
        .filter_map(|(i, _)| args.get(i + 1).cloned())
        .collect()
}
