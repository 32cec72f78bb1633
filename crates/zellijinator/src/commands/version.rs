//! Version information

use anyhow::Result;
use serde::Serialize;
use zellijinator_core::OutputFormat;

#[derive(Debug, Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    os: &'static str,
    arch: &'static str,
}

const INFO: VersionInfo = VersionInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
    os: std::env::consts::OS,
    arch: std::env::consts::ARCH,
};

pub fn run(format: OutputFormat) -> Result<()> {
    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&INFO)?);
    } else {
        println!("Zellijinator");
        println!();
        println!("Version:   {}", INFO.version);
        println!("Platform:  {}/{}", INFO.os, INFO.arch);
    }
    Ok(())
}
