use std::path::PathBuf;
use std::str::FromStr;

use color_eyre::eyre::{eyre, WrapErr};
use log::{info, warn};
use structopt::clap::AppSettings;
use structopt::StructOpt;

use crate::config::{load_settings, Settings};
use crate::public_ip::api::LookupIp;
use crate::public_ip::ipify::Ipify;
use crate::public_ip::opendns::OpenDns;
use crate::update_dns::api::UpdateDns;
use crate::update_dns::dynv6::Dynv6;

mod config;
mod public_ip;
mod report;
mod update_dns;

#[cfg(test)]
mod test_util;

const RUST_BACKTRACE: &str = "RUST_BACKTRACE";

#[derive(StructOpt, Debug)]
#[structopt(setting = AppSettings::AllowLeadingHyphen)]
pub(crate) struct Dynv6Update {
    /// Verbosity of output, 1 occurrence for debug, 2 occurrences for trace
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: usize,

    /// YAML settings file, defaults to ./dynv6.yml when present
    #[structopt(short, long, parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// Where to discover the public IP address
    #[structopt(long, default_value = "ipify", possible_values = &["ipify", "opendns"])]
    pub lookup: LookupKind,

    /// dynv6 HTTP token
    #[structopt(allow_hyphen_values = true)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum LookupKind {
    Ipify,
    OpenDns,
}

impl FromStr for LookupKind {
    type Err = color_eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ipify" => Ok(LookupKind::Ipify),
            "opendns" => Ok(LookupKind::OpenDns),
            other => Err(eyre!("Unknown lookup {:?}", other)),
        }
    }
}

impl LookupKind {
    fn create(self, settings: &Settings) -> Box<dyn LookupIp> {
        match self {
            LookupKind::Ipify => Box::new(Ipify::from(settings)),
            LookupKind::OpenDns => Box::new(OpenDns),
        }
    }
}

fn main() -> color_eyre::Result<()> {
    if std::env::var_os(RUST_BACKTRACE).is_none() {
        std::env::set_var(RUST_BACKTRACE, "1");
    }

    let args: Dynv6Update = Dynv6Update::from_args();

    color_eyre::install()?;
    stderrlog::new()
        .verbosity(args.verbose + 2)
        .init()
        .wrap_err("Failed to initialize logging")?;

    let settings = load_settings(args.config.as_deref())?;
    let lookup = args.lookup.create(&settings);
    let update_dns = Dynv6::from(&settings);
    let token = args.password.unwrap_or_default();

    let ip = sync_ip(lookup.as_ref(), &update_dns, &token);

    println!("{}", report::report_line(&settings.server, &ip));

    Ok(())
}

/// Looks up the public IP and pushes it to the DNS provider.
///
/// Failures of either step are logged and swallowed; the looked-up value
/// (empty if the lookup failed) is always returned.
fn sync_ip(lookup: &dyn LookupIp, update_dns: &dyn UpdateDns, token: &str) -> String {
    info!("Looking up public IP address with {}", lookup.describe());
    let ip = lookup.lookup_ip().unwrap_or_else(|e| {
        warn!("Failed to look up public IP address: {:?}", e);
        String::new()
    });

    info!("Your public IP address is {:?}", ip);
    info!(
        "Attempting to update DNS entry with {}",
        update_dns.describe()
    );

    if let Err(e) = update_dns.update_dns(token, &ip) {
        warn!("Failed to update DNS entry: {:?}", e);
    }

    ip
}
