use std::net::{IpAddr, Ipv4Addr};

use color_eyre::eyre::{ContextCompat, WrapErr};
use trust_dns_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use trust_dns_resolver::Resolver;

use crate::public_ip::api::LookupIp;

const OPENDNS_RESOLVER: Ipv4Addr = Ipv4Addr::new(208, 67, 222, 222);
const MYIP_NAME: &str = "myip.opendns.com.";

/// Asks the OpenDNS resolver which address the query came from.
pub struct OpenDns;

impl LookupIp for OpenDns {
    fn describe(&self) -> String {
        format!("OpenDNS[resolver={}]", OPENDNS_RESOLVER)
    }

    fn lookup_ip(&self) -> color_eyre::Result<String> {
        let resolver = Resolver::new(
            ResolverConfig::from_parts(
                None,
                vec![],
                NameServerConfigGroup::from_ips_clear(&[IpAddr::V4(OPENDNS_RESOLVER)], 53, true),
            ),
            ResolverOpts::default(),
        )
        .wrap_err("Failed to initialize resolver")?;
        let response = resolver
            .lookup_ip(MYIP_NAME)
            .wrap_err("Failed to resolve IP address")?;
        let address = response
            .iter()
            .find_map(|x| match x {
                IpAddr::V4(v4) => Some(v4),
                _ => None,
            })
            .wrap_err("No IPv4 addresses returned")?;

        Ok(address.to_string())
    }
}
