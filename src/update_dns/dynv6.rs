use color_eyre::eyre::WrapErr;
use log::{debug, info, trace};

use crate::config::Settings;
use crate::update_dns::api::UpdateDns;

/// dynv6 update API, `GET /api/update?hostname=..&token=..&ipv4=..`.
pub struct Dynv6 {
    protocol: String,
    server: String,
    domain: String,
}

impl From<&Settings> for Dynv6 {
    fn from(settings: &Settings) -> Self {
        Dynv6 {
            protocol: settings.protocol.clone(),
            server: settings.server.clone(),
            domain: settings.domain.clone(),
        }
    }
}

impl Dynv6 {
    /// Values are interpolated verbatim, with no percent-encoding.
    pub fn update_url(&self, token: &str, new_ip: &str) -> String {
        format!(
            "{protocol}://{server}/api/update?hostname={domain}&token={token}&ipv4={ip}",
            protocol = self.protocol,
            server = self.server,
            domain = self.domain,
            token = token,
            ip = new_ip,
        )
    }
}

impl UpdateDns for Dynv6 {
    fn describe(&self) -> String {
        format!(
            "dynv6[server={server}, hostname={domain}]",
            server = &self.server,
            domain = &self.domain,
        )
    }

    // The provider's answer is only logged; a rejected update is not an error.
    fn update_dns(&self, token: &str, new_ip: &str) -> color_eyre::Result<()> {
        let url = self.update_url(token, new_ip);
        trace!("[dynv6] GET {}", url);

        let response = attohttpc::RequestBuilder::try_new(attohttpc::Method::GET, &url)
            .wrap_err("Invalid update URL")?
            .send()
            .wrap_err("Failed to send request")?;
        let status = response.status();
        let body = response.text().wrap_err("Failed to read response")?;

        info!("[dynv6] Update answered {}", status);
        debug!("[dynv6] Response body: {:?}", body);

        Ok(())
    }
}
