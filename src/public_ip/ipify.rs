use color_eyre::eyre::WrapErr;
use log::{debug, warn};

use crate::config::Settings;
use crate::public_ip::api::LookupIp;

/// Plain-text "what is my IP" endpoint such as `https://api.ipify.org`.
pub struct Ipify {
    url: String,
}

impl From<&Settings> for Ipify {
    fn from(settings: &Settings) -> Self {
        Ipify {
            url: settings.lookup_url.clone(),
        }
    }
}

impl LookupIp for Ipify {
    fn describe(&self) -> String {
        format!("ipify[url={url}]", url = &self.url)
    }

    fn lookup_ip(&self) -> color_eyre::Result<String> {
        let response = attohttpc::RequestBuilder::try_new(attohttpc::Method::GET, &self.url)
            .wrap_err("Invalid lookup URL")?
            .send()
            .wrap_err("Failed to send request")?;
        if !response.is_success() {
            warn!("[ipify] Lookup answered {}, using body anyway", response.status());
        }

        let body = response.text().wrap_err("Failed to read response")?;
        debug!("[ipify] Raw response: {:?}", body);

        Ok(body)
    }
}
