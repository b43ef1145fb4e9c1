pub(crate) trait LookupIp {
    fn describe(&self) -> String;

    /// Returns the public address exactly as the source reported it, unvalidated.
    fn lookup_ip(&self) -> color_eyre::Result<String>;
}
