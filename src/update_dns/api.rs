pub(crate) trait UpdateDns {
    fn describe(&self) -> String;

    fn update_dns(&self, token: &str, new_ip: &str) -> color_eyre::Result<()>;
}
