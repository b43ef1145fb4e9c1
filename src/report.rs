/// The single stdout line of a run.
pub(crate) fn report_line(server: &str, ip: &str) -> String {
    format!(": ip in {} == {}", server, ip)
}
