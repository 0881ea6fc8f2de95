use envconfig::Envconfig;

#[derive(Envconfig, Debug, Clone)]
pub struct StubConfig {
    #[envconfig(from = "HTTP_PORT", default = "5000")]
    pub http_port: u16,

    /// Comma-separated request paths forced to answer 500.
    #[envconfig(from = "STUB_FAIL", default = "")]
    pub fail_paths: String,
}
