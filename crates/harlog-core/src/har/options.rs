/// How a protocol-relative redirect (`//host/path`) is turned into an
/// absolute URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProtocolRelative {
    /// Take only the scheme from the request URL, keeping the redirect's own
    /// host: `http://a.test/x` + `//b.test/y` gives `http://b.test/y`.
    #[default]
    ResolveScheme,
    /// Prefix the request authority like any other partial redirect:
    /// `http://a.test/x` + `//b.test/y` gives `http://a.test//b.test/y`.
    PrefixAuthority,
}

/// Options for [`HarReader`](super::HarReader).
#[derive(Debug, Clone)]
pub struct ReaderOptions {
    pub protocol_relative: ProtocolRelative,
    /// Check entry timings, request methods/URLs and page references after
    /// decoding.
    pub validate: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            protocol_relative: ProtocolRelative::default(),
            validate: true,
        }
    }
}

impl ReaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn protocol_relative(mut self, mode: ProtocolRelative) -> Self {
        self.protocol_relative = mode;
        self
    }

    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}
