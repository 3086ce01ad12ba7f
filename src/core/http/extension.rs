/// Non-standard statuses reported by reverse proxies and gateways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerStatus {
    ClientClosedRequest,
    VersionNotSupported,
    UnknownError,
    InvalidSslCertificate,
}

impl ServerStatus {
    pub const ALL: &'static [ServerStatus] = &[
        ServerStatus::ClientClosedRequest,
        ServerStatus::VersionNotSupported,
        ServerStatus::UnknownError,
        ServerStatus::InvalidSslCertificate,
    ];

    pub fn code(&self) -> u16 {
        match self {
            ServerStatus::ClientClosedRequest => 499,
            ServerStatus::VersionNotSupported => 505,
            ServerStatus::UnknownError => 520,
            ServerStatus::InvalidSslCertificate => 526,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ServerStatus::ClientClosedRequest => "CLIENT_CLOSED_REQUEST",
            ServerStatus::VersionNotSupported => "VERSION_NOT_SUPPORTED",
            ServerStatus::UnknownError => "UNKNOWN_ERROR",
            ServerStatus::InvalidSslCertificate => "INVALID_SSL_CERTIFICATE",
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            ServerStatus::ClientClosedRequest => "Client Closed Request",
            ServerStatus::VersionNotSupported => "Version Not Supported",
            ServerStatus::UnknownError => "Unknown Error",
            ServerStatus::InvalidSslCertificate => "Invalid SSL Certificate",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ServerStatus::ClientClosedRequest => "Full description: Client Closed Request",
            ServerStatus::VersionNotSupported => "Cannot fulfill request",
            ServerStatus::UnknownError => "Full description: Unknown Error",
            ServerStatus::InvalidSslCertificate => "Full description: Invalid SSL Certificate",
        }
    }

    pub fn from_name(name: &str) -> Option<ServerStatus> {
        ServerStatus::ALL
            .iter()
            .copied()
            .find(|status| status.name() == name)
    }
}
