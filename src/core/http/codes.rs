/// Declares the standard status table once and derives the enum and its lookups from it.
macro_rules! http_statuses {
    ($( $variant:ident = ($code:expr, $name:literal, $phrase:literal, $description:literal), )+) => {
        /// Well-known HTTP status codes, keyed by their conventional symbolic name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HTTPStatus {
            $( $variant, )+
        }

        impl HTTPStatus {
            pub const ALL: &'static [HTTPStatus] = &[$( HTTPStatus::$variant, )+];

            pub fn code(&self) -> u16 {
                match self {
                    $( HTTPStatus::$variant => $code, )+
                }
            }

            /// Symbolic name, e.g. `NOT_FOUND`.
            pub fn name(&self) -> &'static str {
                match self {
                    $( HTTPStatus::$variant => $name, )+
                }
            }

            pub fn phrase(&self) -> &'static str {
                match self {
                    $( HTTPStatus::$variant => $phrase, )+
                }
            }

            /// Longer explanation, empty for codes that never had one.
            pub fn description(&self) -> &'static str {
                match self {
                    $( HTTPStatus::$variant => $description, )+
                }
            }

            /// Exact, case-sensitive match on the symbolic name.
            pub fn from_name(name: &str) -> Option<HTTPStatus> {
                match name {
                    $( $name => Some(HTTPStatus::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

http_statuses! {
    Continue = (100, "CONTINUE", "Continue", "Request received, please continue"),
    SwitchingProtocols = (101, "SWITCHING_PROTOCOLS", "Switching Protocols", "Switching to new protocol; obey Upgrade header"),
    Processing = (102, "PROCESSING", "Processing", ""),
    EarlyHints = (103, "EARLY_HINTS", "Early Hints", ""),

    Ok = (200, "OK", "OK", "Request fulfilled, document follows"),
    Created = (201, "CREATED", "Created", "Document created, URL follows"),
    Accepted = (202, "ACCEPTED", "Accepted", "Request accepted, processing continues off-line"),
    NonAuthoritativeInformation = (203, "NON_AUTHORITATIVE_INFORMATION", "Non-Authoritative Information", "Request fulfilled from cache"),
    NoContent = (204, "NO_CONTENT", "No Content", "Request fulfilled, nothing follows"),
    ResetContent = (205, "RESET_CONTENT", "Reset Content", "Clear input form for further input"),
    PartialContent = (206, "PARTIAL_CONTENT", "Partial Content", "Partial content follows"),
    MultiStatus = (207, "MULTI_STATUS", "Multi-Status", ""),
    AlreadyReported = (208, "ALREADY_REPORTED", "Already Reported", ""),
    ImUsed = (226, "IM_USED", "IM Used", ""),

    MultipleChoices = (300, "MULTIPLE_CHOICES", "Multiple Choices", "Object has several resources -- see URI list"),
    MovedPermanently = (301, "MOVED_PERMANENTLY", "Moved Permanently", "Object moved permanently -- see URI list"),
    Found = (302, "FOUND", "Found", "Object moved temporarily -- see URI list"),
    SeeOther = (303, "SEE_OTHER", "See Other", "Object moved -- see Method and URL list"),
    NotModified = (304, "NOT_MODIFIED", "Not Modified", "Document has not changed since given time"),
    UseProxy = (305, "USE_PROXY", "Use Proxy", "You must use proxy specified in Location to access this resource"),
    TemporaryRedirect = (307, "TEMPORARY_REDIRECT", "Temporary Redirect", "Object moved temporarily -- see URI list"),
    PermanentRedirect = (308, "PERMANENT_REDIRECT", "Permanent Redirect", "Object moved permanently -- see URI list"),

    BadRequest = (400, "BAD_REQUEST", "Bad Request", "Bad request syntax or unsupported method"),
    Unauthorized = (401, "UNAUTHORIZED", "Unauthorized", "No permission -- see authorization schemes"),
    PaymentRequired = (402, "PAYMENT_REQUIRED", "Payment Required", "No payment -- see charging schemes"),
    Forbidden = (403, "FORBIDDEN", "Forbidden", "Request forbidden -- authorization will not help"),
    NotFound = (404, "NOT_FOUND", "Not Found", "Nothing matches the given URI"),
    MethodNotAllowed = (405, "METHOD_NOT_ALLOWED", "Method Not Allowed", "Specified method is invalid for this resource"),
    NotAcceptable = (406, "NOT_ACCEPTABLE", "Not Acceptable", "URI not available in preferred format"),
    ProxyAuthenticationRequired = (407, "PROXY_AUTHENTICATION_REQUIRED", "Proxy Authentication Required", "You must authenticate with this proxy before proceeding"),
    RequestTimeout = (408, "REQUEST_TIMEOUT", "Request Timeout", "Request timed out; try again later"),
    Conflict = (409, "CONFLICT", "Conflict", "Request conflict"),
    Gone = (410, "GONE", "Gone", "URI no longer exists and has been permanently removed"),
    LengthRequired = (411, "LENGTH_REQUIRED", "Length Required", "Client must specify Content-Length"),
    PreconditionFailed = (412, "PRECONDITION_FAILED", "Precondition Failed", "Precondition in headers is false"),
    RequestEntityTooLarge = (413, "REQUEST_ENTITY_TOO_LARGE", "Request Entity Too Large", "Entity is too large"),
    RequestUriTooLong = (414, "REQUEST_URI_TOO_LONG", "Request-URI Too Long", "URI is too long"),
    UnsupportedMediaType = (415, "UNSUPPORTED_MEDIA_TYPE", "Unsupported Media Type", "Entity body in unsupported format"),
    RequestedRangeNotSatisfiable = (416, "REQUESTED_RANGE_NOT_SATISFIABLE", "Requested Range Not Satisfiable", "Cannot satisfy request range"),
    ExpectationFailed = (417, "EXPECTATION_FAILED", "Expectation Failed", "Expect condition could not be satisfied"),
    ImATeapot = (418, "IM_A_TEAPOT", "I'm a Teapot", "Server refuses to brew coffee because it is a teapot."),
    MisdirectedRequest = (421, "MISDIRECTED_REQUEST", "Misdirected Request", "Server is not able to produce a response"),
    UnprocessableEntity = (422, "UNPROCESSABLE_ENTITY", "Unprocessable Entity", ""),
    Locked = (423, "LOCKED", "Locked", ""),
    FailedDependency = (424, "FAILED_DEPENDENCY", "Failed Dependency", ""),
    TooEarly = (425, "TOO_EARLY", "Too Early", ""),
    UpgradeRequired = (426, "UPGRADE_REQUIRED", "Upgrade Required", ""),
    PreconditionRequired = (428, "PRECONDITION_REQUIRED", "Precondition Required", "The origin server requires the request to be conditional"),
    TooManyRequests = (429, "TOO_MANY_REQUESTS", "Too Many Requests", "The user has sent too many requests in a given amount of time (\"rate limiting\")"),
    RequestHeaderFieldsTooLarge = (431, "REQUEST_HEADER_FIELDS_TOO_LARGE", "Request Header Fields Too Large", "The server is unwilling to process the request because its header fields are too large"),
    UnavailableForLegalReasons = (451, "UNAVAILABLE_FOR_LEGAL_REASONS", "Unavailable For Legal Reasons", "The server is denying access to the resource as a consequence of a legal demand"),

    InternalServerError = (500, "INTERNAL_SERVER_ERROR", "Internal Server Error", "Server got itself in trouble"),
    NotImplemented = (501, "NOT_IMPLEMENTED", "Not Implemented", "Server does not support this operation"),
    BadGateway = (502, "BAD_GATEWAY", "Bad Gateway", "Invalid responses from another server/proxy"),
    ServiceUnavailable = (503, "SERVICE_UNAVAILABLE", "Service Unavailable", "The server cannot process the request due to a high load"),
    GatewayTimeout = (504, "GATEWAY_TIMEOUT", "Gateway Timeout", "The gateway server did not receive a timely response"),
    HttpVersionNotSupported = (505, "HTTP_VERSION_NOT_SUPPORTED", "HTTP Version Not Supported", "Cannot fulfill request"),
    VariantAlsoNegotiates = (506, "VARIANT_ALSO_NEGOTIATES", "Variant Also Negotiates", ""),
    InsufficientStorage = (507, "INSUFFICIENT_STORAGE", "Insufficient Storage", ""),
    LoopDetected = (508, "LOOP_DETECTED", "Loop Detected", ""),
    NotExtended = (510, "NOT_EXTENDED", "Not Extended", ""),
    NetworkAuthenticationRequired = (511, "NETWORK_AUTHENTICATION_REQUIRED", "Network Authentication Required", "The client needs to authenticate to gain network access"),
}
