//! Engine constants and runtime configuration defaults

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Number of outfit keys remembered by a dedup registry before FIFO eviction
pub const DEFAULT_DEDUP_CAPACITY: usize = 100;

/// Local search iterations spent refining each random candidate
pub const DEFAULT_HARMONY_ITERATIONS: usize = 5;

// The random pass always gets at least this many attempts, even for tiny catalogs
/// Minimum attempt ceiling for the random pass
pub const MIN_ATTEMPT_CEILING: usize = 50;

/// Attempts granted per targeted random candidate
pub const ATTEMPTS_PER_TARGET: usize = 20;

// Color handling
/// Normalized value reported for missing or unparseable colors
pub const UNKNOWN_COLOR_HEX: &str = "#808080";

/// Distance reported whenever either color is unknown
///
/// Larger than any real RGB distance (`sqrt(3) * 255 ≈ 441.67`), so unknown
/// colors lose every minimization against known ones.
pub const UNKNOWN_COLOR_DISTANCE: f64 = 1_000.0;

// Collaborator endpoints
/// Port the wardrobe backend listens on during local development
pub const DEFAULT_API_PORT: u16 = 5000;

/// Environment variable holding an explicit API base override
pub const API_BASE_ENV: &str = "OUTFITGEN_API_BASE";

/// Environment variable holding the bearer token for collaborator calls
pub const TOKEN_ENV: &str = "OUTFITGEN_TOKEN";

/// Prefix of share record files written by the directory publisher
pub const SHARE_FILE_PREFIX: &str = "share-";

/// Hostnames treated as loopback when deriving the API base
pub const LOOPBACK_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

/// Origin the caller is served from, used to derive the backend base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    /// URL scheme without the trailing `://`
    pub scheme: String,
    /// Hostname without port
    pub hostname: String,
}

impl Origin {
    /// Parse an origin such as `http://localhost:3000`
    ///
    /// Returns `None` when the value has no `scheme://host` shape.
    pub fn parse(value: &str) -> Option<Self> {
        let (scheme, rest) = value.trim().split_once("://")?;
        let authority = rest.split('/').next().unwrap_or_default();
        let hostname = authority.split(':').next().unwrap_or_default();
        if scheme.is_empty() || hostname.is_empty() {
            return None;
        }
        Some(Self {
            scheme: scheme.to_ascii_lowercase(),
            hostname: hostname.to_ascii_lowercase(),
        })
    }

    /// Whether the hostname refers to the local machine
    pub fn is_loopback(&self) -> bool {
        LOOPBACK_HOSTS.contains(&self.hostname.as_str())
    }
}

/// Resolve the backend base URL used to build collaborator links
///
/// Precedence: a non-empty explicit override wins, then a loopback origin maps
/// to `{scheme}://{host}:5000`, and anything else falls back to the
/// same-origin empty base.
pub fn resolve_api_base(explicit: Option<&str>, origin: Option<&Origin>) -> String {
    if let Some(base) = explicit.map(str::trim).filter(|base| !base.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }

    match origin {
        Some(origin) if origin.is_loopback() => {
            format!(
                "{}://{}:{DEFAULT_API_PORT}",
                origin.scheme, origin.hostname
            )
        }
        _ => String::new(),
    }
}
