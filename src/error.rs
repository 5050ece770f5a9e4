use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `fsmbti`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; the CLI glue keeps using
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum QuizError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Question bank / type catalog ─────────────────────────────────────
    #[error("bank: {0}")]
    Bank(#[from] BankError),

    // ── Answer persistence ───────────────────────────────────────────────
    #[error("store: {0}")]
    Store(#[from] StoreError),

    // ── Quiz session ─────────────────────────────────────────────────────
    #[error("session: {0}")]
    Session(#[from] SessionError),

    // ── Share link / QR ──────────────────────────────────────────────────
    #[error("share: {0}")]
    Share(#[from] ShareError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Question bank errors ────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected exactly 4 axes, found {0}")]
    AxisCount(usize),

    #[error("axis {0} is declared more than once")]
    DuplicateAxis(String),

    #[error("axis {key} uses the same letter '{letter}' for both poles")]
    DegenerateAxis { key: String, letter: char },

    #[error("question id {0} is declared more than once")]
    DuplicateQuestion(u32),

    #[error("question {id} refers to undeclared axis {axis}")]
    UnknownAxis { id: u32, axis: String },

    #[error("question {id} direction '{dir}' is not a letter of axis {axis}")]
    InvalidDirection { id: u32, axis: String, dir: char },

    #[error("question bank has no questions")]
    NoQuestions,

    #[error("rating scale must list exactly the values 1..=5")]
    InvalidScale,

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Store errors ────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize answers: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove {path}: {source}")]
    Remove {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ─── Session errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("question {0} does not exist")]
    UnknownQuestion(u32),

    #[error("rating {0} is outside the 1..=5 scale")]
    InvalidRating(u8),

    #[error("{answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },

    #[error("observer failed: {0}")]
    Observer(#[from] StoreError),
}

// ─── Share errors ────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("invalid QR endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("QR request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("QR service answered HTTP {0}")]
    Status(u16),

    #[error("failed to write QR image: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, QuizError>;
