use core::fmt;
use derive_more::From;

/// generic notice shown for any export failure
pub const EXPORT_FAILURE_NOTICE: &str = "Error creating PDF. Please try again.";

/// Export failures. Sanitizing, interpreting and rendering never fail, so every variant comes
/// from the export boundary.
#[derive(Debug, From)]
pub enum Error {
    #[from]
    Transport(reqwest::Error),
    #[from]
    Save(std::io::Error),
    #[from]
    Persist(tempfile::PersistError),
    Status(u16),
    /// a success status carrying something other than `application/pdf`
    ContentType(String),
}

impl Error {
    /// the single user-visible message, whatever the cause
    pub fn notice(&self) -> &'static str {
        EXPORT_FAILURE_NOTICE
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
