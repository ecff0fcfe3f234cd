use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - comparison completed
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (catalog error, invalid input, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for vendor comparison.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum TcoError {
    #[error("Catalog file not found: {path}\n\n💡 Hint: {suggestion}")]
    CatalogNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse catalog file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the catalog file is valid TOML and matches the expected schema")]
    CatalogParseError { path: PathBuf, details: String },

    #[error("Invalid input: {message}\n\n💡 Hint: {hint}")]
    InvalidInput { message: String, hint: String },

    #[error("Vendor \"{vendor_id}\" not found in the catalog\n\n💡 Hint: Check the vendor id spelling, or pass --fallback-profile to substitute a generic profile")]
    VendorNotFound { vendor_id: String },

    #[error("Industry \"{industry_id}\" not found in the catalog\n\n💡 Hint: Run with --format json and inspect the catalog, or add the industry record to the catalog file")]
    IndustryNotFound { industry_id: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to generate {format} output\nDetails: {details}")]
    OutputGenerationError { format: String, details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_exit_code_equality() {
        assert_eq!(ExitCode::Success, ExitCode::Success);
        assert_ne!(ExitCode::Success, ExitCode::ApplicationError);
    }

    #[test]
    fn test_catalog_not_found_display() {
        let error = TcoError::CatalogNotFound {
            path: PathBuf::from("/test/nac-catalog.toml"),
            suggestion: "Test suggestion".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Catalog file not found"));
        assert!(display.contains("/test/nac-catalog.toml"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Test suggestion"));
    }

    #[test]
    fn test_catalog_parse_error_display() {
        let error = TcoError::CatalogParseError {
            path: PathBuf::from("/test/nac-catalog.toml"),
            details: "Invalid TOML syntax".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse catalog file"));
        assert!(display.contains("Invalid TOML syntax"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_invalid_input_display() {
        let error = TcoError::InvalidInput {
            message: "device count must be greater than zero".to_string(),
            hint: "Pass --devices with a positive value".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid input"));
        assert!(display.contains("device count must be greater than zero"));
        assert!(display.contains("Pass --devices"));
    }

    #[test]
    fn test_vendor_not_found_display() {
        let error = TcoError::VendorNotFound {
            vendor_id: "acme-nac".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("acme-nac"));
        assert!(display.contains("not found in the catalog"));
        assert!(display.contains("--fallback-profile"));
    }

    #[test]
    fn test_industry_not_found_display() {
        let error = TcoError::IndustryNotFound {
            industry_id: "mining".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("mining"));
        assert!(display.contains("not found in the catalog"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = TcoError::FileWriteError {
            path: PathBuf::from("/test/report.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/report.json"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_security_error_display() {
        let error = TcoError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Symbolic links are not allowed"));
        assert!(display.contains("Use a regular file instead"));
    }
}
