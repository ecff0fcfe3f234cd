use crate::shared::Result;

/// Maximum length for catalog identifiers (security limit)
const MAX_ID_LENGTH: usize = 64;

/// Maximum length for display names (security limit)
const MAX_NAME_LENGTH: usize = 255;

/// NewType wrapper for a vendor identifier with validation
///
/// Vendor ids are the lookup keys of the catalog. They are restricted to
/// a conservative character set so they can be embedded safely in file
/// names, report anchors, and config files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VendorId(String);

impl VendorId {
    pub fn new(id: String) -> Result<Self> {
        validate_identifier(&id, "Vendor id")?;
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VendorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for an industry identifier with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndustryId(String);

impl IndustryId {
    pub fn new(id: String) -> Result<Self> {
        validate_identifier(&id, "Industry id")?;
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IndustryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for a vendor display name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VendorName(String);

impl VendorName {
    pub fn new(name: String) -> Result<Self> {
        if name.trim().is_empty() {
            anyhow::bail!("Vendor name cannot be empty");
        }

        if name.len() > MAX_NAME_LENGTH {
            anyhow::bail!(
                "Vendor name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_NAME_LENGTH
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VendorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn validate_identifier(id: &str, kind: &str) -> Result<()> {
    if id.is_empty() {
        anyhow::bail!("{} cannot be empty", kind);
    }

    // Security: Length limit to prevent DoS
    if id.len() > MAX_ID_LENGTH {
        anyhow::bail!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            kind,
            id.len(),
            MAX_ID_LENGTH
        );
    }

    // Security: Validate characters (lowercase alphanumeric plus separators)
    // This keeps ids usable as stable keys in reports and config files
    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_' || c == '.')
    {
        anyhow::bail!(
            "{} contains invalid characters. Only lowercase alphanumeric, hyphens, underscores, and dots are allowed.",
            kind
        );
    }

    Ok(())
}
