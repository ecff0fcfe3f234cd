use crate::comparison::domain::catalog::{Catalog, VendorEntry};
use crate::comparison::domain::VendorId;
use crate::shared::error::TcoError;
use crate::shared::Result;

/// Policy for resolving vendor ids that are absent from the catalog.
///
/// Substitution is an explicit caller choice, never an implicit default:
/// a lookup miss under `Strict` is an error, and the substitute profile
/// itself must exist in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Unknown vendor ids fail with a NotFound error.
    #[default]
    Strict,
    /// Unknown vendor ids resolve to the named generic profile.
    SubstituteProfile(VendorId),
}

/// Outcome of a vendor lookup under a fallback policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedVendor<'a> {
    pub entry: &'a VendorEntry,
    /// True when the entry is the substitute profile, not the requested vendor.
    pub substituted: bool,
}

impl FallbackPolicy {
    /// Resolves a vendor id against the catalog.
    ///
    /// # Errors
    /// `TcoError::VendorNotFound` when the id is unknown and the policy is
    /// `Strict`, or when the configured substitute profile is itself
    /// missing from the catalog.
    pub fn resolve<'a>(&self, catalog: &'a Catalog, id: &VendorId) -> Result<ResolvedVendor<'a>> {
        if let Some(entry) = catalog.vendor(id) {
            return Ok(ResolvedVendor {
                entry,
                substituted: false,
            });
        }

        match self {
            FallbackPolicy::Strict => Err(TcoError::VendorNotFound {
                vendor_id: id.to_string(),
            }
            .into()),
            FallbackPolicy::SubstituteProfile(profile_id) => {
                let entry = catalog.vendor(profile_id).ok_or_else(|| {
                    TcoError::VendorNotFound {
                        vendor_id: profile_id.to_string(),
                    }
                })?;
                Ok(ResolvedVendor {
                    entry,
                    substituted: true,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::domain::{
        TermRate, VendorCapabilityRecord, VendorCostRecord, VendorName,
    };
    use std::collections::BTreeMap;

    fn catalog_with(ids: &[&str]) -> Catalog {
        let mut vendors = BTreeMap::new();
        for id in ids {
            vendors.insert(
                VendorId::new(id.to_string()).unwrap(),
                VendorEntry {
                    cost: VendorCostRecord::new(
                        VendorName::new(format!("{} Inc", id)).unwrap(),
                        vec![TermRate::new(1, 3.0).unwrap()],
                        vec![],
                        0.0,
                        0.0,
                        0.0,
                        0.0,
                        0.0,
                        0.5,
                        30,
                    )
                    .unwrap(),
                    capabilities: VendorCapabilityRecord::new(70, 70, 70, 0.5, 0.5, 0.5).unwrap(),
                },
            );
        }
        Catalog::new(vendors, BTreeMap::new())
    }

    #[test]
    fn test_strict_known_vendor() {
        let catalog = catalog_with(&["portnox"]);
        let id = VendorId::new("portnox".to_string()).unwrap();
        let resolved = FallbackPolicy::Strict.resolve(&catalog, &id).unwrap();
        assert!(!resolved.substituted);
    }

    #[test]
    fn test_strict_unknown_vendor_fails() {
        let catalog = catalog_with(&["portnox"]);
        let id = VendorId::new("unknown".to_string()).unwrap();
        let result = FallbackPolicy::Strict.resolve(&catalog, &id);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("unknown"));
        assert!(err.contains("not found"));
    }

    #[test]
    fn test_substitute_profile_applied() {
        let catalog = catalog_with(&["portnox", "generic"]);
        let policy =
            FallbackPolicy::SubstituteProfile(VendorId::new("generic".to_string()).unwrap());
        let id = VendorId::new("unknown".to_string()).unwrap();
        let resolved = policy.resolve(&catalog, &id).unwrap();
        assert!(resolved.substituted);
        assert_eq!(resolved.entry.cost.name().as_str(), "generic Inc");
    }

    #[test]
    fn test_substitute_not_used_for_known_vendor() {
        let catalog = catalog_with(&["portnox", "generic"]);
        let policy =
            FallbackPolicy::SubstituteProfile(VendorId::new("generic".to_string()).unwrap());
        let id = VendorId::new("portnox".to_string()).unwrap();
        let resolved = policy.resolve(&catalog, &id).unwrap();
        assert!(!resolved.substituted);
    }

    #[test]
    fn test_missing_substitute_profile_fails() {
        let catalog = catalog_with(&["portnox"]);
        let policy =
            FallbackPolicy::SubstituteProfile(VendorId::new("generic".to_string()).unwrap());
        let id = VendorId::new("unknown".to_string()).unwrap();
        let result = policy.resolve(&catalog, &id);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("generic"));
    }

    #[test]
    fn test_default_is_strict() {
        assert_eq!(FallbackPolicy::default(), FallbackPolicy::Strict);
    }
}
