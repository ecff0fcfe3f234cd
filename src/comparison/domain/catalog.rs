use crate::comparison::domain::{
    IndustryId, IndustryRiskRecord, VendorCapabilityRecord, VendorCostRecord, VendorId,
};
use std::collections::BTreeMap;

/// One vendor's complete catalog entry: pricing plus capabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorEntry {
    pub cost: VendorCostRecord,
    pub capabilities: VendorCapabilityRecord,
}

/// In-memory catalog of vendors and industries, loaded once at startup.
///
/// Lookups hand out shared references only; nothing here is mutated after
/// construction, which is what makes concurrent comparison calls safe.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    vendors: BTreeMap<VendorId, VendorEntry>,
    industries: BTreeMap<IndustryId, IndustryRiskRecord>,
}

impl Catalog {
    pub fn new(
        vendors: BTreeMap<VendorId, VendorEntry>,
        industries: BTreeMap<IndustryId, IndustryRiskRecord>,
    ) -> Self {
        Self {
            vendors,
            industries,
        }
    }

    pub fn vendor(&self, id: &VendorId) -> Option<&VendorEntry> {
        self.vendors.get(id)
    }

    pub fn industry(&self, id: &IndustryId) -> Option<&IndustryRiskRecord> {
        self.industries.get(id)
    }

    /// All vendor ids in the catalog, in lexicographic order.
    pub fn vendor_ids(&self) -> impl Iterator<Item = &VendorId> {
        self.vendors.keys()
    }

    pub fn vendor_count(&self) -> usize {
        self.vendors.len()
    }

    pub fn industry_count(&self) -> usize {
        self.industries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::domain::{PremiumDiscounts, TermRate, VendorName};

    fn sample_entry() -> VendorEntry {
        VendorEntry {
            cost: VendorCostRecord::new(
                VendorName::new("Sample".to_string()).unwrap(),
                vec![TermRate::new(1, 4.0).unwrap()],
                vec![],
                10_000.0,
                0.0,
                0.0,
                0.0,
                0.0,
                0.5,
                30,
            )
            .unwrap(),
            capabilities: VendorCapabilityRecord::new(80, 80, 80, 0.5, 0.5, 0.5).unwrap(),
        }
    }

    #[test]
    fn test_vendor_lookup() {
        let id = VendorId::new("sample".to_string()).unwrap();
        let mut vendors = BTreeMap::new();
        vendors.insert(id.clone(), sample_entry());
        let catalog = Catalog::new(vendors, BTreeMap::new());

        assert!(catalog.vendor(&id).is_some());
        assert!(catalog
            .vendor(&VendorId::new("missing".to_string()).unwrap())
            .is_none());
        assert_eq!(catalog.vendor_count(), 1);
        assert_eq!(catalog.industry_count(), 0);
    }

    #[test]
    fn test_industry_lookup() {
        let id = IndustryId::new("retail".to_string()).unwrap();
        let mut industries = BTreeMap::new();
        industries.insert(
            id.clone(),
            IndustryRiskRecord::new(
                "Retail".to_string(),
                3_900_000.0,
                0.18,
                6_500.0,
                16.0,
                1.0,
                45_000.0,
                PremiumDiscounts::new(0.1, 0.05, 0.0).unwrap(),
            )
            .unwrap(),
        );
        let catalog = Catalog::new(BTreeMap::new(), industries);

        assert!(catalog.industry(&id).is_some());
        assert!(catalog
            .industry(&IndustryId::new("missing".to_string()).unwrap())
            .is_none());
    }

    #[test]
    fn test_vendor_ids_sorted() {
        let mut vendors = BTreeMap::new();
        for name in ["zeta", "alpha", "mid"] {
            vendors.insert(VendorId::new(name.to_string()).unwrap(), sample_entry());
        }
        let catalog = Catalog::new(vendors, BTreeMap::new());
        let ids: Vec<&str> = catalog.vendor_ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "mid", "zeta"]);
    }
}
