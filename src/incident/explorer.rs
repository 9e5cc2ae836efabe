//! Explorer Detail Resolution
//!
//! Picks the one category-specific identifier worth surfacing in the
//! announcement (contract address, key hash, or registry address).

use crate::types::{ExplorerDetail, IncidentRecord, ServiceCategory};

pub struct ExplorerDetailResolver;

impl ExplorerDetailResolver {
    /// Resolve the secondary field for a classified record
    pub fn resolve(record: &IncidentRecord) -> ExplorerDetail {
        match record.service_category {
            Some(ServiceCategory::Feeds) => {
                if !record.contract_address.is_empty() {
                    ExplorerDetail::new("contract_address", &record.contract_address)
                } else if !record.contract.is_empty() {
                    ExplorerDetail::new("contract", &record.contract)
                } else {
                    ExplorerDetail::none()
                }
            }
            Some(ServiceCategory::Vrf) => {
                if !record.key_underscore_hash.is_empty() {
                    ExplorerDetail::new("key_hash", &record.key_underscore_hash)
                } else if !record.key_hash.is_empty() {
                    ExplorerDetail::new("keyhash", &record.key_hash)
                } else {
                    ExplorerDetail::none()
                }
            }
            // Keepers alerts always show the registry, even when it's blank
            Some(ServiceCategory::Keepers) => {
                ExplorerDetail::new("registry_address", &record.registry_address)
            }
            Some(ServiceCategory::Other) | None => ExplorerDetail::none(),
        }
    }
}
