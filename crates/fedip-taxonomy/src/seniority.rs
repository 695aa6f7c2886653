//! Presentation-time ordering of roles by FEDIP level.
//!
//! This is an alternative to the canonical (rank, collation) order, applied
//! only when listing the roles of the final step. It does not change a
//! [`CanonicalFamily`](fedip_model::CanonicalFamily).

use serde::{Deserialize, Serialize};

use fedip_model::ReferenceTables;

/// FEDIP levels and their seniority, most junior first.
pub const FEDIP_SENIORITY: [(&str, u8); 6] = [
    ("None", 0),
    ("Associate Practitioner", 1),
    ("Practitioner", 2),
    ("Senior Practitioner", 3),
    ("Advanced Practitioner", 4),
    ("Leading Practitioner", 5),
];

/// How roles are ordered when offered at the role step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleOrder {
    /// Canonical family order: level rank, then collation.
    #[default]
    Canonical,
    /// Ascending FEDIP seniority of each role's mapped level.
    FedipSeniority,
}

/// Seniority of a FEDIP level; unknown levels count as 0.
pub fn fedip_seniority(level: &str) -> u8 {
    FEDIP_SENIORITY
        .iter()
        .find(|(name, _)| *name == level)
        .map_or(0, |(_, seniority)| *seniority)
}

/// Stable sort by the seniority of each role's FEDIP level.
///
/// Roles without a mapping sort as seniority 0.
pub fn sort_by_fedip_seniority(roles: &mut [String], tables: &ReferenceTables) {
    roles.sort_by_key(|role| tables.fedip_level(role).map_or(0, fedip_seniority));
}

/// Returns `roles` arranged in the requested order.
pub fn order_roles(roles: &[String], order: RoleOrder, tables: &ReferenceTables) -> Vec<String> {
    let mut ordered = roles.to_vec();
    if order == RoleOrder::FedipSeniority {
        sort_by_fedip_seniority(&mut ordered, tables);
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seniority_map_is_fixed() {
        assert_eq!(fedip_seniority("None"), 0);
        assert_eq!(fedip_seniority("Practitioner"), 2);
        assert_eq!(fedip_seniority("Leading Practitioner"), 5);
        assert_eq!(fedip_seniority("Grand Practitioner"), 0);
    }

    #[test]
    fn unmapped_roles_sort_first_and_ties_keep_order() {
        let tables = ReferenceTables::new()
            .with_fedip_level("Lead Analyst", "Advanced Practitioner")
            .with_fedip_level("Analyst", "Practitioner")
            .with_fedip_level("Senior Analyst", "Practitioner");
        let roles = vec![
            "Lead Analyst".to_string(),
            "Analyst".to_string(),
            "Trainee Analyst".to_string(),
            "Senior Analyst".to_string(),
        ];

        let ordered = order_roles(&roles, RoleOrder::FedipSeniority, &tables);
        assert_eq!(
            ordered,
            vec!["Trainee Analyst", "Analyst", "Senior Analyst", "Lead Analyst"]
        );
        assert_eq!(order_roles(&roles, RoleOrder::Canonical, &tables), roles);
    }
}
