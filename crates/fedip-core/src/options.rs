use fedip_taxonomy::RoleOrder;

use crate::aggregate::AggregationPolicy;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WizardOptions {
    pub policy: AggregationPolicy,
    /// Order of the roles offered at the last step.
    pub role_order: RoleOrder,
}

impl WizardOptions {
    /// Single-source recommendation: the base category's body only.
    pub fn legacy() -> Self {
        Self {
            policy: AggregationPolicy::BaseCategoryOnly,
            role_order: RoleOrder::Canonical,
        }
    }

    pub fn with_policy(mut self, policy: AggregationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_role_order(mut self, role_order: RoleOrder) -> Self {
        self.role_order = role_order;
        self
    }
}
