use serde::Serialize;

/// Subscription plan offered by the upgrade flow. The table is fixed; no
/// billing backend exists behind it.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub name: &'static str,
    /// None means the free tier.
    pub monthly_price_usd: Option<u32>,
    pub storage_gb: f64,
    pub features: &'static [&'static str],
    pub recommended: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Basic",
        monthly_price_usd: None,
        storage_gb: 5.0,
        features: &["Standard Support", "Core Features"],
        recommended: false,
    },
    Plan {
        name: "Standard",
        monthly_price_usd: Some(9),
        storage_gb: 25.0,
        features: &["Priority Support", "API Access", "Batch Upload"],
        recommended: true,
    },
    Plan {
        name: "Premium",
        monthly_price_usd: Some(19),
        storage_gb: 100.0,
        features: &["Dedicated Support", "Whitelabeling", "Verified NFT Minting"],
        recommended: false,
    },
];

pub fn find(name: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|plan| plan.name.eq_ignore_ascii_case(name))
}
