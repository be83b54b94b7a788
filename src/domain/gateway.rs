use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayCategory {
    Cards,
    Upi,
    Wallets,
    Netbanking,
    International,
}

impl GatewayCategory {
    pub const CANONICAL_ORDER: [GatewayCategory; 5] = [
        GatewayCategory::Cards,
        GatewayCategory::Upi,
        GatewayCategory::Wallets,
        GatewayCategory::Netbanking,
        GatewayCategory::International,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            GatewayCategory::Cards => "Cards & General",
            GatewayCategory::Upi => "UPI Payments",
            GatewayCategory::Wallets => "Digital Wallets",
            GatewayCategory::Netbanking => "Net Banking",
            GatewayCategory::International => "International",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayStatus {
    Active,
    Inactive,
    Pending,
    Error,
}
