use crate::catalog::{CredentialField, FeeSchedule, FieldKind, GatewayDescriptor};
use crate::domain::gateway::GatewayCategory;

pub fn default_descriptors() -> Vec<GatewayDescriptor> {
    vec![
        razorpay(),
        payu(),
        ccavenue(),
        easebuzz(),
        billdesk(),
        phonepe(),
        paytm(),
        gpay_business(),
        amazonpay(),
        mobikwik(),
        freecharge(),
        paypal(),
        stripe(),
        square(),
    ]
}

fn razorpay() -> GatewayDescriptor {
    GatewayDescriptor {
        id: "razorpay".to_string(),
        display_name: "Razorpay".to_string(),
        description: "Leading payment gateway for India with support for UPI, cards, net banking, and wallets".to_string(),
        category: GatewayCategory::Cards,
        supported_currencies: strings(&["INR", "USD"]),
        supported_countries: strings(&["IN", "US", "MY", "SG"]),
        fees: fee(200, 0, "INR"),
        features: strings(&["UPI", "Cards", "Net Banking", "Wallets", "EMI", "International Cards"]),
        credential_schema: vec![
            text("keyId", "Key ID", true, "rzp_test_xxxxxxxxxx", "Get this from Razorpay Dashboard > Settings > API Keys"),
            secret("keySecret", "Key Secret", true, "Your secret key", "Keep this secret and never share publicly"),
            secret("webhookSecret", "Webhook Secret", false, "Webhook secret for verification", "Used to verify webhook authenticity"),
        ],
        default_enabled: true,
        default_test_mode: false,
    }
}

fn payu() -> GatewayDescriptor {
    GatewayDescriptor {
        id: "payu".to_string(),
        display_name: "PayU".to_string(),
        description: "Comprehensive payment solution with global reach and local expertise".to_string(),
        category: GatewayCategory::Cards,
        supported_currencies: strings(&["INR", "USD", "EUR"]),
        supported_countries: strings(&["IN", "US", "PL", "TR", "AR"]),
        fees: fee(230, 0, "INR"),
        features: strings(&["Cards", "Net Banking", "UPI", "Wallets", "EMI"]),
        credential_schema: vec![
            text("merchantId", "Merchant ID", true, "Your merchant ID", "Provided by PayU during onboarding"),
            secret("merchantKey", "Merchant Key", true, "Your merchant key", "Secret key for API authentication"),
            secret("salt", "Salt", true, "Salt for hash generation", "Used for generating secure hashes"),
            choice("environment", "Environment", &["test", "production"], "production", "Select test for development, production for live"),
        ],
        default_enabled: true,
        default_test_mode: false,
    }
}

fn ccavenue() -> GatewayDescriptor {
    GatewayDescriptor {
        id: "ccavenue".to_string(),
        display_name: "CCAvenue".to_string(),
        description: "India's first payment aggregator with comprehensive payment solutions".to_string(),
        category: GatewayCategory::Cards,
        supported_currencies: strings(&["INR"]),
        supported_countries: strings(&["IN"]),
        fees: fee(250, 0, "INR"),
        features: strings(&["Cards", "Net Banking", "UPI", "Wallets", "EMI", "Cash Cards"]),
        credential_schema: vec![
            text("merchantId", "Merchant ID", true, "Your merchant ID", "Unique identifier provided by CCAvenue"),
            text("accessCode", "Access Code", true, "Access code", "Access code for API integration"),
            secret("workingKey", "Working Key", true, "Working key for encryption", "Used for encrypting transaction data"),
        ],
        default_enabled: true,
        default_test_mode: true,
    }
}

fn easebuzz() -> GatewayDescriptor {
    GatewayDescriptor {
        id: "easebuzz".to_string(),
        display_name: "Easebuzz".to_string(),
        description: "Complete payment solution with instant settlements and competitive pricing".to_string(),
        category: GatewayCategory::Cards,
        supported_currencies: strings(&["INR"]),
        supported_countries: strings(&["IN"]),
        fees: fee(175, 0, "INR"),
        features: strings(&["Cards", "Net Banking", "UPI", "Wallets", "EMI", "Instant Settlement"]),
        credential_schema: vec![
            text("merchantKey", "Merchant Key", true, "Your merchant key", "Unique merchant identifier from Easebuzz"),
            secret("salt", "Salt", true, "Salt for hash generation", "Secret salt for secure hash generation"),
            choice("environment", "Environment", &["test", "production"], "test", "Environment for API calls"),
            text("subMerchantId", "Sub Merchant ID", false, "Sub merchant ID (optional)", "For marketplace/aggregator models"),
        ],
        default_enabled: false,
        default_test_mode: true,
    }
}

fn billdesk() -> GatewayDescriptor {
    GatewayDescriptor {
        id: "billdesk".to_string(),
        display_name: "BillDesk".to_string(),
        description: "Trusted payment gateway with strong focus on security and reliability".to_string(),
        category: GatewayCategory::Netbanking,
        supported_currencies: strings(&["INR"]),
        supported_countries: strings(&["IN"]),
        fees: fee(180, 0, "INR"),
        features: strings(&["Net Banking", "Cards", "UPI", "Wallets"]),
        credential_schema: vec![
            text("merchantId", "Merchant ID", true, "Your merchant ID", "Merchant identifier from BillDesk"),
            text("securityId", "Security ID", true, "Security ID", "Security identifier for authentication"),
            secret("checksum", "Checksum Key", true, "Checksum key", "Key for generating checksums"),
        ],
        default_enabled: false,
        default_test_mode: true,
    }
}

fn phonepe() -> GatewayDescriptor {
    GatewayDescriptor {
        id: "phonepe".to_string(),
        display_name: "PhonePe".to_string(),
        description: "Digital payments platform with UPI and wallet integration".to_string(),
        category: GatewayCategory::Upi,
        supported_currencies: strings(&["INR"]),
        supported_countries: strings(&["IN"]),
        fees: fee(150, 0, "INR"),
        features: strings(&["UPI", "PhonePe Wallet", "QR Code", "Intent Flow"]),
        credential_schema: vec![
            text("merchantId", "Merchant ID", true, "Your merchant ID", "Merchant ID from PhonePe Business"),
            secret("saltKey", "Salt Key", true, "Salt key for API", "Salt key for API authentication"),
            text("saltIndex", "Salt Index", true, "Salt index", "Index of the salt key"),
        ],
        default_enabled: true,
        default_test_mode: false,
    }
}

fn paytm() -> GatewayDescriptor {
    GatewayDescriptor {
        id: "paytm".to_string(),
        display_name: "Paytm".to_string(),
        description: "Leading digital payments and financial services platform".to_string(),
        category: GatewayCategory::Upi,
        supported_currencies: strings(&["INR"]),
        supported_countries: strings(&["IN"]),
        fees: fee(180, 0, "INR"),
        features: strings(&["UPI", "Paytm Wallet", "Cards", "Net Banking", "Postpaid"]),
        credential_schema: vec![
            text("merchantId", "Merchant ID", true, "Your merchant ID", "Merchant ID from Paytm Business"),
            secret("merchantKey", "Merchant Key", true, "Merchant key", "Secret key for API calls"),
            text("website", "Website", true, "Website identifier", "Website identifier from Paytm"),
            text("industryType", "Industry Type", true, "Industry type", "Industry type code from Paytm"),
        ],
        default_enabled: false,
        default_test_mode: true,
    }
}

fn gpay_business() -> GatewayDescriptor {
    GatewayDescriptor {
        id: "gpay_business".to_string(),
        display_name: "Google Pay for Business".to_string(),
        description: "Google Pay integration for UPI and digital payments".to_string(),
        category: GatewayCategory::Upi,
        supported_currencies: strings(&["INR"]),
        supported_countries: strings(&["IN"]),
        fees: fee(0, 0, "INR"),
        features: strings(&["UPI", "QR Code", "Intent Flow", "Deep Linking"]),
        credential_schema: vec![
            text("merchantId", "Merchant ID", true, "Google Pay merchant ID", "Merchant ID from Google Pay Business"),
            text("merchantName", "Merchant Name", true, "Business name", "Your business name as registered"),
            text("vpa", "VPA (Virtual Payment Address)", true, "merchant@payu", "Your UPI VPA for receiving payments"),
        ],
        default_enabled: false,
        default_test_mode: true,
    }
}

fn amazonpay() -> GatewayDescriptor {
    GatewayDescriptor {
        id: "amazonpay".to_string(),
        display_name: "Amazon Pay".to_string(),
        description: "Amazon Pay for seamless checkout experience".to_string(),
        category: GatewayCategory::Wallets,
        supported_currencies: strings(&["INR", "USD"]),
        supported_countries: strings(&["IN", "US", "UK", "DE", "JP"]),
        fees: fee(290, 0, "INR"),
        features: strings(&["Amazon Wallet", "UPI", "Cards", "EMI"]),
        credential_schema: vec![
            text("sellerId", "Seller ID", true, "Amazon seller ID", "Your Amazon seller/merchant ID"),
            text("accessKey", "Access Key", true, "Access key", "Access key from Amazon Pay"),
            secret("secretKey", "Secret Key", true, "Secret key", "Secret key for API authentication"),
            choice("region", "Region", &["IN", "US", "UK", "DE", "JP"], "IN", "Amazon Pay region"),
        ],
        default_enabled: false,
        default_test_mode: true,
    }
}

fn mobikwik() -> GatewayDescriptor {
    GatewayDescriptor {
        id: "mobikwik".to_string(),
        display_name: "MobiKwik".to_string(),
        description: "Digital wallet and payment gateway solution".to_string(),
        category: GatewayCategory::Wallets,
        supported_currencies: strings(&["INR"]),
        supported_countries: strings(&["IN"]),
        fees: fee(200, 0, "INR"),
        features: strings(&["MobiKwik Wallet", "UPI", "Cards", "Net Banking"]),
        credential_schema: vec![
            text("merchantId", "Merchant ID", true, "MobiKwik merchant ID", "Merchant ID from MobiKwik"),
            secret("secretKey", "Secret Key", true, "Secret key", "Secret key for API calls"),
            secret("checksumKey", "Checksum Key", true, "Checksum key", "Key for generating checksums"),
        ],
        default_enabled: false,
        default_test_mode: true,
    }
}

fn freecharge() -> GatewayDescriptor {
    GatewayDescriptor {
        id: "freecharge".to_string(),
        display_name: "FreeCharge".to_string(),
        description: "Digital wallet and UPI payment solution".to_string(),
        category: GatewayCategory::Wallets,
        supported_currencies: strings(&["INR"]),
        supported_countries: strings(&["IN"]),
        fees: fee(190, 0, "INR"),
        features: strings(&["FreeCharge Wallet", "UPI", "Cards"]),
        credential_schema: vec![
            text("merchantId", "Merchant ID", true, "FreeCharge merchant ID", "Merchant ID from FreeCharge"),
            secret("secretKey", "Secret Key", true, "Secret key", "Secret key for authentication"),
        ],
        default_enabled: false,
        default_test_mode: true,
    }
}

fn paypal() -> GatewayDescriptor {
    GatewayDescriptor {
        id: "paypal".to_string(),
        display_name: "PayPal".to_string(),
        description: "Global payment platform for international transactions".to_string(),
        category: GatewayCategory::International,
        supported_currencies: strings(&["USD", "EUR", "GBP", "CAD", "AUD", "JPY"]),
        supported_countries: strings(&["US", "CA", "GB", "AU", "DE", "FR", "IT", "ES"]),
        fees: fee(290, 30, "USD"),
        features: strings(&["PayPal Wallet", "Credit Cards", "Bank Transfer", "Buy Now Pay Later"]),
        credential_schema: vec![
            text("clientId", "Client ID", true, "PayPal client ID", "Client ID from PayPal Developer Dashboard"),
            secret("clientSecret", "Client Secret", true, "PayPal client secret", "Client secret for API authentication"),
            choice("environment", "Environment", &["sandbox", "live"], "sandbox", "PayPal environment"),
        ],
        default_enabled: true,
        default_test_mode: true,
    }
}

fn stripe() -> GatewayDescriptor {
    GatewayDescriptor {
        id: "stripe".to_string(),
        display_name: "Stripe".to_string(),
        description: "Advanced payment infrastructure for global businesses".to_string(),
        category: GatewayCategory::International,
        supported_currencies: strings(&["USD", "EUR", "GBP", "INR", "CAD", "AUD"]),
        supported_countries: strings(&["US", "CA", "GB", "AU", "DE", "FR", "IT", "ES", "IN"]),
        fees: fee(290, 30, "USD"),
        features: strings(&["Credit Cards", "Bank Transfer", "Digital Wallets", "Subscriptions", "Connect"]),
        credential_schema: vec![
            text("publishableKey", "Publishable Key", true, "pk_test_...", "Publishable key for client-side integration"),
            secret("secretKey", "Secret Key", true, "sk_test_...", "Secret key for server-side API calls"),
            secret("webhookSecret", "Webhook Secret", false, "whsec_...", "Webhook endpoint secret for verification"),
        ],
        default_enabled: false,
        default_test_mode: true,
    }
}

fn square() -> GatewayDescriptor {
    GatewayDescriptor {
        id: "square".to_string(),
        display_name: "Square".to_string(),
        description: "Payment processing for businesses of all sizes".to_string(),
        category: GatewayCategory::International,
        supported_currencies: strings(&["USD", "CAD", "GBP", "AUD", "JPY"]),
        supported_countries: strings(&["US", "CA", "GB", "AU", "JP"]),
        fees: fee(260, 10, "USD"),
        features: strings(&["Credit Cards", "Digital Wallets", "In-Person Payments", "Invoicing"]),
        credential_schema: vec![
            text("applicationId", "Application ID", true, "Square application ID", "Application ID from Square Developer Dashboard"),
            secret("accessToken", "Access Token", true, "Access token", "Access token for API authentication"),
            choice("environment", "Environment", &["sandbox", "production"], "sandbox", "Square environment"),
        ],
        default_enabled: false,
        default_test_mode: true,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn fee(percentage_bp: i64, fixed_minor: i64, currency: &str) -> FeeSchedule {
    FeeSchedule {
        percentage_bp,
        fixed_minor,
        currency: currency.to_string(),
    }
}

fn text(key: &str, label: &str, required: bool, placeholder: &str, help: &str) -> CredentialField {
    CredentialField {
        key: key.to_string(),
        label: label.to_string(),
        kind: FieldKind::Text,
        required,
        placeholder: Some(placeholder.to_string()),
        help_text: Some(help.to_string()),
        default_value: String::new(),
    }
}

fn secret(key: &str, label: &str, required: bool, placeholder: &str, help: &str) -> CredentialField {
    CredentialField {
        key: key.to_string(),
        label: label.to_string(),
        kind: FieldKind::Secret,
        required,
        placeholder: Some(placeholder.to_string()),
        help_text: Some(help.to_string()),
        default_value: String::new(),
    }
}

fn choice(key: &str, label: &str, choices: &[&str], default: &str, help: &str) -> CredentialField {
    CredentialField {
        key: key.to_string(),
        label: label.to_string(),
        kind: FieldKind::Choice { choices: strings(choices) },
        required: true,
        placeholder: None,
        help_text: Some(help.to_string()),
        default_value: default.to_string(),
    }
}
