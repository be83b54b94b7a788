use crate::domain::gateway::GatewayCategory;
use serde::Serialize;
use std::collections::HashMap;

pub mod seed;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Secret,
    Multiline,
    Choice { choices: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CredentialField {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<String>,
    pub help_text: Option<String>,
    pub default_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeSchedule {
    pub percentage_bp: i64,
    pub fixed_minor: i64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GatewayDescriptor {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub category: GatewayCategory,
    pub supported_currencies: Vec<String>,
    pub supported_countries: Vec<String>,
    pub fees: FeeSchedule,
    pub features: Vec<String>,
    pub credential_schema: Vec<CredentialField>,
    pub default_enabled: bool,
    pub default_test_mode: bool,
}

impl GatewayDescriptor {
    pub fn field(&self, key: &str) -> Option<&CredentialField> {
        self.credential_schema.iter().find(|f| f.key == key)
    }

    pub fn supports_currency(&self, code: &str) -> bool {
        self.supported_currencies.iter().any(|c| c == code)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub category: GatewayCategory,
    pub title: String,
    pub gateways: Vec<GatewayDescriptor>,
}

pub struct GatewayCatalog {
    descriptors: Vec<GatewayDescriptor>,
    index: HashMap<String, usize>,
}

impl GatewayCatalog {
    pub fn new(descriptors: Vec<GatewayDescriptor>) -> Self {
        let mut index = HashMap::new();
        for (pos, descriptor) in descriptors.iter().enumerate() {
            index.insert(descriptor.id.clone(), pos);
        }
        Self { descriptors, index }
    }

    pub fn with_defaults() -> Self {
        Self::new(seed::default_descriptors())
    }

    pub fn list(&self) -> &[GatewayDescriptor] {
        &self.descriptors
    }

    pub fn get(&self, id: &str) -> Option<&GatewayDescriptor> {
        self.index.get(id).and_then(|&pos| self.descriptors.get(pos))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn grouped(&self) -> Vec<CategoryGroup> {
        GatewayCategory::CANONICAL_ORDER
            .iter()
            .filter_map(|&category| {
                let gateways: Vec<GatewayDescriptor> = self
                    .descriptors
                    .iter()
                    .filter(|d| d.category == category)
                    .cloned()
                    .collect();
                if gateways.is_empty() {
                    None
                } else {
                    Some(CategoryGroup {
                        category,
                        title: category.display_name().to_string(),
                        gateways,
                    })
                }
            })
            .collect()
    }
}
