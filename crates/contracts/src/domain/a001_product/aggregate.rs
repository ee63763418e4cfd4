use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Identifier assigned to a created product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Form fields
// ============================================================================

/// Field of the "Create Product" form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Size,
    Type,
}

impl ProductField {
    /// Key used for the input `name`/`id` and in the JSON body
    pub fn key(&self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Size => "size",
            ProductField::Type => "type",
        }
    }

    /// All fields in form order
    pub fn all() -> [ProductField; 3] {
        [ProductField::Name, ProductField::Size, ProductField::Type]
    }

    pub fn required_message(&self) -> String {
        format!("The {} is required", self.key())
    }
}

/// Values entered in the form, sent as the body of the create request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: String,
    #[serde(rename = "type", default)]
    pub product_type: String,
}

impl ProductDto {
    pub fn value(&self, field: ProductField) -> &str {
        match field {
            ProductField::Name => &self.name,
            ProductField::Size => &self.size,
            ProductField::Type => &self.product_type,
        }
    }

    pub fn set(&mut self, field: ProductField, value: String) {
        match field {
            ProductField::Name => self.name = value,
            ProductField::Size => self.size = value,
            ProductField::Type => self.product_type = value,
        }
    }
}

// ============================================================================
// Product type
// ============================================================================

/// Product types offered in the type select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductType {
    Electronic,
    Furniture,
    Clothing,
}

impl ProductType {
    /// `<option>` value, also the value sent in JSON
    pub fn code(&self) -> &'static str {
        match self {
            ProductType::Electronic => "Electronic",
            ProductType::Furniture => "Furniture",
            ProductType::Clothing => "Clothing",
        }
    }

    pub fn all() -> Vec<ProductType> {
        vec![
            ProductType::Electronic,
            ProductType::Furniture,
            ProductType::Clothing,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Electronic" => Some(ProductType::Electronic),
            "Furniture" => Some(ProductType::Furniture),
            "Clothing" => Some(ProductType::Clothing),
            _ => None,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Body of a CREATED response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductResponse {
    pub id: String,
}

/// Body of an error response; INVALID_REQUEST messages are shown verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
