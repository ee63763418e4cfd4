//! Required-field rules shared by the form and the product API.

use super::aggregate::{ProductDto, ProductField, ProductType};

/// Fields left empty, in form order
pub fn missing_fields(dto: &ProductDto) -> Vec<ProductField> {
    ProductField::all()
        .into_iter()
        .filter(|f| dto.value(*f).is_empty())
        .collect()
}

/// Message returned by the server when required fields are missing
pub fn invalid_form_message(fields: &[ProductField]) -> String {
    let keys: Vec<&str> = fields.iter().map(|f| f.key()).collect();
    format!(
        "The form is invalid, the fields {} are required",
        keys.join(", ")
    )
}

/// Validate a create request the way the server does
pub fn validate(dto: &ProductDto) -> Result<(), String> {
    let missing = missing_fields(dto);
    if !missing.is_empty() {
        return Err(invalid_form_message(&missing));
    }
    if ProductType::from_code(&dto.product_type).is_none() {
        return Err(format!("The type {} is not supported", dto.product_type));
    }
    Ok(())
}
