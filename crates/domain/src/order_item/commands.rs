//! Order item commands.

use rust_decimal::Decimal;
use serde::Deserialize;
use store::{OrderItemId, ProductId};

use crate::error::ValidationError;

use super::{Discount, Quantity};

/// Raw order item fields as submitted by a client.
///
/// Every field is optional here; each command decides which are required.
/// `null` is treated the same as an absent field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderItemInput {
    pub product: Option<String>,
    pub quantity: Option<i64>,
    pub discount: Option<Decimal>,
}

impl OrderItemInput {
    /// Returns the product reference, treating an empty string as absent.
    fn product_ref(&self) -> Option<&str> {
        self.product.as_deref().filter(|p| !p.is_empty())
    }
}

fn parse_product_id(value: &str) -> Result<ProductId, ValidationError> {
    value.parse().map_err(|_| ValidationError::InvalidId {
        field: "product",
        value: value.to_string(),
    })
}

/// Fields shared by create and replace: product and quantity required,
/// discount defaulting to zero.
fn required_fields(
    input: &OrderItemInput,
) -> Result<(ProductId, Quantity, Discount), ValidationError> {
    let (Some(product), Some(quantity)) = (input.product_ref(), input.quantity) else {
        return Err(ValidationError::MissingRequiredFields);
    };

    let product = parse_product_id(product)?;
    let quantity = Quantity::new(quantity)?;
    let discount = match input.discount {
        Some(amount) => Discount::new(amount)?,
        None => Discount::default(),
    };

    Ok((product, quantity, discount))
}

/// Command to create a new order item.
#[derive(Debug, Clone)]
pub struct CreateOrderItem {
    pub product: ProductId,
    pub quantity: Quantity,
    pub discount: Discount,
}

impl CreateOrderItem {
    /// Creates a new CreateOrderItem command.
    pub fn new(product: ProductId, quantity: Quantity, discount: Discount) -> Self {
        Self {
            product,
            quantity,
            discount,
        }
    }

    /// Validates client input into a create command.
    pub fn from_input(input: &OrderItemInput) -> Result<Self, ValidationError> {
        let (product, quantity, discount) = required_fields(input)?;
        Ok(Self::new(product, quantity, discount))
    }
}

/// Command to replace every field of an existing order item.
///
/// An omitted discount resets the stored discount to zero.
#[derive(Debug, Clone)]
pub struct ReplaceOrderItem {
    pub order_item_id: OrderItemId,
    pub product: ProductId,
    pub quantity: Quantity,
    pub discount: Discount,
}

impl ReplaceOrderItem {
    /// Creates a new ReplaceOrderItem command.
    pub fn new(
        order_item_id: OrderItemId,
        product: ProductId,
        quantity: Quantity,
        discount: Discount,
    ) -> Self {
        Self {
            order_item_id,
            product,
            quantity,
            discount,
        }
    }

    /// Validates client input into a replace command.
    pub fn from_input(
        order_item_id: OrderItemId,
        input: &OrderItemInput,
    ) -> Result<Self, ValidationError> {
        let (product, quantity, discount) = required_fields(input)?;
        Ok(Self::new(order_item_id, product, quantity, discount))
    }
}

/// Command to overwrite a subset of an order item's fields.
///
/// Absent fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct PatchOrderItem {
    pub order_item_id: OrderItemId,
    pub product: Option<ProductId>,
    pub quantity: Option<Quantity>,
    pub discount: Option<Discount>,
}

impl PatchOrderItem {
    /// Creates a patch that changes nothing; set fields with the builder methods.
    pub fn new(order_item_id: OrderItemId) -> Self {
        Self {
            order_item_id,
            ..Self::default()
        }
    }

    pub fn product(mut self, product: ProductId) -> Self {
        self.product = Some(product);
        self
    }

    pub fn quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn discount(mut self, discount: Discount) -> Self {
        self.discount = Some(discount);
        self
    }

    /// Validates client input into a patch command.
    pub fn from_input(
        order_item_id: OrderItemId,
        input: &OrderItemInput,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            order_item_id,
            product: input.product_ref().map(parse_product_id).transpose()?,
            quantity: input.quantity.map(Quantity::new).transpose()?,
            discount: input.discount.map(Discount::new).transpose()?,
        })
    }
}
