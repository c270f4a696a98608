use crate::domain::a001_product::Product;
use serde::{Deserialize, Serialize};

/// Позиция корзины; корзина хранится на стороне API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub quantity: u32,
    pub product: Product,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Every cart endpoint answers with the whole cart
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub carts: Vec<CartItem>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub final_total: f64,
}

impl CartResponse {
    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }

    pub fn find_by_product(&self, product_id: &str) -> Option<&CartItem> {
        self.carts.iter().find(|item| item.product.id == product_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItem {
    pub product_id: String,
    pub quantity: u32,
}

/// POST customer/{path}/carts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddCartItemRequest {
    pub data: AddCartItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCartItem {
    pub id: String,
    pub quantity: u32,
}

/// PATCH customer/{path}/carts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCartItemRequest {
    pub data: UpdateCartItem,
}

impl UpdateCartItemRequest {
    pub fn new(cart_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            data: UpdateCartItem {
                id: cart_id.into(),
                quantity,
            },
        }
    }
}

/// Какой запрос отправить при нажатии «加入購物車»
#[derive(Debug, Clone, PartialEq)]
pub enum CartChange {
    Add(AddCartItemRequest),
    Update(UpdateCartItemRequest),
}

/// A product already in the cart gets its quantity bumped instead of a second line
pub fn plan_add(cart: &CartResponse, product_id: &str) -> CartChange {
    match cart.find_by_product(product_id) {
        Some(item) => CartChange::Update(UpdateCartItemRequest::new(
            item.id.clone(),
            item.quantity.saturating_add(1),
        )),
        None => CartChange::Add(AddCartItemRequest {
            data: AddCartItem {
                product_id: product_id.to_string(),
                quantity: 1,
            },
        }),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuantityChange {
    Update(UpdateCartItemRequest),
    Remove { cart_id: String },
}

/// Quantity 0 removes the line, the API rejects it in PATCH
pub fn plan_quantity(cart_id: &str, quantity: u32) -> QuantityChange {
    if quantity == 0 {
        QuantityChange::Remove {
            cart_id: cart_id.to_string(),
        }
    } else {
        QuantityChange::Update(UpdateCartItemRequest::new(cart_id, quantity))
    }
}
