use serde::{Deserialize, Serialize};

/// Покупатель из формы оформления заказа
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderUser {
    pub name: String,
    pub tel: String,
    pub email: String,
    pub address: String,
    pub payment: String,
}

/// Строка заказа: товар и купленное количество
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// ID товара
    pub id: String,
    pub category: String,
    pub title: String,
    /// Цена за единицу
    pub price: f64,
    pub quantity: u32,

    #[serde(default)]
    pub origin_price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: String,
}

impl OrderLineItem {
    pub fn amount(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user: OrderUser,
    #[serde(default)]
    pub products: Vec<OrderLineItem>,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub total: f64,
    /// Unix-время в секундах
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl Order {
    pub fn status_label(&self) -> &'static str {
        if self.paid {
            "已處理"
        } else {
            "未處理"
        }
    }

    /// "title x quantity" for every line, as shown in the admin table
    pub fn product_lines(&self) -> Vec<String> {
        self.products
            .iter()
            .map(|p| format!("{} x {}", p.title, p.quantity))
            .collect()
    }
}

/// GET/PUT/DELETE admin/{path}/orders
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderListResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatus {
    pub id: String,
    pub paid: bool,
}

/// PUT admin/{path}/orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub data: OrderStatus,
}

impl UpdateOrderStatusRequest {
    pub fn new(id: impl Into<String>, paid: bool) -> Self {
        Self {
            data: OrderStatus {
                id: id.into(),
                paid,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER_JSON: &str = r#"{
        "status": true,
        "orders": [{
            "id": "o1",
            "createdAt": 1710511346,
            "updatedAt": 1710511346,
            "paid": false,
            "total": 2200,
            "quantity": 2,
            "user": {
                "name": "六角學院",
                "tel": "07-5313506",
                "email": "hexschool@hexschool.com",
                "address": "高雄市六角學院路",
                "payment": "ATM"
            },
            "products": [{
                "id": "p1",
                "category": "床架",
                "title": "Antony 雙人床架",
                "price": 1100,
                "origin_price": 1500,
                "quantity": 2,
                "images": "https://example.com/a.png",
                "description": ""
            }]
        }]
    }"#;

    #[test]
    fn test_deserialize_order_list() {
        let resp: OrderListResponse = serde_json::from_str(ORDER_JSON).unwrap();
        assert_eq!(resp.orders.len(), 1);
        let order = &resp.orders[0];
        assert_eq!(order.created_at, 1710511346);
        assert_eq!(order.user.payment, "ATM");
        assert_eq!(order.products[0].amount(), 2200.0);
        assert_eq!(order.product_lines(), vec!["Antony 雙人床架 x 2"]);
        assert_eq!(order.status_label(), "未處理");
    }

    #[test]
    fn test_line_item_without_price_is_rejected() {
        let json = r#"{"id": "p1", "category": "x", "title": "A", "quantity": 1}"#;
        assert!(serde_json::from_str::<OrderLineItem>(json).is_err());
    }

    #[test]
    fn test_status_request_wire_format() {
        let req = UpdateOrderStatusRequest::new("o1", true);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({ "data": { "id": "o1", "paid": true } })
        );
    }
}
