use chrono::NaiveDateTime;
use diesel::Queryable;
use serde::Serialize;

#[derive(Queryable, Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    #[serde(skip)]
    pub password: String,
    pub role_id: i32,
    pub email: String,
    pub needs_waiter: bool,
    pub tables_assigned: i32,
}

#[derive(Queryable, Debug, Clone, Serialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Price in cents.
    pub price: i32,
    pub ingredients: String,
    pub calorie: i32,
    pub image_url: Option<String>,
    pub category: String,
}

#[derive(Queryable, Debug, Clone, Serialize)]
pub struct Order {
    pub id: i64,
    pub order_date: NaiveDateTime,
    pub email: String,
    pub table_number: i32,
    /// Total in cents, fixed at creation time. Not recomputed when menu
    /// prices change afterwards.
    pub total: i32,
    pub user_id: i64,
    pub order_status: String,
}

/// A customer who pressed "call waiter", paired with the table of their
/// most recent order.
#[derive(Queryable, Debug, Clone, Serialize)]
pub struct WaiterCall {
    pub user_id: i64,
    pub name: String,
    pub table_number: i32,
}
