use chrono::NaiveDateTime;
use diesel::Insertable;
use serde::Serialize;

use crate::schema::menu_items;
use crate::schema::order_items;
use crate::schema::orders;
use crate::schema::users;

#[derive(Insertable, Serialize, Clone)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub password: String,
    pub role_id: i32,
    pub email: String,
}

#[derive(Insertable, Serialize, Clone)]
#[diesel(table_name = menu_items)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: i32,
    pub ingredients: String,
    pub calorie: i32,
    pub image_url: Option<String>,
    pub category: String,
}

#[derive(Insertable, Serialize, Clone)]
#[diesel(table_name = orders)]
pub struct NewOrder {
    pub order_date: NaiveDateTime,
    pub email: String,
    pub table_number: i32,
    pub total: i32,
    pub user_id: i64,
    pub order_status: String,
}

#[derive(Insertable, Serialize, Clone)]
#[diesel(table_name = order_items)]
pub struct NewOrderItem {
    pub order_id: i64,
    pub menu_item_id: i64,
    pub quantity: i32,
}
