use std::collections::BTreeSet;

use actix::Message;
use diesel::QueryResult;
use serde::Deserialize;

use crate::services::db_models::{MenuItem, Order, User, WaiterCall};

// users

#[derive(Message)]
#[rtype(result = "QueryResult<i64>")]
pub struct CreateUser {
    pub name: String,
    pub username: String,
    pub password: String,
    pub role_id: i32,
    pub email: String,
}

#[derive(Message)]
#[rtype(result = "QueryResult<User>")]
pub struct FetchUser(pub i64);

#[derive(Message)]
#[rtype(result = "QueryResult<User>")]
pub struct FetchUserByUsername(pub String);

#[derive(Message)]
#[rtype(result = "QueryResult<Vec<User>>")]
pub struct FetchUsers;

#[derive(Message)]
#[rtype(result = "QueryResult<()>")]
pub struct DeleteUser(pub i64);

#[derive(Message)]
#[rtype(result = "QueryResult<()>")]
pub struct UpdateUserRole {
    pub user_id: i64,
    pub role_id: i32,
}

#[derive(Message)]
#[rtype(result = "QueryResult<i32>")]
pub struct GetRoleId(pub i64);

#[derive(Message)]
#[rtype(result = "QueryResult<bool>")]
pub struct ToggleNeedsWaiter(pub i64);

#[derive(Message)]
#[rtype(result = "QueryResult<Vec<WaiterCall>>")]
pub struct FetchWaiterCalls;

// waiter-table assignment

#[derive(Message)]
#[rtype(result = "QueryResult<i32>")]
pub struct AssignTables {
    pub waiter_id: i64,
    pub tables: BTreeSet<i32>,
}

#[derive(Message)]
#[rtype(result = "QueryResult<i32>")]
pub struct UnassignTables {
    pub waiter_id: i64,
    pub tables: BTreeSet<i32>,
}

#[derive(Message)]
#[rtype(result = "QueryResult<i32>")]
pub struct FetchAssignedTables(pub i64);

// menu

#[derive(Message)]
#[rtype(result = "QueryResult<MenuItem>")]
pub struct CreateMenuItem {
    pub name: String,
    pub description: String,
    pub price: i32,
    pub ingredients: String,
    pub calorie: i32,
    pub image_url: Option<String>,
    pub category: String,
}

#[derive(Message)]
#[rtype(result = "QueryResult<()>")]
pub struct UpdateMenuItem {
    pub menu_item_id: i64,
    pub name: String,
    pub description: String,
    pub price: i32,
    pub ingredients: String,
    pub calorie: i32,
    pub image_url: Option<String>,
    pub category: String,
}

#[derive(Message)]
#[rtype(result = "QueryResult<Vec<MenuItem>>")]
pub struct FetchMenuItems;

#[derive(Message)]
#[rtype(result = "QueryResult<MenuItem>")]
pub struct FetchMenuItem(pub i64);

// orders

/// One line of an incoming order: a menu item referenced by name and how
/// many of it were ordered.
#[derive(Deserialize, Debug, Clone)]
pub struct OrderLine {
    pub name: String,
    pub quantity: i32,
}

#[derive(Message)]
#[rtype(result = "QueryResult<i64>")]
pub struct PlaceOrder {
    pub email: String,
    pub table_number: i32,
    pub user_id: i64,
    pub lines: Vec<OrderLine>,
}

#[derive(Message)]
#[rtype(result = "QueryResult<Vec<Order>>")]
pub struct FetchOrders;

#[derive(Message)]
#[rtype(result = "QueryResult<Vec<Order>>")]
pub struct FetchUserOrders(pub i64);

#[derive(Message)]
#[rtype(result = "QueryResult<Order>")]
pub struct FetchOrder(pub i64);

#[derive(Message)]
#[rtype(result = "QueryResult<Vec<(String, i32)>>")]
pub struct FetchOrderItems(pub i64);

#[derive(Message)]
#[rtype(result = "QueryResult<()>")]
pub struct UpdateOrderStatus {
    pub order_id: i64,
    pub status: String,
}

#[derive(Message)]
#[rtype(result = "QueryResult<()>")]
pub struct PayOrder(pub i64);

#[derive(Message)]
#[rtype(result = "QueryResult<()>")]
pub struct DeleteOrder(pub i64);
