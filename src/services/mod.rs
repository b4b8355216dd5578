use actix_web::{get, HttpRequest, HttpResponse, Responder};

pub mod db_models;
pub mod db_utils;
pub mod messages;
pub mod insertable;
pub mod pg_handling;
pub mod redis_handling;

use crate::services::db_utils::AppState;
use crate::services::messages::GetRoleId;
use crate::types::{ROLE_FALLBACK, ROLE_KITCHEN, ROLE_MANAGER, ROLE_WAITER, SESSION_TOKEN_HEADER};

#[get("/")]
pub async fn home_page() -> impl Responder {
    HttpResponse::Ok().body("Tableside service prototype")
}

// Role-gated routes answer a generic 404 so they do not leak which resources
// exist to callers without the right role.
pub(crate) fn generic_not_found() -> HttpResponse {
    HttpResponse::NotFound().json("Not found")
}

pub(crate) fn is_staff(role_id: i32) -> bool {
    matches!(role_id, ROLE_WAITER | ROLE_KITCHEN | ROLE_MANAGER)
}

/// Resolves the caller's session token header to a user id, if any.
pub(crate) fn session_user_id(state: &AppState, req: &HttpRequest) -> Option<i64> {
    let token = req.headers().get(SESSION_TOKEN_HEADER)?.to_str().ok()?;

    redis_handling::session_user(&state.redis_db, token)
        .ok()
        .flatten()
}

/// Role of the caller. Missing sessions and deleted users act as customers.
pub(crate) async fn caller_role(state: &AppState, req: &HttpRequest) -> i32 {
    let Some(user_id) = session_user_id(state, req) else {
        return ROLE_FALLBACK;
    };

    match state.pg_db.send(GetRoleId(user_id)).await {
        Ok(Ok(role_id)) => role_id,
        _ => ROLE_FALLBACK,
    }
}

// sub-route "/auth"
pub mod auth_route {
    use actix_web::web::{Data, Json};
    use actix_web::{post, HttpRequest, HttpResponse, Responder};
    use diesel::result::{DatabaseErrorKind, Error};
    use serde::Deserialize;
    use serde_json::json;
    use tracing::warn;

    use crate::services::db_utils::AppState;
    use crate::services::messages::{CreateUser, FetchUserByUsername};
    use crate::services::redis_handling;
    use crate::types::{ROLE_CUSTOMER, SESSION_TOKEN_HEADER};

    #[derive(Deserialize)]
    pub struct RegisterBody {
        pub name: String,
        pub username: String,
        pub password: String,
        pub email: String,
    }

    #[post("/register")]
    pub async fn register(state: Data<AppState>, body: Json<RegisterBody>) -> impl Responder {
        if body.username.is_empty() {
            return HttpResponse::BadRequest().json("Username is required.");
        }
        if body.password.is_empty() {
            return HttpResponse::BadRequest().json("Password is required.");
        }

        let hashed = match bcrypt::hash(&body.password, bcrypt::DEFAULT_COST) {
            Ok(val) => val,
            Err(_) => return HttpResponse::InternalServerError().json("Unable to hash password"),
        };

        match state
            .pg_db
            .send(CreateUser {
                name: body.name.clone(),
                username: body.username.clone(),
                password: hashed,
                role_id: ROLE_CUSTOMER,
                email: body.email.clone(),
            })
            .await
        {
            Ok(Ok(user_id)) => HttpResponse::Ok().json(json!({ "user_id": user_id })),
            Ok(Err(Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _))) => {
                HttpResponse::Conflict()
                    .json(format!("User {} is already registered", body.username))
            }
            Ok(Err(err)) => HttpResponse::InternalServerError().json(err.to_string()),
            _ => HttpResponse::InternalServerError().json("Unable to register user"),
        }
    }

    #[derive(Deserialize)]
    pub struct LoginBody {
        pub username: String,
        pub password: String,
    }

    #[post("/login")]
    pub async fn login(state: Data<AppState>, body: Json<LoginBody>) -> impl Responder {
        let user = match state
            .pg_db
            .send(FetchUserByUsername(body.username.clone()))
            .await
        {
            Ok(Ok(user)) => user,
            Ok(Err(_)) => {
                warn!("login attempt for unknown username '{}'", body.username);
                return HttpResponse::Unauthorized().json("Incorrect username/password.");
            }
            _ => return HttpResponse::InternalServerError().json("Unable to fetch user"),
        };

        if !bcrypt::verify(&body.password, &user.password).unwrap_or(false) {
            return HttpResponse::Unauthorized().json("Incorrect username/password.");
        }

        match redis_handling::create_session(&state.redis_db, user.id) {
            Ok(token) => HttpResponse::Ok().json(json!({ "token": token })),
            Err(err) => HttpResponse::InternalServerError().json(err),
        }
    }

    #[post("/logout")]
    pub async fn logout(state: Data<AppState>, req: HttpRequest) -> impl Responder {
        let token = match req
            .headers()
            .get(SESSION_TOKEN_HEADER)
            .and_then(|val| val.to_str().ok())
        {
            Some(token) => token,
            None => return HttpResponse::Ok().json("Logged out"),
        };

        match redis_handling::drop_session(&state.redis_db, token) {
            Ok(()) => HttpResponse::Ok().json("Logged out"),
            Err(err) => HttpResponse::InternalServerError().json(err),
        }
    }
}

// sub-route "/menu"
pub mod menu_route {
    use actix_web::web::{Data, Json, Path};
    use actix_web::{get, post, put, HttpRequest, HttpResponse, Responder};
    use serde::Deserialize;

    use crate::services::db_utils::AppState;
    use crate::services::messages::{
        CreateMenuItem, FetchMenuItem, FetchMenuItems, UpdateMenuItem,
    };
    use crate::services::{caller_role, generic_not_found};
    use crate::types::ROLE_MANAGER;

    #[get("")]
    pub async fn view_menu(state: Data<AppState>) -> impl Responder {
        match state.pg_db.send(FetchMenuItems).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(_)) => HttpResponse::NotFound().json("No menu items found"),
            Err(err) => {
                HttpResponse::InternalServerError().json(format!("Unable to fetch menu: {err}"))
            }
        }
    }

    #[get("/item/{id}")]
    pub async fn get_menu_item(state: Data<AppState>, path: Path<i64>) -> impl Responder {
        match state.pg_db.send(FetchMenuItem(path.into_inner())).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(_)) => HttpResponse::NotFound().json("Menu item with that id not found"),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to fetch menu item: {err}")),
        }
    }

    #[derive(Deserialize)]
    pub struct MenuItemBody {
        pub name: String,
        pub description: String,
        /// Price in cents.
        pub price: i32,
        pub ingredients: String,
        pub calorie: i32,
        pub image_url: Option<String>,
        pub category: String,
    }

    #[post("/item")]
    pub async fn create_menu_item(
        state: Data<AppState>,
        req: HttpRequest,
        body: Json<MenuItemBody>,
    ) -> impl Responder {
        if caller_role(&state, &req).await != ROLE_MANAGER {
            return generic_not_found();
        }

        if body.name.is_empty() {
            return HttpResponse::BadRequest().json("Name is required.");
        }

        let body = body.into_inner();

        match state
            .pg_db
            .send(CreateMenuItem {
                name: body.name,
                description: body.description,
                price: body.price,
                ingredients: body.ingredients,
                calorie: body.calorie,
                image_url: body.image_url,
                category: body.category,
            })
            .await
        {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(err)) => HttpResponse::InternalServerError().json(err.to_string()),
            _ => HttpResponse::InternalServerError().json("Unable to insert new menu item"),
        }
    }

    #[put("/item/{id}")]
    pub async fn update_menu_item(
        state: Data<AppState>,
        req: HttpRequest,
        path: Path<i64>,
        body: Json<MenuItemBody>,
    ) -> impl Responder {
        if caller_role(&state, &req).await != ROLE_MANAGER {
            return generic_not_found();
        }

        let body = body.into_inner();
        let menu_item_id = path.into_inner();

        match state
            .pg_db
            .send(UpdateMenuItem {
                menu_item_id,
                name: body.name,
                description: body.description,
                price: body.price,
                ingredients: body.ingredients,
                calorie: body.calorie,
                image_url: body.image_url,
                category: body.category,
            })
            .await
        {
            Ok(Ok(())) => {
                HttpResponse::Ok().json(format!("Menu item {menu_item_id} is updated"))
            }
            Ok(Err(_)) => HttpResponse::NotFound().json("Menu item with that id not found"),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }
}

// sub-route "/order"
pub mod order_route {
    use actix_web::web::{Data, Json, Path};
    use actix_web::{delete, get, post, put, HttpRequest, HttpResponse, Responder};
    use serde::Deserialize;
    use serde_json::json;

    use crate::services::db_utils::AppState;
    use crate::services::messages::{
        DeleteOrder, FetchOrder, FetchOrderItems, FetchUser, FetchUserOrders, FetchOrders,
        OrderLine, PayOrder, PlaceOrder, UpdateOrderStatus,
    };
    use crate::services::{caller_role, generic_not_found, is_staff, session_user_id};
    use crate::tables::MAX_TABLE;

    #[derive(Deserialize)]
    pub struct PlaceOrderBody {
        pub table_number: i32,
        pub lines: Vec<OrderLine>,
    }

    #[post("/place")]
    pub async fn place_order(
        state: Data<AppState>,
        req: HttpRequest,
        body: Json<PlaceOrderBody>,
    ) -> impl Responder {
        let Some(user_id) = session_user_id(&state, &req) else {
            return generic_not_found();
        };

        if !(1..=MAX_TABLE).contains(&body.table_number) {
            return HttpResponse::BadRequest()
                .json(format!("Table number must be in range 1..={MAX_TABLE}"));
        }
        if body.lines.iter().any(|line| line.quantity < 1) {
            return HttpResponse::BadRequest().json("Quantity must be a positive integer");
        }

        let user = match state.pg_db.send(FetchUser(user_id)).await {
            Ok(Ok(user)) => user,
            Ok(Err(_)) => return generic_not_found(),
            Err(err) => {
                return HttpResponse::InternalServerError()
                    .json(format!("Unable to perform action: {err}"))
            }
        };

        match state
            .pg_db
            .send(PlaceOrder {
                email: user.email,
                table_number: body.table_number,
                user_id,
                lines: body.lines.clone(),
            })
            .await
        {
            Ok(Ok(order_id)) => HttpResponse::Ok().json(json!({ "order_id": order_id })),
            Ok(Err(err)) => HttpResponse::InternalServerError().json(err.to_string()),
            _ => HttpResponse::InternalServerError().json("Unable to place order"),
        }
    }

    #[get("/all")]
    pub async fn view_orders(state: Data<AppState>, req: HttpRequest) -> impl Responder {
        if !is_staff(caller_role(&state, &req).await) {
            return generic_not_found();
        }

        match state.pg_db.send(FetchOrders).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(_)) => HttpResponse::NotFound().json("Orders not found"),
            _ => HttpResponse::InternalServerError().json("Unable to retrieve orders"),
        }
    }

    #[get("/my")]
    pub async fn my_orders(state: Data<AppState>, req: HttpRequest) -> impl Responder {
        let Some(user_id) = session_user_id(&state, &req) else {
            return generic_not_found();
        };

        match state.pg_db.send(FetchUserOrders(user_id)).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(_)) => HttpResponse::NotFound().json("Orders not found"),
            _ => HttpResponse::InternalServerError().json("Unable to retrieve orders"),
        }
    }

    #[get("/{order_id}")]
    pub async fn get_order(
        state: Data<AppState>,
        req: HttpRequest,
        path: Path<i64>,
    ) -> impl Responder {
        if !is_staff(caller_role(&state, &req).await) {
            return generic_not_found();
        }

        match state.pg_db.send(FetchOrder(path.into_inner())).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(_)) => HttpResponse::NotFound().json("Order with that id not found"),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }

    #[get("/{order_id}/items")]
    pub async fn order_items(
        state: Data<AppState>,
        req: HttpRequest,
        path: Path<i64>,
    ) -> impl Responder {
        if !is_staff(caller_role(&state, &req).await) {
            return generic_not_found();
        }

        match state.pg_db.send(FetchOrderItems(path.into_inner())).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(_)) => HttpResponse::NotFound().json("Order was not found"),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }

    #[derive(Deserialize)]
    pub struct UpdateStatusBody {
        pub status: String,
    }

    #[put("/{order_id}/status")]
    pub async fn update_order_status(
        state: Data<AppState>,
        req: HttpRequest,
        path: Path<i64>,
        body: Json<UpdateStatusBody>,
    ) -> impl Responder {
        if !is_staff(caller_role(&state, &req).await) {
            return generic_not_found();
        }

        let order_id = path.into_inner();

        match state
            .pg_db
            .send(UpdateOrderStatus {
                order_id,
                status: body.status.clone(),
            })
            .await
        {
            Ok(Ok(())) => HttpResponse::Ok().json(format!("Order {order_id} is updated")),
            Ok(Err(_)) => HttpResponse::NotFound().json("Order was not found"),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }

    #[post("/{order_id}/pay")]
    pub async fn pay_for_order(
        state: Data<AppState>,
        req: HttpRequest,
        path: Path<i64>,
    ) -> impl Responder {
        if session_user_id(&state, &req).is_none() {
            return generic_not_found();
        }

        let order_id = path.into_inner();

        match state.pg_db.send(PayOrder(order_id)).await {
            Ok(Ok(())) => {
                HttpResponse::Ok().json(format!("Order with id {order_id} is successfully paid"))
            }
            Ok(Err(_)) => HttpResponse::NotFound().json("Order was not found"),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }

    #[delete("/{order_id}")]
    pub async fn delete_order(
        state: Data<AppState>,
        req: HttpRequest,
        path: Path<i64>,
    ) -> impl Responder {
        if !is_staff(caller_role(&state, &req).await) {
            return generic_not_found();
        }

        let order_id = path.into_inner();

        match state.pg_db.send(DeleteOrder(order_id)).await {
            Ok(Ok(())) => HttpResponse::Ok().json(format!("Order {order_id} is deleted")),
            Ok(Err(err)) => HttpResponse::InternalServerError().json(err.to_string()),
            _ => HttpResponse::InternalServerError().json("Unable to delete order"),
        }
    }
}

// sub-route "/waiter"
pub mod waiter_route {
    use actix_web::web::{Data, Json, Path};
    use actix_web::{get, post, HttpRequest, HttpResponse, Responder};
    use serde_json::json;

    use crate::services::db_utils::AppState;
    use crate::services::messages::{
        AssignTables, FetchAssignedTables, FetchWaiterCalls, ToggleNeedsWaiter, UnassignTables,
    };
    use crate::services::{caller_role, generic_not_found, is_staff, session_user_id};
    use crate::tables::{decode_tables, encode_tables};
    use crate::types::{ROLE_MANAGER, ROLE_WAITER};

    #[post("/call")]
    pub async fn call_waiter(state: Data<AppState>, req: HttpRequest) -> impl Responder {
        let Some(user_id) = session_user_id(&state, &req) else {
            return generic_not_found();
        };

        match state.pg_db.send(ToggleNeedsWaiter(user_id)).await {
            Ok(Ok(needs_waiter)) => {
                HttpResponse::Ok().json(json!({ "needs_waiter": needs_waiter }))
            }
            Ok(Err(_)) => generic_not_found(),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }

    #[get("/calls")]
    pub async fn waiter_calls(state: Data<AppState>, req: HttpRequest) -> impl Responder {
        if !is_staff(caller_role(&state, &req).await) {
            return generic_not_found();
        }

        match state.pg_db.send(FetchWaiterCalls).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(_)) => HttpResponse::NotFound().json("Waiter calls not found"),
            _ => HttpResponse::InternalServerError().json("Unable to retrieve waiter calls"),
        }
    }

    #[get("/{waiter_id}/tables")]
    pub async fn assigned_tables(
        state: Data<AppState>,
        req: HttpRequest,
        path: Path<i64>,
    ) -> impl Responder {
        if !is_staff(caller_role(&state, &req).await) {
            return generic_not_found();
        }

        match state.pg_db.send(FetchAssignedTables(path.into_inner())).await {
            Ok(Ok(mask)) => HttpResponse::Ok().json(decode_tables(mask)),
            Ok(Err(_)) => HttpResponse::NotFound().json("Waiter with that id not found"),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }

    #[post("/{waiter_id}/tables/assign")]
    pub async fn assign_tables(
        state: Data<AppState>,
        req: HttpRequest,
        path: Path<i64>,
        body: Json<Vec<i32>>,
    ) -> impl Responder {
        let role = caller_role(&state, &req).await;
        if role != ROLE_WAITER && role != ROLE_MANAGER {
            return generic_not_found();
        }

        let tables = body.into_inner().into_iter().collect();
        if let Err(err) = encode_tables(&tables) {
            return HttpResponse::BadRequest().json(err.to_string());
        }

        match state
            .pg_db
            .send(AssignTables {
                waiter_id: path.into_inner(),
                tables,
            })
            .await
        {
            Ok(Ok(mask)) => HttpResponse::Ok().json(decode_tables(mask)),
            Ok(Err(_)) => HttpResponse::NotFound().json("Waiter with that id not found"),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }

    #[post("/{waiter_id}/tables/unassign")]
    pub async fn unassign_tables(
        state: Data<AppState>,
        req: HttpRequest,
        path: Path<i64>,
        body: Json<Vec<i32>>,
    ) -> impl Responder {
        let role = caller_role(&state, &req).await;
        if role != ROLE_WAITER && role != ROLE_MANAGER {
            return generic_not_found();
        }

        let tables = body.into_inner().into_iter().collect();
        if let Err(err) = encode_tables(&tables) {
            return HttpResponse::BadRequest().json(err.to_string());
        }

        match state
            .pg_db
            .send(UnassignTables {
                waiter_id: path.into_inner(),
                tables,
            })
            .await
        {
            Ok(Ok(mask)) => HttpResponse::Ok().json(decode_tables(mask)),
            Ok(Err(_)) => HttpResponse::NotFound().json("Waiter with that id not found"),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }
}

// sub-route "/admin"
pub mod admin_route {
    use actix_web::web::{Data, Json, Path};
    use actix_web::{delete, get, put, HttpRequest, HttpResponse, Responder};
    use serde::Deserialize;

    use crate::services::db_utils::AppState;
    use crate::services::messages::{DeleteUser, FetchUsers, UpdateUserRole};
    use crate::services::{caller_role, generic_not_found};
    use crate::types::{ROLE_CUSTOMER, ROLE_MANAGER};

    #[get("/users")]
    pub async fn list_users(state: Data<AppState>, req: HttpRequest) -> impl Responder {
        if caller_role(&state, &req).await != ROLE_MANAGER {
            return generic_not_found();
        }

        match state.pg_db.send(FetchUsers).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(_)) => HttpResponse::NotFound().json("Users not found"),
            _ => HttpResponse::InternalServerError().json("Unable to retrieve users"),
        }
    }

    #[delete("/users/{user_id}")]
    pub async fn delete_user(
        state: Data<AppState>,
        req: HttpRequest,
        path: Path<i64>,
    ) -> impl Responder {
        if caller_role(&state, &req).await != ROLE_MANAGER {
            return generic_not_found();
        }

        let user_id = path.into_inner();

        match state.pg_db.send(DeleteUser(user_id)).await {
            Ok(Ok(())) => HttpResponse::Ok().json(format!("User {user_id} is deleted")),
            Ok(Err(err)) => HttpResponse::InternalServerError().json(err.to_string()),
            _ => HttpResponse::InternalServerError().json("Unable to delete user"),
        }
    }

    #[derive(Deserialize)]
    pub struct ChangeRoleBody {
        pub role_id: i32,
    }

    #[put("/users/{user_id}/role")]
    pub async fn change_user_role(
        state: Data<AppState>,
        req: HttpRequest,
        path: Path<i64>,
        body: Json<ChangeRoleBody>,
    ) -> impl Responder {
        if caller_role(&state, &req).await != ROLE_MANAGER {
            return generic_not_found();
        }

        if !(ROLE_CUSTOMER..=ROLE_MANAGER).contains(&body.role_id) {
            return HttpResponse::BadRequest().json("Unknown role id");
        }

        let user_id = path.into_inner();

        match state
            .pg_db
            .send(UpdateUserRole {
                user_id,
                role_id: body.role_id,
            })
            .await
        {
            Ok(Ok(())) => HttpResponse::Ok().json(format!("Role of user {user_id} is updated")),
            Ok(Err(_)) => HttpResponse::NotFound().json("User with that id not found"),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to perform action: {err}")),
        }
    }
}

// sub-route "/test"
pub mod test_route {
    use actix_web::web::Data;
    use actix_web::{get, post, HttpResponse, Responder};
    use diesel::result::{DatabaseErrorKind, Error};

    use crate::services::db_utils::AppState;
    use crate::services::messages::{CreateMenuItem, CreateUser};
    use crate::types::ROLE_MANAGER;

    #[get("/healthcheck")]
    pub async fn healthcheck() -> impl Responder {
        HttpResponse::Ok().body("I'm alive!")
    }

    #[post("/seed-demo-data")]
    pub async fn seed_demo_data(state: Data<AppState>) -> impl Responder {
        let demo_items = [
            ("Cheesy Fries", "Fries with cheese melted on top.", 699, "Potatoes, Mozeralla Cheese", 500, "starter"),
            ("Curly Fries", "Potatoes sliced with a curly fry clutter.", 599, "Potatoes", 400, "main"),
            ("Standard Cut Fries", "Potatoes evenly cut medium-thin.", 399, "Potatoes", 200, "drink"),
        ];

        for (name, description, price, ingredients, calorie, category) in demo_items {
            let sent = state
                .pg_db
                .send(CreateMenuItem {
                    name: name.to_owned(),
                    description: description.to_owned(),
                    price,
                    ingredients: ingredients.to_owned(),
                    calorie,
                    image_url: Some("static/images/testFood.jpg".to_owned()),
                    category: category.to_owned(),
                })
                .await;

            match sent {
                Ok(Ok(_)) => {}
                _ => return HttpResponse::InternalServerError().json("Unable to seed menu items"),
            }
        }

        let password = match bcrypt::hash("Password123!", bcrypt::DEFAULT_COST) {
            Ok(val) => val,
            Err(_) => return HttpResponse::InternalServerError().json("Unable to hash password"),
        };

        match state
            .pg_db
            .send(CreateUser {
                name: "John Doe".to_owned(),
                username: "manager".to_owned(),
                password,
                role_id: ROLE_MANAGER,
                email: "owner@email.com".to_owned(),
            })
            .await
        {
            Ok(Ok(_)) => HttpResponse::Ok().json("Demo data is seeded"),
            // Seeding twice is fine, the manager account already exists.
            Ok(Err(Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _))) => {
                HttpResponse::Ok().json("Demo data is seeded")
            }
            Ok(Err(err)) => HttpResponse::InternalServerError().json(err.to_string()),
            _ => HttpResponse::InternalServerError().json("Unable to seed manager account"),
        }
    }
}
