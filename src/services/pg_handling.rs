use std::collections::HashMap;

use actix::Handler;
use diesel::{
    r2d2::{ConnectionManager, Pool, PooledConnection},
    result::{DatabaseErrorKind, Error},
    ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, QueryResult, RunQueryDsl,
};
use tracing::warn;

use crate::services::db_models::{MenuItem, Order, User, WaiterCall};
use crate::services::db_utils::PgActor;
use crate::services::messages::{
    AssignTables, CreateMenuItem, CreateUser, DeleteOrder, DeleteUser, FetchAssignedTables,
    FetchMenuItem, FetchMenuItems, FetchOrder, FetchOrderItems, FetchOrders, FetchUser,
    FetchUserByUsername, FetchUserOrders, FetchUsers, FetchWaiterCalls, GetRoleId, OrderLine,
    PayOrder, PlaceOrder, ToggleNeedsWaiter, UnassignTables, UpdateMenuItem, UpdateOrderStatus,
    UpdateUserRole,
};
use crate::tables::{add_tables, remove_tables};
use crate::types::{ORDER_CONFIRMED_STATUS, ORDER_PAID_STATUS, ROLE_FALLBACK};

fn establish_connection(
    pool: &Pool<ConnectionManager<PgConnection>>,
) -> Result<PooledConnection<ConnectionManager<PgConnection>>, Error> {
    match pool.get() {
        Ok(val) => Ok(val),
        Err(_) => Err(connection_err()),
    }
}

fn connection_err() -> Error {
    Error::DatabaseError(
        DatabaseErrorKind::ClosedConnection,
        Box::new("Failed to establish connection".to_owned()),
    )
}

fn get_db_err(msg: &str) -> Error {
    Error::DatabaseError(
        DatabaseErrorKind::UnableToSendCommand,
        Box::new(msg.to_owned()),
    )
}

/// A session may reference a user row that was deleted in the meantime; the
/// caller then acts as a plain customer instead of hitting an error.
fn role_or_default(found: Option<i32>) -> i32 {
    found.unwrap_or(ROLE_FALLBACK)
}

/// Sums price * quantity over the order lines. Lines naming items that are
/// not on the menu do not contribute to the total.
fn order_total(price_by_name: &HashMap<String, i32>, lines: &[OrderLine]) -> i32 {
    let mut total = 0;
    for line in lines {
        match price_by_name.get(&line.name) {
            Some(price) => total += price * line.quantity,
            None => warn!("ordered item '{}' is not on the menu, skipping", line.name),
        }
    }
    total
}

impl Handler<CreateUser> for PgActor {
    type Result = QueryResult<i64>;

    fn handle(&mut self, msg: CreateUser, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::users::{dsl::users, id};
        use crate::services::insertable::NewUser;

        let mut conn = establish_connection(&self.0)?;

        diesel::insert_into(users)
            .values(NewUser {
                name: msg.name,
                username: msg.username,
                password: msg.password,
                role_id: msg.role_id,
                email: msg.email,
            })
            .returning(id)
            .get_result::<i64>(&mut conn)
    }
}

impl Handler<FetchUser> for PgActor {
    type Result = QueryResult<User>;

    fn handle(&mut self, msg: FetchUser, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::users::dsl::users;

        let mut conn = establish_connection(&self.0)?;

        users.find(msg.0).first(&mut conn)
    }
}

impl Handler<FetchUserByUsername> for PgActor {
    type Result = QueryResult<User>;

    fn handle(&mut self, msg: FetchUserByUsername, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::users::{dsl::users, username};

        let mut conn = establish_connection(&self.0)?;

        users.filter(username.eq(msg.0)).first(&mut conn)
    }
}

impl Handler<FetchUsers> for PgActor {
    type Result = QueryResult<Vec<User>>;

    fn handle(&mut self, _msg: FetchUsers, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::users::dsl::users;

        let mut conn = establish_connection(&self.0)?;

        users.get_results::<User>(&mut conn)
    }
}

impl Handler<DeleteUser> for PgActor {
    type Result = QueryResult<()>;

    fn handle(&mut self, msg: DeleteUser, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::users::dsl::users;

        let mut conn = establish_connection(&self.0)?;

        diesel::delete(users.find(msg.0)).execute(&mut conn)?;

        Ok(())
    }
}

impl Handler<UpdateUserRole> for PgActor {
    type Result = QueryResult<()>;

    fn handle(&mut self, msg: UpdateUserRole, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::users::{dsl::users, role_id};

        let mut conn = establish_connection(&self.0)?;

        let affected = diesel::update(users.find(msg.user_id))
            .set(role_id.eq(msg.role_id))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}

impl Handler<GetRoleId> for PgActor {
    type Result = QueryResult<i32>;

    fn handle(&mut self, msg: GetRoleId, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::users::{dsl::users, role_id};

        let mut conn = establish_connection(&self.0)?;

        let found = users
            .find(msg.0)
            .select(role_id)
            .first::<i32>(&mut conn)
            .optional()?;

        Ok(role_or_default(found))
    }
}

impl Handler<ToggleNeedsWaiter> for PgActor {
    type Result = QueryResult<bool>;

    fn handle(&mut self, msg: ToggleNeedsWaiter, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::users::{dsl::users, needs_waiter};
        use diesel::dsl::not;

        let mut conn = establish_connection(&self.0)?;

        diesel::update(users.find(msg.0))
            .set(needs_waiter.eq(not(needs_waiter)))
            .returning(needs_waiter)
            .get_result::<bool>(&mut conn)
    }
}

impl Handler<FetchWaiterCalls> for PgActor {
    type Result = QueryResult<Vec<WaiterCall>>;

    fn handle(&mut self, _msg: FetchWaiterCalls, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::orders::{dsl::orders, order_date, table_number};
        use crate::schema::users::{dsl::users, id as user_pk, name, needs_waiter};

        let mut conn = establish_connection(&self.0)?;

        // One row per calling customer, with the table of their latest order.
        users
            .inner_join(orders)
            .filter(needs_waiter.eq(true))
            .distinct_on(user_pk)
            .order((user_pk.asc(), order_date.desc()))
            .select((user_pk, name, table_number))
            .get_results::<WaiterCall>(&mut conn)
    }
}

impl Handler<AssignTables> for PgActor {
    type Result = QueryResult<i32>;

    fn handle(&mut self, msg: AssignTables, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::users::{dsl::users, tables_assigned};

        let mut conn = establish_connection(&self.0)?;

        // Row lock so two concurrent edits of the same waiter's mask cannot
        // lose an update.
        conn.build_transaction().run(move |trx_conn| {
            let mask = users
                .find(msg.waiter_id)
                .select(tables_assigned)
                .for_update()
                .first::<i32>(trx_conn)?;

            let updated =
                add_tables(mask, &msg.tables).map_err(|err| get_db_err(&err.to_string()))?;

            diesel::update(users.find(msg.waiter_id))
                .set(tables_assigned.eq(updated))
                .execute(trx_conn)?;

            Ok(updated)
        })
    }
}

impl Handler<UnassignTables> for PgActor {
    type Result = QueryResult<i32>;

    fn handle(&mut self, msg: UnassignTables, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::users::{dsl::users, tables_assigned};

        let mut conn = establish_connection(&self.0)?;

        conn.build_transaction().run(move |trx_conn| {
            let mask = users
                .find(msg.waiter_id)
                .select(tables_assigned)
                .for_update()
                .first::<i32>(trx_conn)?;

            let updated =
                remove_tables(mask, &msg.tables).map_err(|err| get_db_err(&err.to_string()))?;

            diesel::update(users.find(msg.waiter_id))
                .set(tables_assigned.eq(updated))
                .execute(trx_conn)?;

            Ok(updated)
        })
    }
}

impl Handler<FetchAssignedTables> for PgActor {
    type Result = QueryResult<i32>;

    fn handle(&mut self, msg: FetchAssignedTables, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::users::{dsl::users, tables_assigned};

        let mut conn = establish_connection(&self.0)?;

        users
            .find(msg.0)
            .select(tables_assigned)
            .first::<i32>(&mut conn)
    }
}

impl Handler<CreateMenuItem> for PgActor {
    type Result = QueryResult<MenuItem>;

    fn handle(&mut self, msg: CreateMenuItem, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::menu_items::dsl::menu_items;
        use crate::services::insertable::NewMenuItem;

        let mut conn = establish_connection(&self.0)?;

        diesel::insert_into(menu_items)
            .values(NewMenuItem {
                name: msg.name,
                description: msg.description,
                price: msg.price,
                ingredients: msg.ingredients,
                calorie: msg.calorie,
                image_url: msg.image_url,
                category: msg.category,
            })
            .get_result::<MenuItem>(&mut conn)
    }
}

impl Handler<UpdateMenuItem> for PgActor {
    type Result = QueryResult<()>;

    fn handle(&mut self, msg: UpdateMenuItem, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::menu_items::{
            calorie, category, description, dsl::menu_items, image_url, ingredients, name, price,
        };

        let mut conn = establish_connection(&self.0)?;

        let affected = diesel::update(menu_items.find(msg.menu_item_id))
            .set((
                name.eq(msg.name),
                description.eq(msg.description),
                price.eq(msg.price),
                ingredients.eq(msg.ingredients),
                calorie.eq(msg.calorie),
                image_url.eq(msg.image_url),
                category.eq(msg.category),
            ))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}

impl Handler<FetchMenuItems> for PgActor {
    type Result = QueryResult<Vec<MenuItem>>;

    fn handle(&mut self, _msg: FetchMenuItems, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::menu_items::dsl::menu_items;

        let mut conn = establish_connection(&self.0)?;

        menu_items.get_results::<MenuItem>(&mut conn)
    }
}

impl Handler<FetchMenuItem> for PgActor {
    type Result = QueryResult<MenuItem>;

    fn handle(&mut self, msg: FetchMenuItem, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::menu_items::dsl::menu_items;

        let mut conn = establish_connection(&self.0)?;

        menu_items.find(msg.0).first(&mut conn)
    }
}

impl Handler<PlaceOrder> for PgActor {
    type Result = QueryResult<i64>;

    fn handle(&mut self, msg: PlaceOrder, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::menu_items::{dsl::menu_items, id as menu_item_pk, name, price};
        use crate::schema::order_items::dsl::order_items;
        use crate::schema::orders::{dsl::orders, id as order_pk};
        use crate::services::insertable::{NewOrder, NewOrderItem};

        let mut conn = establish_connection(&self.0)?;

        conn.build_transaction().run(move |trx_conn| {
            let menu: Vec<(i64, String, i32)> = menu_items
                .select((menu_item_pk, name, price))
                .get_results(trx_conn)?;

            let price_by_name: HashMap<String, i32> = menu
                .iter()
                .map(|(_, item_name, item_price)| (item_name.clone(), *item_price))
                .collect();
            let id_by_name: HashMap<String, i64> = menu
                .into_iter()
                .map(|(item_id, item_name, _)| (item_name, item_id))
                .collect();

            let total = order_total(&price_by_name, &msg.lines);

            let new_order_id = diesel::insert_into(orders)
                .values(NewOrder {
                    order_date: chrono::Local::now().naive_local(),
                    email: msg.email,
                    table_number: msg.table_number,
                    total,
                    user_id: msg.user_id,
                    order_status: ORDER_CONFIRMED_STATUS.to_owned(),
                })
                .returning(order_pk)
                .get_result::<i64>(trx_conn)?;

            for line in &msg.lines {
                if let Some(&menu_item_id) = id_by_name.get(&line.name) {
                    diesel::insert_into(order_items)
                        .values(NewOrderItem {
                            order_id: new_order_id,
                            menu_item_id,
                            quantity: line.quantity,
                        })
                        .execute(trx_conn)?;
                }
            }

            Ok(new_order_id)
        })
    }
}

impl Handler<FetchOrders> for PgActor {
    type Result = QueryResult<Vec<Order>>;

    fn handle(&mut self, _msg: FetchOrders, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::orders::dsl::orders;

        let mut conn = establish_connection(&self.0)?;

        orders.get_results::<Order>(&mut conn)
    }
}

impl Handler<FetchUserOrders> for PgActor {
    type Result = QueryResult<Vec<Order>>;

    fn handle(&mut self, msg: FetchUserOrders, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::orders::{dsl::orders, user_id};

        let mut conn = establish_connection(&self.0)?;

        orders.filter(user_id.eq(msg.0)).get_results::<Order>(&mut conn)
    }
}

impl Handler<FetchOrder> for PgActor {
    type Result = QueryResult<Order>;

    fn handle(&mut self, msg: FetchOrder, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::orders::dsl::orders;

        let mut conn = establish_connection(&self.0)?;

        orders.find(msg.0).first(&mut conn)
    }
}

impl Handler<FetchOrderItems> for PgActor {
    type Result = QueryResult<Vec<(String, i32)>>;

    fn handle(&mut self, msg: FetchOrderItems, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::menu_items::{dsl::menu_items, name};
        use crate::schema::order_items::{dsl::order_items, order_id, quantity};

        let mut conn = establish_connection(&self.0)?;

        order_items
            .inner_join(menu_items)
            .filter(order_id.eq(msg.0))
            .select((name, quantity))
            .get_results::<(String, i32)>(&mut conn)
    }
}

impl Handler<UpdateOrderStatus> for PgActor {
    type Result = QueryResult<()>;

    fn handle(&mut self, msg: UpdateOrderStatus, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::orders::{dsl::orders, order_status};

        let mut conn = establish_connection(&self.0)?;

        let affected = diesel::update(orders.find(msg.order_id))
            .set(order_status.eq(msg.status))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}

impl Handler<PayOrder> for PgActor {
    type Result = QueryResult<()>;

    fn handle(&mut self, msg: PayOrder, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::orders::{dsl::orders, order_status};

        let mut conn = establish_connection(&self.0)?;

        // No finality: staff may still overwrite the status afterwards.
        let affected = diesel::update(orders.find(msg.0))
            .set(order_status.eq(ORDER_PAID_STATUS))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}

impl Handler<DeleteOrder> for PgActor {
    type Result = QueryResult<()>;

    fn handle(&mut self, msg: DeleteOrder, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::order_items::{dsl::order_items, order_id};
        use crate::schema::orders::dsl::orders;

        let mut conn = establish_connection(&self.0)?;

        conn.build_transaction().run(move |trx_conn| {
            diesel::delete(order_items.filter(order_id.eq(msg.0))).execute(trx_conn)?;
            diesel::delete(orders.find(msg.0)).execute(trx_conn)?;

            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ROLE_CUSTOMER;

    fn line(name: &str, quantity: i32) -> OrderLine {
        OrderLine {
            name: name.to_owned(),
            quantity,
        }
    }

    fn demo_menu() -> HashMap<String, i32> {
        HashMap::from([("Dish1".to_owned(), 1099), ("Dish2".to_owned(), 1199)])
    }

    #[test]
    fn order_total_sums_price_times_quantity() {
        let total = order_total(&demo_menu(), &[line("Dish1", 2), line("Dish2", 1)]);

        assert_eq!(total, 2 * 1099 + 1199);
    }

    #[test]
    fn order_total_of_no_lines_is_zero() {
        assert_eq!(order_total(&demo_menu(), &[]), 0);
    }

    #[test]
    fn unknown_menu_items_do_not_contribute_to_the_total() {
        let total = order_total(&demo_menu(), &[line("Dish1", 1), line("Pizza", 3)]);

        assert_eq!(total, 1099);
    }

    #[test]
    fn missing_user_falls_back_to_customer_role() {
        assert_eq!(role_or_default(None), ROLE_CUSTOMER);
    }

    #[test]
    fn present_user_keeps_their_role() {
        assert_eq!(role_or_default(Some(4)), 4);
    }
}
