use std::env;

use actix::{Addr, SyncArbiter};
use actix_cors::Cors;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use services::db_utils::{get_db_pool, AppState, PgActor};

mod schema;
mod services;
mod tables;
mod types;

fn init_pg_db() -> Addr<PgActor> {
    let db_url = env::var("PG_DATABASE_URL").expect("PG_DATABASE_URL must be set");
    let pool: Pool<ConnectionManager<PgConnection>> = get_db_pool(&db_url).unwrap();

    SyncArbiter::start(5, move || PgActor(pool.clone()))
}

fn init_redis_db() -> redis::Client {
    let db_uri = env::var("REDIS_DATABASE_URI").expect("REDIS_DATABASE_URI must be set");

    redis::Client::open(db_uri).unwrap()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pg_db = init_pg_db();
    let redis_db = init_redis_db();

    let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_owned());
    info!("starting server on {bind_address}");

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(Data::new(AppState { pg_db: pg_db.clone(), redis_db: redis_db.clone() }))
            .service(services::home_page)
            .service(
                web::scope("/auth")
                    .service(services::auth_route::register)
                    .service(services::auth_route::login)
                    .service(services::auth_route::logout)
            )
            .service(
                web::scope("/menu")
                    .service(services::menu_route::view_menu)
                    .service(services::menu_route::get_menu_item)
                    .service(services::menu_route::create_menu_item)
                    .service(services::menu_route::update_menu_item)
            )
            .service(
                web::scope("/order")
                    .service(services::order_route::place_order)
                    .service(services::order_route::view_orders)
                    .service(services::order_route::my_orders)
                    .service(services::order_route::order_items)
                    .service(services::order_route::get_order)
                    .service(services::order_route::update_order_status)
                    .service(services::order_route::pay_for_order)
                    .service(services::order_route::delete_order)
            )
            .service(
                web::scope("/waiter")
                    .service(services::waiter_route::call_waiter)
                    .service(services::waiter_route::waiter_calls)
                    .service(services::waiter_route::assigned_tables)
                    .service(services::waiter_route::assign_tables)
                    .service(services::waiter_route::unassign_tables)
            )
            .service(
                web::scope("/admin")
                    .service(services::admin_route::list_users)
                    .service(services::admin_route::delete_user)
                    .service(services::admin_route::change_user_role)
            )
            .service(
                web::scope("/test")
                    .service(services::test_route::healthcheck)
                    .service(services::test_route::seed_demo_data)
            )
    })
        .bind(bind_address)?
        .run()
        .await
}
