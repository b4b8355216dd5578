use uuid::Uuid;

use crate::types::{SESSION_KEY_PREFIX, SESSION_TTL_S};

fn session_key(token: &str) -> String {
    format!("{SESSION_KEY_PREFIX}_{token}")
}

/// Mints a fresh session token for the given user and stores it with a TTL.
pub fn create_session(db: &redis::Client, user_id: i64) -> Result<String, String> {
    let mut conn = match db.get_connection() {
        Ok(conn) => conn,
        Err(_) => return Err("Failed to establish connection with redis".into()),
    };

    let token = Uuid::new_v4().to_string();

    redis::cmd("SET")
        .arg(session_key(&token))
        .arg(user_id)
        .arg("EX")
        .arg(SESSION_TTL_S)
        .execute(&mut conn);

    Ok(token)
}

/// Resolves a session token to the user id it was minted for, or `None` for
/// unknown and expired tokens.
pub fn session_user(db: &redis::Client, token: &str) -> Result<Option<i64>, String> {
    let mut conn = match db.get_connection() {
        Ok(conn) => conn,
        Err(_) => return Err("Failed to establish connection with redis".into()),
    };

    match redis::cmd("GET")
        .arg(session_key(token))
        .query::<Option<i64>>(&mut conn)
    {
        Ok(user_id) => Ok(user_id),
        Err(_) => Err("Failed to read session entry from redis db".into()),
    }
}

pub fn drop_session(db: &redis::Client, token: &str) -> Result<(), String> {
    let mut conn = match db.get_connection() {
        Ok(conn) => conn,
        Err(_) => return Err("Failed to establish connection with redis".into()),
    };

    redis::cmd("DEL").arg(session_key(token)).execute(&mut conn);

    Ok(())
}
