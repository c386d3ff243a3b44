use std::time::Duration;

use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};
use thiserror::Error;

// Small helper to shorten command error mapping
fn command<E: ToString>(e: E) -> RedisServiceError {
    RedisServiceError::Command(e.to_string())
}

#[derive(Error, Debug)]
pub enum RedisServiceError {
    #[error("error while connecting to instance: {0}")]
    Connection(String),
    #[error("error while running command: {0}")]
    Command(String),
}

/// Thin wrapper over one multiplexed connection, opened at startup and cloned per call.
#[derive(Clone)]
pub struct RedisService {
    conn: MultiplexedConnection,
}

impl RedisService {
    /// `host` is `host:port`; `database` selects the logical db.
    pub async fn connect(host: &str, database: i64) -> Result<Self, RedisServiceError> {
        let url = format!("redis://{host}/{database}");
        let client = Client::open(url).map_err(|e| RedisServiceError::Connection(e.to_string()))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| RedisServiceError::Connection(e.to_string()))?;
        log::info!("connected to redis at {host}, db {database}");
        Ok(Self { conn })
    }

    /// SET with EX. Sub-second remainders round up and the TTL is never below one second.
    pub async fn set_with_ttl(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<(), RedisServiceError> {
        let mut conn = self.conn.clone();
        let _: () = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EX")
            .arg(ttl_seconds(ttl))
            .query_async(&mut conn)
            .await
            .map_err(command)?;
        Ok(())
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, RedisServiceError> {
        let mut conn = self.conn.clone();
        conn.get(key).await.map_err(command)
    }

    pub async fn ttl(&self, key: &str) -> Result<i64, RedisServiceError> {
        let mut conn = self.conn.clone();
        conn.ttl(key).await.map_err(command)
    }

    pub async fn delete_key(&self, key: &str) -> Result<bool, RedisServiceError> {
        let mut conn = self.conn.clone();
        let deleted: i64 = conn.del(key).await.map_err(command)?;
        Ok(deleted > 0)
    }
}

fn ttl_seconds(ttl: Duration) -> u64 {
    let secs = ttl.as_secs() + u64::from(ttl.subsec_nanos() > 0);
    secs.max(1)
}
