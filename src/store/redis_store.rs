use redis::{Client, Commands, Connection};

use crate::tracker_errors::TrackerError;

use super::EpochStore;

/// Epoch store backed by a Redis database.
///
/// A connection is opened per operation; the store itself only keeps the client. Records are
/// listed sorted by key, Redis offering no stable iteration order of its own.
#[derive(Debug, Clone)]
pub struct RedisStore {
    client: Client,
}

impl RedisStore {
    pub fn open(url: &str) -> Result<Self, TrackerError> {
        Ok(RedisStore {
            client: Client::open(url)?,
        })
    }

    fn connection(&self) -> Result<Connection, TrackerError> {
        Ok(self.client.get_connection()?)
    }
}

impl EpochStore for RedisStore {
    fn len(&self) -> Result<usize, TrackerError> {
        let mut con = self.connection()?;
        Ok(redis::cmd("DBSIZE").query(&mut con)?)
    }

    fn put(&self, epoch: &str, record: &str) -> Result<(), TrackerError> {
        let mut con = self.connection()?;
        con.set::<_, _, ()>(epoch, record)?;
        Ok(())
    }

    fn get(&self, epoch: &str) -> Result<Option<String>, TrackerError> {
        let mut con = self.connection()?;
        Ok(con.get(epoch)?)
    }

    fn records(&self) -> Result<Vec<String>, TrackerError> {
        let mut con = self.connection()?;
        let mut keys: Vec<String> = con.keys("*")?;
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        keys.sort();

        let values: Vec<Option<String>> = redis::cmd("MGET").arg(&keys).query(&mut con)?;
        Ok(values.into_iter().flatten().collect())
    }
}
