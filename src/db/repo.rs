use async_trait::async_trait;

use super::model::*;

#[async_trait]
pub trait MovieRepo: Send + Sync {
    /// Insert a new record and return it with its assigned id.
    async fn insert_movie(&self, fields: &MovieFields) -> DbResult<Movie>;
    /// All records, in insertion order.
    async fn list_movies(&self) -> DbResult<Vec<Movie>>;
    /// Replace the fields of the record with this id. Returns the number of
    /// records actually modified, so an unchanged record counts as zero.
    async fn replace_movie(&self, id: &str, fields: &MovieFields) -> DbResult<u64>;
    /// Returns the number of records removed.
    async fn delete_movie(&self, id: &str) -> DbResult<u64>;
}
