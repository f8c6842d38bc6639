use crate::db::pool::DbPool;
use crate::db::queries::delete_record;
use crate::errors::AppResult;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a measurement by id. Returns how many rows were removed
    /// (0 or 1); deleting an absent id is not an error.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<usize> {
        delete_record(&pool.conn, id)
    }
}
