use welds::errors::Result;
use welds::migrations::prelude::*;

// user_id is unique: at most one refresh token row per user.
pub(super) fn step(_state: &TableState) -> Result<MigrationStep> {
    let m = create_table("refresh_tokens")
        .id(|c| c("id", Type::IntBig))
        .column(|c| c("record_id", Type::String).create_unique_index())
        .column(|c| c("user_id", Type::String).create_unique_index())
        .column(|c| c("refresh_token", Type::String))
        .column(|c| c("expires_at", Type::IntBig))
        .column(|c| c("created_at", Type::IntBig))
        .column(|c| c("updated_at", Type::IntBig));
    Ok(MigrationStep::new("create_table_refresh_tokens", m))
}
