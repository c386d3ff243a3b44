use welds::prelude::*;

#[derive(Debug, Clone, WeldsModel)]
#[welds(table = "refresh_tokens")]
pub struct RefreshTokenModel {
    #[welds(primary_key)]
    pub id: i64,
    pub record_id: String,
    pub user_id: String,
    pub refresh_token: String,
    pub expires_at: i64,
    pub created_at: i64,
    pub updated_at: i64,
}
