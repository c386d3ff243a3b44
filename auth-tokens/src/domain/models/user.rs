use welds::prelude::*;

#[derive(Debug, Clone, WeldsModel)]
#[welds(table = "users")]
pub struct UserModel {
    #[welds(primary_key)]
    pub id: i64,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: i64,
    pub updated_at: i64,
}
