use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
    TransactionTrait,
};

use crate::errors::internal::InternalError;
use crate::types::db::user::{self, Entity as User};

/// What the admin seeding pass found and did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminSeedOutcome {
    /// No account existed, a fresh one was inserted
    Created,
    /// Account existed, its password hash was overwritten
    PasswordReset,
    /// Account existed and was left as it was
    AlreadyPresent,
}

/// UserStore manages administrative login accounts in the database
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create a new UserStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Look up an account by its exact email
    ///
    /// # Arguments
    /// * `email` - The login email to search for
    ///
    /// # Returns
    /// * `Ok(Some(model))` - The matching account
    /// * `Ok(None)` - No account with that email
    /// * `Err(InternalError)` - Database failure
    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, InternalError> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_by_email", e))
    }

    /// Guarantee that an administrative account exists for `email`
    ///
    /// When the account is missing it is created with the given hash and
    /// `is_admin` set. When it exists, `reset_password` decides whether
    /// the stored hash is overwritten; either way the admin flag is
    /// restored if something cleared it.
    pub async fn ensure_admin_account(
        &self,
        email: &str,
        password_hash: String,
        reset_password: bool,
    ) -> Result<AdminSeedOutcome, InternalError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| InternalError::transaction("begin_ensure_admin_account", e))?;

        let existing = User::find()
            .filter(user::Column::Email.eq(email))
            .one(&txn)
            .await
            .map_err(|e| InternalError::database("find_admin_account", e))?;

        let outcome = match existing {
            Some(account) => {
                let was_admin = account.is_admin;
                let mut active: user::ActiveModel = account.into();
                if reset_password {
                    active.password_hash = Set(password_hash);
                }
                active.is_admin = Set(true);

                if reset_password || !was_admin {
                    active
                        .update(&txn)
                        .await
                        .map_err(|e| InternalError::database("update_admin_account", e))?;
                }

                if reset_password {
                    AdminSeedOutcome::PasswordReset
                } else {
                    AdminSeedOutcome::AlreadyPresent
                }
            }
            None => {
                let new_account = user::ActiveModel {
                    id: NotSet,
                    email: Set(email.to_string()),
                    password_hash: Set(password_hash),
                    is_admin: Set(true),
                };

                new_account
                    .insert(&txn)
                    .await
                    .map_err(|e| InternalError::database("insert_admin_account", e))?;

                AdminSeedOutcome::Created
            }
        };

        txn.commit()
            .await
            .map_err(|e| InternalError::transaction("commit_ensure_admin_account", e))?;

        Ok(outcome)
    }
}
