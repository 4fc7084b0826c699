// src/application/commands/users/register.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, User},
};

/// Input for a self-service registration. Field formats are checked by the
/// HTTP validation schema before the command is built.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let email = Email::new(command.email)?;
        tracing::info!(email = %email, "registering user");

        self.ensure_email_available(&email).await?;

        let user = self
            .create_and_insert_user(
                command.first_name,
                command.last_name,
                email,
                &command.password,
                command.phone,
            )
            .await?;

        tracing::info!(user_id = %user.id, email = %user.email, "user registered");
        Ok(user.into())
    }

    async fn ensure_email_available(&self, email: &Email) -> ApplicationResult<()> {
        if self.user_repo.find_by_email(email).await?.is_some() {
            tracing::warn!(email = %email, "registration rejected: email already in use");
            return Err(ApplicationError::conflict("email", "user already exists"));
        }
        Ok(())
    }

    async fn create_and_insert_user(
        &self,
        first_name: String,
        last_name: String,
        email: Email,
        password: &str,
        phone: String,
    ) -> ApplicationResult<User> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::customer(
            first_name,
            last_name,
            email,
            password_hash,
            phone,
            self.clock.now(),
        );
        let user = self.user_repo.insert(new_user).await?;

        Ok(user)
    }
}
