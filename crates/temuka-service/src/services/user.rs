//! User service
//!
//! Handles user search, lookup, registration, and profile updates.

use temuka_core::entities::User;
use temuka_core::{DomainError, EntityId};
use tracing::{info, instrument};

use crate::dto::{CreateUserRequest, SearchUsersQuery, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Search users by username fragment
    ///
    /// An empty result is reported as not found.
    #[instrument(skip(self))]
    pub async fn search_users(&self, query: SearchUsersQuery) -> ServiceResult<Vec<UserResponse>> {
        let users = self
            .ctx
            .user_repo()
            .search(query.username.as_deref())
            .await
            .map_err(ServiceError::storage("Error retrieving users"))?;

        if users.is_empty() {
            return Err(ServiceError::not_found("No user found"));
        }

        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user_detail(&self, user_id: EntityId) -> ServiceResult<UserResponse> {
        let user = self.find_user(user_id).await?;
        Ok(UserResponse::from(&user))
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        let password_hash = self.hash_password(&request.password, "Error creating user")?;
        let mut user = User::new(request.username, request.email);

        self.ctx
            .user_repo()
            .create(&mut user, &password_hash)
            .await
            .map_err(|e| match e {
                DomainError::EmailAlreadyExists => ServiceError::conflict("Email already in use"),
                other => ServiceError::internal("Error creating user", other),
            })?;

        info!(user_id = %user.id, "User created");

        Ok(UserResponse::from(&user))
    }

    /// Apply the supplied fields to an existing user
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: EntityId,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self.find_user(user_id).await?;

        if let Some(username) = request.username {
            user.set_username(username);
        }
        if let Some(email) = request.email {
            user.set_email(email);
        }
        let password_hash = match request.password.as_deref() {
            Some(password) => Some(self.hash_password(password, "Error updating user")?),
            None => None,
        };
        user.touch();

        self.ctx
            .user_repo()
            .update(&user, password_hash.as_deref())
            .await
            .map_err(|e| match e {
                DomainError::EmailAlreadyExists => ServiceError::conflict("Email already in use"),
                DomainError::UserNotFound(_) => ServiceError::not_found("User not found"),
                other => ServiceError::internal("Error updating user", other),
            })?;

        info!(user_id = %user_id, "User updated");

        Ok(UserResponse::from(&user))
    }

    async fn find_user(&self, user_id: EntityId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await
            .map_err(ServiceError::storage("Error retrieving user"))?
            .ok_or_else(|| ServiceError::not_found("User not found"))
    }

    fn hash_password(&self, password: &str, failure: &str) -> ServiceResult<String> {
        self.ctx
            .password_service()
            .hash(password)
            .map_err(|e| ServiceError::internal(failure, DomainError::InternalError(e.to_string())))
    }
}
