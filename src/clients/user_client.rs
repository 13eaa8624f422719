use tracing::{debug, info, instrument};
use crate::domain::{User, UserCreate};
use crate::user_actor::UserError;
use crate::actor_framework::ResourceClient;

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, UserError, get = get_user, list = list_users);

impl UserClient {
    #[instrument(skip(self, user), fields(username = %user.username))]
    pub async fn create_user(&self, user: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        let user = self
            .inner
            .create(user)
            .await
            .map_err(|e| UserError::ActorCommunicationError(e.to_string()))?;
        info!(user_id = %user.id, "User created");
        Ok(user)
    }
}
