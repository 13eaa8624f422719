use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate};

impl Entity for User {
    type Id = i64;
    type CreatePayload = UserCreate;

    const NAME: &'static str = "user";

    /// Creates a new User from creation parameters.
    ///
    /// Any string is accepted as a username, including the empty one.
    fn from_create(id: i64, params: UserCreate) -> Self {
        Self {
            id,
            username: params.username,
        }
    }
}
