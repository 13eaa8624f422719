//! Boilerplate shared by the entity clients.
//!
//! Every client wraps a `ResourceClient<Entity>` in a field named `inner` and
//! reports channel failures through its error's `ActorCommunicationError`.

macro_rules! impl_get_method {
    ($client_name:ident, $entity:ty, $error:ty, $method:ident) => {
        impl $client_name {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, id: i64) -> Result<Option<$entity>, $error> {
                tracing::debug!("Sending request");
                self.inner
                    .get(id)
                    .await
                    .map_err(|e| <$error>::ActorCommunicationError(e.to_string()))
            }
        }
    };
}

macro_rules! impl_list_method {
    ($client_name:ident, $entity:ty, $error:ty, $method:ident) => {
        impl $client_name {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self) -> Result<Vec<$entity>, $error> {
                tracing::debug!("Sending request");
                self.inner
                    .list()
                    .await
                    .map_err(|e| <$error>::ActorCommunicationError(e.to_string()))
            }
        }
    };
}

macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $error:ty, get = $get:ident, list = $list:ident) => {
        impl_client_new!($client_name, $entity);
        impl_get_method!($client_name, $entity, $error, $get);
        impl_list_method!($client_name, $entity, $error, $list);
    };
}
