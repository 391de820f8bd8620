/// Declares `<Prefix>Client` wrapping `ResourceClient<Entity>` and implements
/// [`ActorClient`](crate::clients::ActorClient) for it, mapping every framework error onto
/// `<Prefix>Error`.
///
/// `<Prefix>Error` must be in scope at the call site and have `NotFound(String)` and
/// `Persistence(String)` variants. Entity errors raised by the record are recovered as
/// their concrete variant.
///
/// ```ignore
/// domain_client!(Menu => MenuItem);   // MenuClient, errors as MenuError
/// ```
macro_rules! domain_client {
    ($prefix:ident => $entity:ident) => {
        paste::paste! {
            #[doc = "Client for the `" $entity "` collection."]
            #[derive(Clone)]
            pub struct [<$prefix Client>] {
                inner: $crate::framework::ResourceClient<$crate::model::$entity>,
            }

            impl [<$prefix Client>] {
                pub fn new(inner: $crate::framework::ResourceClient<$crate::model::$entity>) -> Self {
                    Self { inner }
                }
            }

            #[async_trait::async_trait]
            impl $crate::clients::ActorClient<$crate::model::$entity> for [<$prefix Client>] {
                type Error = [<$prefix Error>];

                fn inner(&self) -> &$crate::framework::ResourceClient<$crate::model::$entity> {
                    &self.inner
                }

                fn map_error(e: $crate::framework::FrameworkError) -> Self::Error {
                    match e {
                        $crate::framework::FrameworkError::NotFound(id) => {
                            [<$prefix Error>]::NotFound(id)
                        }
                        other => other
                            .into_entity_error::<[<$prefix Error>]>()
                            .unwrap_or_else(|e| [<$prefix Error>]::Persistence(e.to_string())),
                    }
                }
            }
        }
    };
}
