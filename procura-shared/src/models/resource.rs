use serde::{Serialize, de::DeserializeOwned};

/// A backend record reachable under `/{COLLECTION}` and `/{COLLECTION}/{id}`.
pub trait Resource: Serialize + DeserializeOwned + Clone + PartialEq + 'static {
    /// Path segment of the REST collection, e.g. `"vendors"`.
    const COLLECTION: &'static str;

    fn id(&self) -> u64;

    /// Short human-readable name used in titles and breadcrumbs.
    fn label(&self) -> String;
}
