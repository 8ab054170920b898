//! HATEOAS link object

use serde::{Deserialize, Serialize};

/// A request-related HATEOAS link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDescription {
    /// The complete target URL
    pub href: String,
    /// The link relation type, e.g. `self` or `next`
    pub rel: String,
    /// The HTTP method required to make the related call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}
