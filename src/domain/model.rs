use serde::{Deserialize, Serialize};

/// A postal address record. `id` is the surrogate key: `None` until the
/// entity has been saved, after which the repository fills it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: Option<i64>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Address {
    pub fn new(street: &str, city: &str, state: &str, zip: &str) -> Self {
        Self {
            id: None,
            street: street.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            zip: zip.to_string(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
