use crate::error::InvalidQuery;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantingQuery {
    /// Free text, kept verbatim and never geocoded.
    /// **Example:** `"90210"`
    pub postal_code: String,

    /// One of the page's crop options.
    /// **Example:** `"Tomatoes"`
    pub crop: String,
}

impl PlantingQuery {
    /// Both fields must be non-empty; beyond that nothing is checked.
    pub fn ensure_complete(&self) -> Result<(), InvalidQuery> {
        if self.postal_code.is_empty() {
            return Err(InvalidQuery::MissingField("postalCode"));
        }
        if self.crop.is_empty() {
            return Err(InvalidQuery::MissingField("crop"));
        }
        Ok(())
    }
}
