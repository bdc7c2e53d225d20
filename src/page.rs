//! State and rendering of the planting guide page.
//!
//! The page is a plain record of the two inputs, the last result and a
//! loading flag. Every change goes through a method on [`PageState`], so
//! the page can be driven without a browser.

use crate::domain::{CROP_OPTIONS, PlantingInfo, PlantingQuery};
use crate::lookup::PlantingLookup;
use askama_actix::Template;

pub const SUBMIT_LABEL: &str = "Get Planting Info";
pub const LOADING_LABEL: &str = "Loading...";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub postal_code: String,
    pub crop: String,
    pub result: Option<PlantingInfo>,
    pub loading: bool,
}

impl PageState {
    /// Page with both inputs already filled in, as after a form post.
    pub fn from_query(query: PlantingQuery) -> Self {
        Self {
            postal_code: query.postal_code,
            crop: query.crop,
            ..Self::default()
        }
    }

    pub fn set_postal_code(&mut self, postal_code: impl Into<String>) {
        self.postal_code = postal_code.into();
    }

    pub fn set_crop(&mut self, crop: impl Into<String>) {
        self.crop = crop.into();
    }

    pub fn query(&self) -> PlantingQuery {
        PlantingQuery {
            postal_code: self.postal_code.clone(),
            crop: self.crop.clone(),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading { LOADING_LABEL } else { SUBMIT_LABEL }
    }

    /// Runs one lookup for the current inputs.
    ///
    /// A successful answer replaces the previous result. A failed one is
    /// logged and leaves the previous result alone. `loading` is back to
    /// `false` once this returns, and also when the future is dropped
    /// before the lookup answers.
    pub async fn submit<L>(&mut self, lookup: &L)
    where
        L: PlantingLookup + ?Sized,
    {
        let query = self.query();
        let _loading = LoadingGuard::engage(&mut self.loading);

        match lookup.fetch_planting_info(&query).await {
            Ok(info) => self.result = Some(info),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    postal_code = %query.postal_code,
                    crop = %query.crop,
                    "Error fetching planting info"
                );
            }
        }
    }

    pub fn render(&self) -> Result<String, askama::Error> {
        self.template().render()
    }

    pub fn template(&self) -> IndexHtml<'_> {
        IndexHtml {
            postal_code: &self.postal_code,
            crop_options: CROP_OPTIONS
                .iter()
                .map(|&option| CropOption {
                    value: option,
                    selected: option == self.crop,
                })
                .collect(),
            loading: self.loading,
            submit_label: self.submit_label(),
            loading_label: LOADING_LABEL,
            result: self.result.as_ref(),
        }
    }
}

/// Holds `loading` up for as long as it lives.
struct LoadingGuard<'a> {
    loading: &'a mut bool,
}

impl<'a> LoadingGuard<'a> {
    fn engage(loading: &'a mut bool) -> Self {
        *loading = true;
        Self { loading }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.loading = false;
    }
}

pub struct CropOption {
    pub value: &'static str,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexHtml<'a> {
    postal_code: &'a str,
    crop_options: Vec<CropOption>,
    loading: bool,
    submit_label: &'static str,
    loading_label: &'static str,
    result: Option<&'a PlantingInfo>,
}
