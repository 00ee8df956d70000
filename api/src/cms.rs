use gloo_net::http::Request;
use serde_json::Value;

use crate::content::{ContentPage, Course, GalleryImage, Technique, Testimonial};

// cms client
//
// the bundle runs in the browser, where there is no process environment, so the
// endpoint and token are baked in when the webapp is compiled

pub const DEFAULT_CMS_URL: &str = "http://localhost:1337";

const COURSES: &str = "courses";
const TESTIMONIALS: &str = "testimonials";
const GALLERY: &str = "gallery-items";
const TECHNIQUES: &str = "techniques";
const PAGES: &str = "pages";

#[derive(Clone, Debug, PartialEq)]
pub struct CmsClient {
    pub base_url: String,
    pub token: Option<String>,
}

impl CmsClient {
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        CmsClient {
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: token.filter(|t| !t.is_empty()).map(str::to_owned),
        }
    }

    pub fn from_env() -> Self {
        CmsClient::new(
            option_env!("PAPIRMANIA_CMS_URL").unwrap_or(DEFAULT_CMS_URL),
            option_env!("PAPIRMANIA_CMS_TOKEN"),
        )
    }

    pub fn endpoint(&self, collection: &str) -> String {
        format!("{}/api/{collection}", self.base_url)
    }

    async fn get(&self, collection: &str, filters: &[(&str, &str)]) -> anyhow::Result<Value> {
        let mut req = Request::get(&self.endpoint(collection))
            .query([("populate", "*")])
            .query(filters.iter().copied());

        if let Some(token) = &self.token {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }

        let resp = req.send().await?;

        if resp.ok() {
            Ok(resp.json().await?)
        } else {
            Err(anyhow::Error::msg(format!(
                "{collection}: {} {}",
                resp.status(),
                resp.text().await?
            )))
        }
    }

    pub async fn courses(&self) -> anyhow::Result<Vec<Course>> {
        Ok(Course::from_response(&self.get(COURSES, &[]).await?))
    }

    pub async fn testimonials(&self) -> anyhow::Result<Vec<Testimonial>> {
        Ok(Testimonial::from_response(
            &self.get(TESTIMONIALS, &[]).await?,
            &self.base_url,
        ))
    }

    pub async fn gallery(&self) -> anyhow::Result<Vec<GalleryImage>> {
        Ok(GalleryImage::from_response(
            &self.get(GALLERY, &[]).await?,
            &self.base_url,
        ))
    }

    pub async fn techniques(&self) -> anyhow::Result<Vec<Technique>> {
        Ok(Technique::from_response(
            &self.get(TECHNIQUES, &[]).await?,
            &self.base_url,
        ))
    }

    // a missing page is not an error, the caller keeps its built-in copy
    pub async fn page(&self, tag: &str) -> anyhow::Result<Option<ContentPage>> {
        let response = self.get(PAGES, &[("filters[tag][$eq]", tag)]).await?;

        Ok(crate::normalize::records(&response)
            .first()
            .map(|raw| ContentPage::from_record(raw, &self.base_url)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slashes() {
        let client = CmsClient::new("https://cms.papirmania.hu/", None);
        assert_eq!(client.endpoint("courses"), "https://cms.papirmania.hu/api/courses");
    }

    #[test]
    fn empty_token_means_no_auth() {
        assert_eq!(CmsClient::new(DEFAULT_CMS_URL, Some("")).token, None);
        assert_eq!(
            CmsClient::new(DEFAULT_CMS_URL, Some("abc")).token.as_deref(),
            Some("abc")
        );
    }
}
