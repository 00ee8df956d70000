use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::PLACEHOLDER_IMAGE;

// content normalization
//
// the cms has shipped two response shapes over its lifetime: the older one nests
// every field under an `attributes` object (with the id left outside), the newer
// one is flat.  embedded media follow the same split, either wrapped as
// `{data: {id, attributes: {...}}}` or given directly as `{id, url, ...}`
//
// every consumer goes through the functions in this module so that nobody else
// has to care which shape they got

// a uri scheme per rfc 3986, e.g. "https:", "data:", "blob:"
static URI_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("uri scheme regex"));

pub fn unwrap_attributes(record: &Value) -> &Value {
    match record.get("attributes") {
        Some(attributes) if attributes.is_object() => attributes,
        _ => record,
    }
}

// descend through the optional `data` indirection of a media field
//
// multi-media fields come back as `data: [...]`, in which case the first entry
// stands in for the whole field
pub fn resolve_image(field: Option<&Value>) -> Option<&Value> {
    let field = field.filter(|f| !f.is_null())?;

    let target = match field.get("data") {
        Some(Value::Array(items)) => items.first()?,
        Some(data) => data,
        None => field,
    };

    let target = unwrap_attributes(target);

    target.is_object().then_some(target)
}

pub fn is_absolute_url(url: &str) -> bool {
    URI_SCHEME.is_match(url)
}

pub fn absolute_url(url: &str, base_url: &str) -> String {
    if is_absolute_url(url) {
        url.to_owned()
    } else {
        format!("{base_url}{url}")
    }
}

pub fn build_image_url(image: Option<&Value>, base_url: &str) -> String {
    image_url_or(image, base_url, PLACEHOLDER_IMAGE)
}

// sections each have their own placeholder artwork, so the fallback is a parameter
pub fn image_url_or(image: Option<&Value>, base_url: &str, placeholder: &str) -> String {
    image_url(image, base_url).unwrap_or_else(|| placeholder.to_owned())
}

// for optional slots where the renderer picks its own default
pub fn image_url(image: Option<&Value>, base_url: &str) -> Option<String> {
    image
        .and_then(|i| i.get("url"))
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .map(|url| absolute_url(url, base_url))
}

// pull the list of records out of a collection response
//
// accepts `{data: [...]}`, a single-record `{data: {...}}`, or a bare array
pub fn records(response: &Value) -> Vec<&Value> {
    let body = response.get("data").unwrap_or(response);

    match body {
        Value::Array(items) => items.iter().collect(),
        Value::Object(_) => vec![body],
        _ => Vec::new(),
    }
}

// Record
//
// a read-only view over one raw cms record.  the id lives on the outer object in
// the wrapped shape, so we keep both halves around; every other field is looked
// up in the attributes first and the raw record second
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    raw: &'a Value,
    attributes: &'a Value,
}

impl<'a> Record<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Record {
            raw,
            attributes: unwrap_attributes(raw),
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.attributes
            .get(key)
            .or_else(|| self.raw.get(key))
            .filter(|v| !v.is_null())
    }

    pub fn id(&self) -> Option<String> {
        self.raw
            .get("id")
            .or_else(|| self.raw.get("documentId"))
            .and_then(value_to_text)
    }

    // strings are taken as-is and numbers are formatted, since editors
    // regularly type prices and the like into numeric fields
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(value_to_text)
    }

    pub fn first_text(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .filter_map(|key| self.text(key))
            .find(|text| !text.is_empty())
    }

    pub fn text_or_default(&self, key: &str) -> String {
        self.text(key).unwrap_or_default()
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn image(&self, key: &str) -> Option<&'a Value> {
        resolve_image(self.get(key))
    }
}

fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const BASE: &str = "http://cms.local";

    #[test]
    fn flat_and_wrapped_records_expose_the_same_fields() {
        let flat = json!({"title": "A"});
        let wrapped = json!({"attributes": {"title": "A"}});

        assert_eq!(unwrap_attributes(&flat)["title"], "A");
        assert_eq!(unwrap_attributes(&wrapped)["title"], "A");
    }

    #[test]
    fn attributes_that_are_not_objects_are_ignored() {
        let odd = json!({"attributes": "nope", "title": "B"});
        assert_eq!(unwrap_attributes(&odd)["title"], "B");
    }

    #[test]
    fn resolve_image_handles_both_media_shapes() {
        let wrapped = json!({"data": {"id": 3, "attributes": {"url": "/uploads/a.png"}}});
        let bare = json!({"id": 3, "url": "/uploads/a.png"});

        assert_eq!(resolve_image(Some(&wrapped)).unwrap()["url"], "/uploads/a.png");
        assert_eq!(resolve_image(Some(&bare)).unwrap()["url"], "/uploads/a.png");
    }

    #[test]
    fn resolve_image_returns_none_for_missing_targets() {
        assert!(resolve_image(None).is_none());
        assert!(resolve_image(Some(&Value::Null)).is_none());
        assert!(resolve_image(Some(&json!({"data": null}))).is_none());
        assert!(resolve_image(Some(&json!({"data": []}))).is_none());
        assert!(resolve_image(Some(&json!("just a string"))).is_none());
    }

    #[test]
    fn resolve_image_takes_the_first_entry_of_a_media_list() {
        let list = json!({"data": [
            {"id": 1, "attributes": {"url": "/first.png"}},
            {"id": 2, "attributes": {"url": "/second.png"}},
        ]});

        assert_eq!(resolve_image(Some(&list)).unwrap()["url"], "/first.png");
    }

    #[test]
    fn build_image_url_keeps_absolute_urls() {
        let http = json!({"url": "http://cdn.example/a.png"});
        let https = json!({"url": "https://cdn.example/a.png"});

        assert_eq!(build_image_url(Some(&http), BASE), "http://cdn.example/a.png");
        assert_eq!(build_image_url(Some(&https), BASE), "https://cdn.example/a.png");
    }

    #[test]
    fn build_image_url_prefixes_relative_paths() {
        let relative = json!({"url": "/uploads/a.png"});
        assert_eq!(
            build_image_url(Some(&relative), BASE),
            "http://cms.local/uploads/a.png"
        );
    }

    #[test]
    fn build_image_url_falls_back_to_the_placeholder() {
        assert_eq!(build_image_url(None, BASE), PLACEHOLDER_IMAGE);
        assert_eq!(build_image_url(Some(&json!({})), BASE), PLACEHOLDER_IMAGE);
        assert_eq!(build_image_url(Some(&json!({"url": ""})), BASE), PLACEHOLDER_IMAGE);
        assert_eq!(
            image_url_or(None, BASE, "/images/other.png"),
            "/images/other.png"
        );
    }

    #[test]
    fn records_accepts_every_envelope() {
        let list = json!({"data": [{"id": 1}, {"id": 2}]});
        let single = json!({"data": {"id": 1}});
        let bare = json!([{"id": 1}]);
        let empty = json!({"data": null});

        assert_eq!(records(&list).len(), 2);
        assert_eq!(records(&single).len(), 1);
        assert_eq!(records(&bare).len(), 1);
        assert!(records(&empty).is_empty());
    }

    #[test]
    fn record_reads_the_outer_id_and_inner_fields() {
        let raw = json!({"id": 7, "attributes": {"title": "Doboz", "price": 15000}});
        let record = Record::new(&raw);

        assert_eq!(record.id().as_deref(), Some("7"));
        assert_eq!(record.text("title").as_deref(), Some("Doboz"));
        assert_eq!(record.text("price").as_deref(), Some("15000"));
        assert_eq!(record.text("missing"), None);
    }

    #[test]
    fn record_int_accepts_numeric_strings() {
        let raw = json!({"rating": "4", "order": 2.0, "bad": "x"});
        let record = Record::new(&raw);

        assert_eq!(record.int("rating"), Some(4));
        assert_eq!(record.int("order"), Some(2));
        assert_eq!(record.int("bad"), None);
    }
}
