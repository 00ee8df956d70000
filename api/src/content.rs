use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    GALLERY_FALLBACK_SIZE, PLACEHOLDER_IMAGE,
    normalize::{Record, image_url, image_url_or, records},
    slug::{collate, slugify},
};

// the canonical content model
//
// these are the only shapes the renderers ever see.  each type knows how to
// build itself from one raw cms record (either shape, see normalize.rs) and the
// cms base url used to absolutize relative media paths

pub const AVATAR_PLACEHOLDER: &str = "/images/img_avatar_image.png";
pub const GALLERY_PLACEHOLDER: &str = "/images/img_placeholder_image_404x404.png";
pub const TECHNIQUE_PLACEHOLDER: &str = "/images/img_placeholder_image_536x536.png";

// sentinel for techniques without an explicit order, so they sort last
pub const ORDER_LAST: i64 = i64::MAX;

// a tagged free-text page, e.g. the hero copy ("bevezetes") or the about text ("rolam")
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentPage {
    pub tag: String,
    pub title: String,
    pub body: String,
    pub hero_image_large: Option<String>,
    pub hero_image_small: Option<String>,
}

impl ContentPage {
    pub fn from_record(raw: &Value, base_url: &str) -> Self {
        let record = Record::new(raw);

        ContentPage {
            tag: record.first_text(&["tag", "slug"]).unwrap_or_default(),
            title: record.text_or_default("title"),
            body: record.first_text(&["body", "content"]).unwrap_or_default(),
            hero_image_large: image_url(
                record.image("heroImageLarge").or(record.image("imageLarge")),
                base_url,
            ),
            hero_image_small: image_url(
                record.image("heroImageSmall").or(record.image("imageSmall")),
                base_url,
            ),
        }
    }

    // the large picture always shows, falling back to the placeholder; the
    // small one only when the page has it
    pub fn hero_images(&self) -> Vec<String> {
        let large = self
            .hero_image_large
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned());

        std::iter::once(large)
            .chain(self.hero_image_small.clone())
            .collect()
    }

    // blank lines separate paragraphs; single newlines stay inside a paragraph and
    // are rendered as line breaks
    pub fn paragraphs(&self) -> Vec<Vec<String>> {
        let body = self.body.replace("\r\n", "\n");
        let mut paragraphs = Vec::new();
        let mut current: Vec<String> = Vec::new();

        for line in body.lines() {
            let line = line.trim();

            if line.is_empty() {
                if !current.is_empty() {
                    paragraphs.push(std::mem::take(&mut current));
                }
            } else {
                current.push(line.to_owned());
            }
        }

        if !current.is_empty() {
            paragraphs.push(current);
        }

        paragraphs
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    // display-formatted, e.g. "15.000 Ft"
    pub price: String,
    pub description: String,
    pub registration_url: Option<String>,
}

impl Course {
    pub fn from_record(raw: &Value) -> Self {
        let record = Record::new(raw);
        let title = record.text_or_default("title");

        Course {
            id: record.id().unwrap_or_else(|| slugify(&title)),
            title,
            price: record.text_or_default("price"),
            description: record.text_or_default("description"),
            registration_url: record.first_text(&["registrationUrl", "bookingUrl"]),
        }
    }

    pub fn from_response(response: &Value) -> Vec<Self> {
        records(response).into_iter().map(Course::from_record).collect()
    }

    // the description doubles as a bullet list, one item per line, and editors
    // sometimes type it as markdown
    pub fn bullet_items(&self) -> Vec<String> {
        self.description
            .lines()
            .map(|line| {
                line.trim()
                    .trim_start_matches(['-', '*', '•'])
                    .trim()
                    .to_owned()
            })
            .filter(|line| !line.is_empty())
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub location: String,
    // 0..=5
    pub rating: u8,
    pub comment: String,
    pub avatar: String,
}

impl Testimonial {
    pub fn from_record(raw: &Value, base_url: &str) -> Self {
        let record = Record::new(raw);

        Testimonial {
            id: record.id().unwrap_or_default(),
            name: record.text_or_default("name"),
            role: record.text_or_default("role"),
            location: record.text_or_default("location"),
            rating: record.int("rating").unwrap_or(0).clamp(0, 5) as u8,
            comment: record.text_or_default("comment"),
            avatar: image_url_or(
                record.image("avatar").or(record.image("media")),
                base_url,
                AVATAR_PLACEHOLDER,
            ),
        }
    }

    pub fn from_response(response: &Value, base_url: &str) -> Vec<Self> {
        records(response)
            .into_iter()
            .map(|raw| Testimonial::from_record(raw, base_url))
            .collect()
    }

    pub fn byline(&self) -> String {
        match (self.role.is_empty(), self.location.is_empty()) {
            (false, false) => format!("{}, {}", self.role, self.location),
            (false, true) => self.role.clone(),
            (true, false) => self.location.clone(),
            (true, true) => String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: u64,
    pub src: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

impl GalleryImage {
    fn record_id(raw: &Value) -> Option<u64> {
        Record::new(raw).id().and_then(|id| id.parse().ok())
    }

    pub fn from_record(raw: &Value, id: u64, base_url: &str) -> Self {
        let record = Record::new(raw);
        let image = record.image("image");
        let image_record = image.map(Record::new);

        let dimension = |key: &str| {
            image_record
                .and_then(|i| i.int(key))
                .filter(|v| *v > 0)
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(GALLERY_FALLBACK_SIZE)
        };

        GalleryImage {
            id,
            src: image_url_or(image, base_url, GALLERY_PLACEHOLDER),
            width: dimension("width"),
            height: dimension("height"),
            alt: record
                .text("alt")
                .filter(|alt| !alt.is_empty())
                .or_else(|| image_record.and_then(|i| i.first_text(&["alternativeText"])))
                .unwrap_or_else(|| String::from("Galéria kép")),
        }
    }

    // ids key the gallery grid, so they have to be unique across the response.
    // records without a numeric id, or repeating one already taken, are numbered
    // upwards from the largest numeric id present
    pub fn from_response(response: &Value, base_url: &str) -> Vec<Self> {
        let raws = records(response);
        let record_ids: Vec<Option<u64>> = raws.iter().map(|raw| Self::record_id(raw)).collect();

        let mut next = record_ids.iter().flatten().max().map_or(1, |max| max.saturating_add(1));
        let mut taken: HashSet<u64> = HashSet::with_capacity(raws.len());

        raws.into_iter()
            .zip(record_ids)
            .map(|(raw, record_id)| {
                let id = match record_id.filter(|id| taken.insert(*id)) {
                    Some(id) => id,
                    None => {
                        let id = next;
                        next = next.saturating_add(1);
                        taken.insert(id);
                        id
                    }
                };

                GalleryImage::from_record(raw, id, base_url)
            })
            .collect()
    }
}

// what the technique panel shows for the active tab
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TechniqueContent {
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Technique {
    // tab identity; the cms slug when there is one, the slugified label otherwise
    pub id: String,
    // only set when the cms provided one, and only then is the tab deep-linkable
    pub slug: Option<String>,
    pub label: String,
    pub order: Option<i64>,
    // tabs can exist before their content does, see fallback::techniques
    pub content: Option<TechniqueContent>,
}

impl Technique {
    pub fn from_record(raw: &Value, base_url: &str) -> Self {
        let record = Record::new(raw);

        let title = record.text_or_default("title");
        let label = record
            .first_text(&["label"])
            .unwrap_or_else(|| title.clone());
        let slug = record.first_text(&["slug"]).filter(|slug| !slug.is_empty());

        // a label made only of punctuation slugifies to nothing, and an empty id
        // would merge unrelated tabs in dedupe_by_id
        let id = slug.clone().unwrap_or_else(|| slugify(&label));
        let id = if id.is_empty() { record.id().unwrap_or_default() } else { id };

        Technique {
            id,
            slug,
            label,
            order: record.int("order"),
            content: Some(TechniqueContent {
                title,
                description: record.text_or_default("description"),
                image: image_url_or(record.image("image"), base_url, TECHNIQUE_PLACEHOLDER),
            }),
        }
    }

    pub fn from_response(response: &Value, base_url: &str) -> Vec<Self> {
        records(response)
            .into_iter()
            .map(|raw| Technique::from_record(raw, base_url))
            .collect()
    }
}

// ordering used where tabs are url-addressable: alphabetical by caption
pub fn sort_by_label(techniques: &mut [Technique]) {
    techniques.sort_by(|a, b| collate(&a.label, &b.label));
}

// ordering used everywhere else: the explicit order field, ties by fetch order
pub fn sort_by_order(techniques: &mut [Technique]) {
    techniques.sort_by_key(|t| t.order.unwrap_or(ORDER_LAST));
}

// collapse records that share an id
//
// the surviving entry keeps the position of the first record with that id and
// takes its contents from the last one
pub fn dedupe_by_id(techniques: Vec<Technique>) -> Vec<Technique> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<Technique> = Vec::with_capacity(techniques.len());

    for technique in techniques {
        match seen.get(&technique.id) {
            Some(&index) => unique[index] = technique,
            None => {
                seen.insert(technique.id.clone(), unique.len());
                unique.push(technique);
            }
        }
    }

    unique
}
