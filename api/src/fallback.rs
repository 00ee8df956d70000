use crate::{
    PLACEHOLDER_IMAGE,
    content::{
        ContentPage, Course, GalleryImage, TECHNIQUE_PLACEHOLDER, Technique, TechniqueContent,
        Testimonial,
    },
};

// built-in content
//
// every section renders from these until (or instead of, when the cms is down)
// the fetched data arrives, so the page is never empty

pub const HERO_TAG: &str = "bevezetes";
pub const ABOUT_TAG: &str = "rolam";

pub const HERO_IMAGE_SMALL: &str = "/images/img_placeholder_image_374x364.png";

pub const TECHNIQUE_PROMPT_TITLE: &str = "Válassz egy technikát";
pub const TECHNIQUE_PROMPT_DESCRIPTION: &str =
    "Kattints a fenti gombok egyikére, hogy többet tudj meg az adott technikáról.";

pub fn hero() -> ContentPage {
    ContentPage {
        tag: HERO_TAG.to_owned(),
        title: String::from("Ismerd meg a papír titkait"),
        body: String::from(
            "Számomra a papír nemcsak egy alapanyag, hanem a kreativitás végtelen forrása. \
             Szeretem a papírt, szeretek új életet adni a már nem használt anyagoknak.",
        ),
        hero_image_large: Some(PLACEHOLDER_IMAGE.to_owned()),
        hero_image_small: Some(HERO_IMAGE_SMALL.to_owned()),
    }
}

pub fn about() -> ContentPage {
    ContentPage {
        tag: ABOUT_TAG.to_owned(),
        title: String::from("Én és a papír"),
        body: [
            "Történetem a papír és a textil iránti gyermekkori rajongással indult. A barkácsolás, \
             a kézműveskedés már akkor is az életem része volt, és ez a lelkesedés a \
             felnőttkoromra sem tűnt el, sőt, egyre erősebb lett!",
            "Az évek során számos technikával megismerkedtem a varrástól, szövésen át egészen a \
             kárpitozásig, a decoupage-ig és a falfestésig. Ez a kísérletezés máig tart, szívesen \
             tanulok újabb és újabb technikákat. Bár sok területet szeretek, az igazi hívást a \
             könyvkötés és a dobozkészítés jelentette.",
            "Lakberendezőként a hivatásomban is a papír és a textil a főszereplők. Szakterületem a \
             tapéták és a lakástextiliák. A sok gyönyörű anyag és textúra, amivel nap mint nap \
             dolgozom, folyamatosan inspirál a kézműveskedésre. Ez a két része az életemnek mára \
             elválaszthatatlanul összefonódott, ebből született a Papírmánia.",
        ]
        .join("\n\n"),
        hero_image_large: Some(PLACEHOLDER_IMAGE.to_owned()),
        hero_image_small: Some(HERO_IMAGE_SMALL.to_owned()),
    }
}

pub fn courses() -> Vec<Course> {
    (1..=3)
        .map(|n| Course {
            id: format!("workshop-{n}"),
            title: String::from("Minta Workshop"),
            price: String::from("15.000 Ft"),
            description: String::from(
                "Tartalmazza az anyagköltséget \nVidd haza, amit készítettél",
            ),
            registration_url: None,
        })
        .collect()
}

pub fn testimonials() -> Vec<Testimonial> {
    let entries = [
        (
            "Kovács Márta",
            "Grafikus",
            "Budapest",
            "Végre megtanultam, hogyan készítsek saját könyvet. Papírműves volt az élmény.",
            "/images/img_avatar_image.png",
        ),
        (
            "Péter Mariann",
            "Tanár",
            "Debrecen",
            "A csapatépítő workshop után az egész irodánk másképp néz a papírra. Inspiráló és \
             szórakoztató volt. Már újra szeretnénk menni.",
            "/images/img_avatar_image_48x48.png",
        ),
        (
            "Szabó Juci",
            "Művészet tanár",
            "Miskolc",
            "A márványpapír technika megtanítása után azonnal elkészítettem az első darabom. \
             Olyan szép lett, hogy ajándékba adtam. Mindenki szerette.",
            "/images/img_avatar_image_1.png",
        ),
        (
            "Péter Molnár",
            "Projektmenedzser",
            "Szeged",
            "A csapatépítő workshop után az egész irodánk másképp néz a papírra. Inspiráló és \
             szórakoztató volt. Már újra szeretnénk menni.",
            "/images/img_avatar_image_2.png",
        ),
        (
            "Szabó János",
            "Tanár",
            "Debrecen",
            "A workshop során rájöttem, hogy a hulladék valóban kincs lehet. Kreatív és \
             fenntartható.",
            "/images/img_avatar_image_3.png",
        ),
    ];

    entries
        .into_iter()
        .enumerate()
        .map(
            |(i, (name, role, location, comment, avatar))| Testimonial {
                id: format!("testimonial-{}", i + 1),
                name: name.to_owned(),
                role: role.to_owned(),
                location: location.to_owned(),
                rating: 5,
                comment: comment.to_owned(),
                avatar: avatar.to_owned(),
            },
        )
        .collect()
}

pub fn gallery() -> Vec<GalleryImage> {
    let entries = [
        ("/images/img_placeholder_image_532x524.png", 404, 402, "Papírból készült alkotás"),
        ("/images/img_placeholder_image_228x406.png", 406, 228, "Kézzel készült papírtárgy"),
        ("/images/img_placeholder_image_416x404.png", 404, 416, "Kreatív papírmunka"),
        ("/images/img_placeholder_image_532x524.png", 404, 402, "Papírművészeti darab"),
        ("/images/img_placeholder_image_228x406.png", 406, 228, "Dekoratív papírtárgy"),
        ("/images/img_placeholder_image_416x404.png", 404, 416, "Papír bemutatódarab"),
        ("/images/img_placeholder_image_404x404.png", 404, 404, "Kézműves papírmunka"),
    ];

    entries
        .into_iter()
        .zip(1..)
        .map(|((src, width, height, alt), id)| GalleryImage {
            id,
            src: src.to_owned(),
            width,
            height,
            alt: alt.to_owned(),
        })
        .collect()
}

// the five standard tabs; only the first ships with content, the others show the
// selection prompt until the cms provides theirs
pub fn techniques() -> Vec<Technique> {
    let tabs = [
        ("cartonnage", "Cartonnage"),
        ("bookbinding", "Könyvkötés"),
        ("boxes", "Dobozkészítés"),
        ("marble", "Márványpapír"),
        ("papermache", "Papírmasé"),
    ];

    tabs.into_iter()
        .zip(1..)
        .map(|((slug, label), order)| Technique {
            id: slug.to_owned(),
            slug: Some(slug.to_owned()),
            label: label.to_owned(),
            order: Some(order),
            content: (slug == "cartonnage").then(cartonnage),
        })
        .collect()
}

fn cartonnage() -> TechniqueContent {
    TechniqueContent {
        title: String::from("Kartonból készült tárgyak borítása"),
        description: String::from(
            "Megtanítom, hogyan lehet papírral vagy textillel borítani a kartonból készült \
             tárgyakat. Egyszerű, de hatásos technika, amely szép eredményt ad.",
        ),
        image: TECHNIQUE_PLACEHOLDER.to_owned(),
    }
}

// shown in the technique panel whenever the active tab has nothing to show
pub fn prompt_content() -> TechniqueContent {
    TechniqueContent {
        title: TECHNIQUE_PROMPT_TITLE.to_owned(),
        description: TECHNIQUE_PROMPT_DESCRIPTION.to_owned(),
        image: TECHNIQUE_PLACEHOLDER.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_counts_match_the_sections() {
        assert_eq!(courses().len(), 3);
        assert_eq!(testimonials().len(), 5);
        assert_eq!(gallery().len(), 7);
        assert_eq!(techniques().len(), 5);
    }

    #[test]
    fn only_cartonnage_has_content() {
        let with_content: Vec<String> = techniques()
            .into_iter()
            .filter(|t| t.content.is_some())
            .map(|t| t.id)
            .collect();

        assert_eq!(with_content, vec!["cartonnage"]);
    }

    #[test]
    fn gallery_ids_are_unique_and_start_at_one() {
        let ids: Vec<u64> = gallery().iter().map(|g| g.id).collect();
        assert_eq!(ids, (1..=7).collect::<Vec<u64>>());
    }

    #[test]
    fn about_page_has_three_paragraphs() {
        assert_eq!(about().paragraphs().len(), 3);
        assert_eq!(hero().paragraphs().len(), 1);
    }
}
