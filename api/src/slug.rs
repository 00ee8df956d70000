use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

// strip diacritics by decomposing to nfd and dropping the combining marks
// ("Könyvkötés" -> "Konyvkotes"); letters of other scripts survive untouched
fn fold_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

// derive a url-safe identifier from a human label
//
// runs of anything that is not a letter or digit become a single hyphen, and
// the result has no leading or trailing hyphens, so running it a second time
// is a no-op.  a label without a single letter or digit yields ""
pub fn slugify(label: &str) -> String {
    let folded = fold_diacritics(&label.to_lowercase());
    let mut slug = String::with_capacity(folded.len());
    let mut separated = false;

    for c in folded.chars() {
        if c.is_alphanumeric() {
            if separated && !slug.is_empty() {
                slug.push('-');
            }
            separated = false;
            slug.push(c);
        } else {
            separated = true;
        }
    }

    slug
}

// locale-aware-enough ordering for tab captions
//
// accented letters sort next to their base letter and case is ignored; when two
// labels fold to the same key the raw strings decide, so the order stays total
pub fn collate(a: &str, b: &str) -> Ordering {
    let key_a = fold_diacritics(a).to_lowercase();
    let key_b = fold_diacritics(b).to_lowercase();

    key_a.cmp(&key_b).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_strips_hungarian_diacritics() {
        assert_eq!(slugify("Könyvkötés"), "konyvkotes");
        assert_eq!(slugify("Márványpapír"), "marvanypapir");
        assert_eq!(slugify("Papírmasé"), "papirmase");
        assert_eq!(slugify("ŐSZI Űrlap"), "oszi-urlap");
    }

    #[test]
    fn slugify_collapses_separator_runs_and_trims() {
        assert_eq!(slugify("  Dobozkészítés -- haladó!  "), "dobozkeszites-halado");
        assert_eq!(slugify("a__b..c"), "a-b-c");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn slugify_keeps_letters_of_other_scripts() {
        assert_eq!(slugify("Оригами"), "оригами");
        assert_eq!(slugify("折り紙"), "折り紙");
        assert_eq!(slugify("Papír – Оригами"), "papir-оригами");
        assert_eq!(slugify("Йод"), "иод");
    }

    #[test]
    fn slugify_is_idempotent() {
        let labels = [
            "Cartonnage",
            "Könyvkötés & doboz",
            "  spaced   out  ",
            "Ünnepi 2024/25 kurzus",
            "ß and æ",
            "already-a-slug",
            "Оригами — Йошкар",
            "折り紙 / おりがみ",
            "İstanbul",
        ];

        for label in labels {
            let once = slugify(label);
            assert_eq!(slugify(&once), once, "label {label:?}");
        }
    }

    #[test]
    fn collate_sorts_accented_letters_with_their_base() {
        let mut labels = vec!["Papírmasé", "Cartonnage", "Márványpapír", "Könyvkötés", "Dobozkészítés"];
        labels.sort_by(|a, b| collate(a, b));

        assert_eq!(
            labels,
            vec!["Cartonnage", "Dobozkészítés", "Könyvkötés", "Márványpapír", "Papírmasé"]
        );
    }

    #[test]
    fn collate_ignores_case_but_stays_total() {
        assert_ne!(collate("alma", "Alma"), Ordering::Equal);
        assert_eq!(collate("alma", "Barack"), Ordering::Less);
        assert_eq!(collate("Ábel", "abel").reverse(), collate("abel", "Ábel"));
    }
}
