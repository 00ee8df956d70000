use api::{
    content::{Technique, TechniqueContent, dedupe_by_id, sort_by_label, sort_by_order},
    fallback,
};

// which technique tab is showing
//
// the tab list is deduplicated by id up front, so two records that share an
// identifier can never produce two tabs with identical content.  the query
// string is only consulted through new(), reconcile() and replace(); in
// between, the in-memory selection is what gets rendered
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TechniqueSelector {
    tabs: Vec<Technique>,
    active: Option<String>,
}

impl TechniqueSelector {
    // url-addressable variant used on the home page: alphabetical tabs, with
    // the incoming ?technika= value taking precedence over the first tab
    pub fn new(techniques: Vec<Technique>, query: Option<&str>) -> Self {
        let mut tabs = dedupe_by_id(techniques);
        sort_by_label(&mut tabs);

        let mut selector = TechniqueSelector { tabs, active: None };
        selector.active = selector
            .lookup(query)
            .or_else(|| selector.tabs.first())
            .map(|t| t.id.clone());

        selector
    }

    // variant without url addressing, ordered by the cms order field
    pub fn ordered(techniques: Vec<Technique>) -> Self {
        let mut tabs = dedupe_by_id(techniques);
        sort_by_order(&mut tabs);

        let active = tabs.first().map(|t| t.id.clone());
        TechniqueSelector { tabs, active }
    }

    pub fn tabs(&self) -> &[Technique] {
        &self.tabs
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }

    // links may carry either the cms slug or the derived id
    fn lookup(&self, query: Option<&str>) -> Option<&Technique> {
        let query = query.map(str::trim).filter(|q| !q.is_empty())?;

        self.tabs
            .iter()
            .find(|t| t.slug.as_deref() == Some(query))
            .or_else(|| self.tabs.iter().find(|t| t.id == query))
    }

    // called when the query changes underneath us (back/forward, a pasted
    // link).  an absent or unknown value leaves the current tab alone
    pub fn reconcile(&mut self, query: Option<&str>) -> bool {
        let Some(id) = self.lookup(query).map(|t| t.id.clone()) else {
            return false;
        };

        if self.is_active(&id) {
            return false;
        }

        self.active = Some(id);
        true
    }

    // returns the value to write back to ?technika=, or None for an unknown id.
    // a tab without a cms slug is not linkable and yields "", which clears the
    // parameter so a stale slug does not point at another tab
    pub fn select(&mut self, id: &str) -> Option<String> {
        let technique = self.tabs.iter().find(|t| t.id == id)?;
        let query = technique.slug.clone().unwrap_or_default();

        self.active = Some(technique.id.clone());
        Some(query)
    }

    // fetched tabs replace the built-in ones; the query wins if it names one
    // of the new tabs, then the previous selection, then the first tab
    pub fn replace(&mut self, techniques: Vec<Technique>, query: Option<&str>) {
        let previous = self.active.take();
        let mut next = TechniqueSelector::new(techniques, None);

        next.active = next
            .lookup(query)
            .or_else(|| {
                previous
                    .as_deref()
                    .and_then(|id| next.tabs.iter().find(|t| t.id == id))
            })
            .or_else(|| next.tabs.first())
            .map(|t| t.id.clone());

        *self = next;
    }

    pub fn active_content(&self) -> TechniqueContent {
        self.active
            .as_deref()
            .and_then(|id| self.tabs.iter().find(|t| t.id == id))
            .and_then(|t| t.content.clone())
            .unwrap_or_else(fallback::prompt_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn technique(id: &str, slug: Option<&str>, label: &str, order: Option<i64>) -> Technique {
        Technique {
            id: id.to_owned(),
            slug: slug.map(str::to_owned),
            label: label.to_owned(),
            order,
            content: Some(TechniqueContent {
                title: format!("{label} cím"),
                description: String::new(),
                image: String::new(),
            }),
        }
    }

    fn ab() -> Vec<Technique> {
        vec![
            technique("a", Some("a"), "A", None),
            technique("b", Some("b"), "B", None),
        ]
    }

    #[test]
    fn query_picks_the_initial_tab() {
        let selector = TechniqueSelector::new(ab(), Some("b"));
        assert_eq!(selector.active_id(), Some("b"));

        let selector = TechniqueSelector::new(ab(), Some("nincs"));
        assert_eq!(selector.active_id(), Some("a"));

        let selector = TechniqueSelector::new(ab(), None);
        assert_eq!(selector.active_id(), Some("a"));
    }

    #[test]
    fn home_tabs_are_alphabetical_with_accents_folded() {
        let selector = TechniqueSelector::new(
            vec![
                technique("p", Some("p"), "Papírmasé", Some(1)),
                technique("c", Some("c"), "Cartonnage", Some(2)),
                technique("m", Some("m"), "Márványpapír", Some(3)),
            ],
            None,
        );

        let labels: Vec<&str> = selector.tabs().iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["Cartonnage", "Márványpapír", "Papírmasé"]);
    }

    #[test]
    fn ordered_tabs_follow_the_order_field() {
        let selector = TechniqueSelector::ordered(vec![
            technique("x", None, "X", None),
            technique("b", None, "B", Some(2)),
            technique("a", None, "A", Some(1)),
        ]);

        let ids: Vec<&str> = selector.tabs().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "x"]);
        assert_eq!(selector.active_id(), Some("a"));
    }

    #[test]
    fn select_reports_the_slug_or_clears_the_query() {
        let mut selector = TechniqueSelector::new(
            vec![
                technique("konyvkotes", None, "Könyvkötés", None),
                technique("marble", Some("marble"), "Márvány", None),
            ],
            None,
        );

        assert_eq!(selector.select("marble").as_deref(), Some("marble"));
        assert_eq!(selector.active_id(), Some("marble"));

        assert_eq!(selector.select("konyvkotes").as_deref(), Some(""));
        assert_eq!(selector.active_id(), Some("konyvkotes"));

        assert_eq!(selector.select("ismeretlen"), None);
        assert_eq!(selector.active_id(), Some("konyvkotes"));
    }

    #[test]
    fn cleared_query_keeps_the_unlinkable_tab() {
        let mut selector = TechniqueSelector::new(
            vec![
                technique("konyvkotes", None, "Könyvkötés", None),
                technique("marble", Some("marble"), "Márvány", None),
            ],
            Some("marble"),
        );

        let query = selector.select("konyvkotes");
        assert!(!selector.reconcile(query.as_deref()));
        assert_eq!(selector.active_id(), Some("konyvkotes"));
    }

    #[test]
    fn reconcile_follows_known_values_only() {
        let mut selector = TechniqueSelector::new(ab(), None);

        assert!(selector.reconcile(Some("b")));
        assert_eq!(selector.active_id(), Some("b"));

        assert!(!selector.reconcile(Some("b")));
        assert!(!selector.reconcile(Some("zzz")));
        assert!(!selector.reconcile(None));
        assert_eq!(selector.active_id(), Some("b"));
    }

    #[test]
    fn replace_keeps_the_selection_when_it_survives() {
        let mut selector = TechniqueSelector::new(ab(), None);
        selector.select("b");

        selector.replace(ab(), None);
        assert_eq!(selector.active_id(), Some("b"));

        selector.replace(vec![technique("c", Some("c"), "C", None)], None);
        assert_eq!(selector.active_id(), Some("c"));

        selector.replace(ab(), Some("a"));
        assert_eq!(selector.active_id(), Some("a"));
    }

    #[test]
    fn missing_content_shows_the_prompt() {
        let mut tabs = ab();
        tabs[1].content = None;

        let mut selector = TechniqueSelector::new(tabs, None);
        assert_eq!(selector.active_content().title, "A cím");

        selector.select("b");
        assert_eq!(selector.active_content().title, fallback::TECHNIQUE_PROMPT_TITLE);

        let empty = TechniqueSelector::new(Vec::new(), Some("a"));
        assert_eq!(empty.active_id(), None);
        assert_eq!(empty.active_content(), fallback::prompt_content());
    }

    #[test]
    fn duplicate_ids_collapse_into_one_tab() {
        let mut first = technique("a", Some("a"), "A", None);
        first.content = None;

        let selector = TechniqueSelector::new(
            vec![first, technique("b", Some("b"), "B", None), technique("a", Some("a"), "A", None)],
            None,
        );

        assert_eq!(selector.tabs().len(), 2);
        assert_eq!(selector.active_content().title, "A cím");
    }
}
