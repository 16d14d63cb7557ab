use crate::registry::Registry;
use crate::spec::questionnaire::Questionnaire;

/// Decides whether a page is shown to the current respondent.
///
/// Must be a pure function of the questionnaire state: no side effects, and a
/// stable result for a stable tree. The visible page list is recomputed
/// whenever a response changes.
pub type NavFn = fn(&Questionnaire, usize) -> bool;

/// A navigation predicate together with the input names it reads.
///
/// Declaring dependencies by name lets the validation engine verify them
/// against the tree, so reordering pages or groups cannot silently break a
/// predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavPredicate {
    pub deps: Vec<String>,
    pub func: NavFn,
}

impl NavPredicate {
    pub fn new(func: NavFn) -> Self {
        Self { deps: Vec::new(), func }
    }

    pub fn with_deps<I, S>(func: NavFn, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            deps: deps.into_iter().map(Into::into).collect(),
            func,
        }
    }
}

/// Whether the page appears in prev/next controls and the progress bar.
///
/// `no_navigation` always wins; otherwise the page's predicate decides.
/// Unregistered predicate names are rejected at validation time; if one is
/// encountered anyway the page stays visible.
pub fn is_navigable(q: &Questionnaire, page_idx: usize, registry: &Registry) -> bool {
    let Some(page) = q.pages.get(page_idx) else {
        return false;
    };
    if page.no_navigation {
        return false;
    }
    match page.nav_func.as_deref() {
        Some(name) => match registry.nav_predicate(name) {
            Some(predicate) => (predicate.func)(q, page_idx),
            None => true,
        },
        None => true,
    }
}

/// Indices of all pages the respondent can navigate to, in page order.
pub fn navigable_pages(q: &Questionnaire, registry: &Registry) -> Vec<usize> {
    (0..q.pages.len())
        .filter(|idx| is_navigable(q, *idx, registry))
        .collect()
}

/// Nearest navigable page after the current one.
pub fn next_page(q: &Questionnaire, registry: &Registry) -> Option<usize> {
    (q.curr_page + 1..q.pages.len()).find(|idx| is_navigable(q, *idx, registry))
}

/// Nearest navigable page before the current one.
pub fn prev_page(q: &Questionnaire, registry: &Registry) -> Option<usize> {
    (0..q.curr_page.min(q.pages.len()))
        .rev()
        .find(|idx| is_navigable(q, *idx, registry))
}
