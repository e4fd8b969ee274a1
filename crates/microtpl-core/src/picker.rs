//! Generic "pick one item from a named list" prompt.
//!
//! The same [`SuggestPrompt`] is used for source folders and for templates: each
//! entry pairs the text shown to the user with the value handed to the selection
//! callback. Ranking is a subsequence match over the display text, case-insensitive,
//! favouring consecutive runs, matches at the start, and short names.

/// One selectable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion<T> {
    pub display_name: String,
    pub value: T,
}

impl<T> Suggestion<T> {
    pub fn new(display_name: impl Into<String>, value: T) -> Self {
        Self {
            display_name: display_name.into(),
            value,
        }
    }
}

/// A suggestion that matched a query, with its position in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a, T> {
    /// Index into the prompt's suggestions (what [`SuggestPrompt::choose`] takes).
    pub index: usize,
    pub score: u32,
    pub suggestion: &'a Suggestion<T>,
}

/// A titled, searchable list of suggestions.
#[derive(Debug, Clone)]
pub struct SuggestPrompt<T> {
    title: String,
    suggestions: Vec<Suggestion<T>>,
}

impl<T> SuggestPrompt<T> {
    pub fn new(title: impl Into<String>, suggestions: Vec<Suggestion<T>>) -> Self {
        Self {
            title: title.into(),
            suggestions,
        }
    }

    /// Build a prompt from items, naming each with `display`.
    pub fn from_items<I, F>(title: impl Into<String>, items: I, display: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> String,
    {
        let suggestions = items
            .into_iter()
            .map(|item| Suggestion::new(display(&item), item))
            .collect();
        Self::new(title, suggestions)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn suggestions(&self) -> &[Suggestion<T>] {
        &self.suggestions
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// Suggestions matching `query`, best first. An empty query keeps the
    /// original order.
    pub fn matches(&self, query: &str) -> Vec<Match<'_, T>> {
        let query = query.trim();
        let mut found: Vec<Match<'_, T>> = self
            .suggestions
            .iter()
            .enumerate()
            .filter_map(|(index, suggestion)| {
                score_match(query, &suggestion.display_name).map(|score| Match {
                    index,
                    score,
                    suggestion,
                })
            })
            .collect();

        if !query.is_empty() {
            // Stable: equal scores keep list order.
            found.sort_by(|a, b| b.score.cmp(&a.score));
        }
        found
    }

    /// Consume the prompt, passing the value at `index` to `on_select`.
    ///
    /// Returns `None` (and never calls `on_select`) when `index` is out of range.
    pub fn choose<R>(self, index: usize, on_select: impl FnOnce(T) -> R) -> Option<R> {
        self.suggestions
            .into_iter()
            .nth(index)
            .map(|suggestion| on_select(suggestion.value))
    }
}

/// Score `text` against `query`; `None` when `query` is not a subsequence of it.
pub fn score_match(query: &str, text: &str) -> Option<u32> {
    let query: Vec<char> = query.to_lowercase().chars().collect();
    let text_chars: Vec<char> = text.to_lowercase().chars().collect();

    if query.is_empty() {
        return Some(1);
    }

    let positions = match_positions(&query, &text_chars)?;

    let mut score: u32 = 100;

    // Runs of two or more adjacent matched characters.
    let mut run = 1u32;
    for pair in positions.windows(2) {
        if pair[1] == pair[0] + 1 {
            run += 1;
        } else {
            if run >= 2 {
                score += run * 10;
            }
            run = 1;
        }
    }
    if run >= 2 {
        score += run * 10;
    }

    let prefix = positions
        .iter()
        .enumerate()
        .take_while(|(i, pos)| *i == **pos)
        .count() as u32;
    score += prefix * 50;

    let len = text_chars.len().min(255) as u32;
    score += 255 - len;

    Some(score)
}

/// Greedy left-to-right subsequence positions of `query` in `text`.
fn match_positions(query: &[char], text: &[char]) -> Option<Vec<usize>> {
    let mut positions = Vec::with_capacity(query.len());
    let mut from = 0;
    for &qc in query {
        let offset = text[from..].iter().position(|&tc| tc == qc)?;
        positions.push(from + offset);
        from += offset + 1;
    }
    Some(positions)
}
