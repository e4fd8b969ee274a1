//! Line-based driver for [`SuggestPrompt`].
//!
//! Shows the current matches as a numbered list on stderr and reads one line at
//! a time: a number picks that entry, any other text becomes the new query, and
//! an empty line (or end of input) cancels.

use std::io::BufRead;

use microtpl_core::picker::SuggestPrompt;

use crate::error::{CtlError, CtlResult};
use crate::output;

const MAX_SHOWN: usize = 20;

/// Run `prompt` against `input`, calling `on_select` with the chosen value.
///
/// Returns `Ok(None)` when the user cancels or there is nothing to choose from.
pub(crate) fn run<T, R>(
    prompt: SuggestPrompt<T>,
    input: &mut impl BufRead,
    on_select: impl FnOnce(T) -> R,
) -> CtlResult<Option<R>> {
    if prompt.is_empty() {
        output::prompt_warning(format!("{}: nothing to choose from.", prompt.title()));
        return Ok(None);
    }

    let mut query = String::new();
    loop {
        let shown: Vec<usize> = prompt
            .matches(&query)
            .iter()
            .take(MAX_SHOWN)
            .map(|m| m.index)
            .collect();

        output::prompt_title(prompt.title());
        if shown.is_empty() {
            output::prompt_note(format!("  no matches for '{query}'"));
        }
        for (n, &idx) in shown.iter().enumerate() {
            output::prompt_choice(n + 1, &prompt.suggestions()[idx].display_name);
        }
        output::prompt("Number or filter (empty to cancel):");

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| CtlError::io("read", "stdin", e))?;
        let line = line.trim();
        if read == 0 || line.is_empty() {
            output::prompt_end();
            return Ok(None);
        }

        match line.parse::<usize>() {
            Ok(n) if (1..=shown.len()).contains(&n) => {
                return Ok(prompt.choose(shown[n - 1], on_select));
            }
            Ok(n) => output::prompt_warning(format!("No entry {n} in the list.")),
            Err(_) => query = line.to_string(),
        }
    }
}
