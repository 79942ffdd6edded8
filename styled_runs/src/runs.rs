// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};

use crate::{Brush, CharStyle};

/// A maximal substring sharing one style.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct StyledRun<B: Brush> {
    /// The run's text.
    pub text: String,
    /// The run's sparse style.
    pub style: CharStyle<B>,
}

impl<B: Brush> StyledRun<B> {
    /// Create a run from text and a style.
    pub fn new(text: impl Into<String>, style: CharStyle<B>) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Number of characters in this run.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// An ordered sequence of styled runs forming one logical string.
///
/// Invariants upheld by every operation:
/// - concatenating the run texts reconstructs the logical string with no
///   gaps or overlaps;
/// - no run has empty text;
/// - adjacent runs never have value-equal styles (they are merged).
#[derive(Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichContent<B: Brush> {
    runs: Vec<StyledRun<B>>,
}

impl<B: Brush> RichContent<B> {
    /// Empty content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Content made of a single run. Empty text yields empty content.
    pub fn plain(text: impl Into<String>, style: CharStyle<B>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Self::new()
        } else {
            Self {
                runs: vec![StyledRun::new(text, style)],
            }
        }
    }

    /// Build from raw runs, re-establishing the invariants (empty runs
    /// dropped, adjacent equal-style runs merged).
    pub fn from_runs(runs: Vec<StyledRun<B>>) -> Self {
        Self {
            runs: merge_adjacent(runs),
        }
    }

    /// The runs, in logical order.
    pub fn runs(&self) -> &[StyledRun<B>] {
        &self.runs
    }

    /// Consume into the raw run list.
    pub fn into_runs(self) -> Vec<StyledRun<B>> {
        self.runs
    }

    /// The full logical string.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Number of characters in the logical string.
    pub fn char_len(&self) -> usize {
        self.runs.iter().map(StyledRun::char_len).sum()
    }

    /// Returns `true` if there is no text.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Replace all runs with one plainly styled run.
    ///
    /// This is the typed-input path: retyping through it discards
    /// per-character styling of the previous content.
    pub fn replace_with_plain(&mut self, text: impl Into<String>, style: CharStyle<B>) {
        *self = Self::plain(text, style);
    }

    /// Apply `patch` to the character range `[start, end)`.
    ///
    /// The range is clamped to the content length; an empty range after
    /// clamping is a no-op. Runs straddling a range endpoint are split into
    /// up to three pieces and the patch is shallow-merged onto the inside
    /// pieces, then adjacent runs with equal styles are re-merged.
    pub fn apply_style(&mut self, start: usize, end: usize, patch: &CharStyle<B>) {
        let len = self.char_len();
        let start = start.min(len);
        let end = end.min(len);
        if start >= end {
            return;
        }

        let mut out: Vec<StyledRun<B>> = Vec::with_capacity(self.runs.len() + 2);
        let mut cursor = 0_usize;
        for run in self.runs.drain(..) {
            let run_len = run.char_len();
            let run_start = cursor;
            let run_end = cursor + run_len;
            cursor = run_end;

            if run_end <= start || run_start >= end {
                out.push(run);
                continue;
            }

            let overlap_start = run_start.max(start);
            let overlap_end = run_end.min(end);

            let before: String = run.text.chars().take(overlap_start - run_start).collect();
            let inside: String = run
                .text
                .chars()
                .skip(overlap_start - run_start)
                .take(overlap_end - overlap_start)
                .collect();
            let after: String = run.text.chars().skip(overlap_end - run_start).collect();

            if !before.is_empty() {
                out.push(StyledRun::new(before, run.style.clone()));
            }
            let mut inside_style = run.style.clone();
            inside_style.merge(patch);
            out.push(StyledRun::new(inside, inside_style));
            if !after.is_empty() {
                out.push(StyledRun::new(after, run.style));
            }
        }
        self.runs = merge_adjacent(out);
    }

    /// Style of the run containing character `index`.
    ///
    /// `index == char_len()` returns the last run's style, which is what
    /// typing at the very end would inherit. Beyond that, or for empty
    /// content, returns `None`.
    pub fn style_at(&self, index: usize) -> Option<CharStyle<B>> {
        let mut cursor = 0_usize;
        for run in &self.runs {
            let run_len = run.char_len();
            if index < cursor + run_len {
                return Some(run.style.clone());
            }
            cursor += run_len;
        }
        if index == cursor {
            self.runs.last().map(|run| run.style.clone())
        } else {
            None
        }
    }

    /// Iterate the runs overlapping the character range `[start, end)`.
    pub fn runs_overlapping(
        &self,
        start: usize,
        end: usize,
    ) -> impl Iterator<Item = &StyledRun<B>> {
        let mut cursor = 0_usize;
        self.runs.iter().filter(move |run| {
            let run_start = cursor;
            let run_end = run_start + run.char_len();
            cursor = run_end;
            run_end > start && run_start < end
        })
    }

    /// The attributes shared by every run overlapping `[start, end)`,
    /// comparing each run's *effective* style: its sparse attributes
    /// merged over `base` (the owning element's defaults).
    ///
    /// An explicitly styled run and a run inheriting the same value from
    /// `base` therefore agree rather than reading as mixed. Attributes
    /// that genuinely differ across the range are dropped. Returns `None`
    /// when the clamped range is empty.
    pub fn common_style(&self, start: usize, end: usize, base: &CharStyle<B>) -> Option<CharStyle<B>> {
        let len = self.char_len();
        let start = start.min(len);
        let end = end.min(len);
        if start >= end {
            return None;
        }
        let mut common: Option<CharStyle<B>> = None;
        for run in self.runs_overlapping(start, end) {
            let mut effective = base.clone();
            effective.merge(&run.style);
            match common.as_mut() {
                None => common = Some(effective),
                Some(acc) => acc.retain_common(&effective),
            }
        }
        common
    }
}

fn merge_adjacent<B: Brush>(runs: Vec<StyledRun<B>>) -> Vec<StyledRun<B>> {
    let mut merged: Vec<StyledRun<B>> = Vec::with_capacity(runs.len());
    for run in runs {
        if run.text.is_empty() {
            continue;
        }
        match merged.last_mut() {
            Some(last) if last.style == run.style => last.text.push_str(&run.text),
            _ => merged.push(run),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    type Content = RichContent<String>;
    type Style = CharStyle<String>;

    fn colored(color: &str) -> Style {
        CharStyle {
            color: Some(color.to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn text_round_trips_through_runs() {
        let mut content = Content::plain("ABCDE", Style::default());
        content.apply_style(1, 3, &colored("red"));
        assert_eq!(content.text(), "ABCDE");
        assert_eq!(content.char_len(), 5);
    }

    #[test]
    fn apply_style_splits_a_straddled_run() {
        let mut content = Content::plain("ABCDE", Style::default());
        content.apply_style(1, 3, &colored("red"));

        let runs = content.runs();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].text, "A");
        assert_eq!(runs[0].style, Style::default());
        assert_eq!(runs[1].text, "BC");
        assert_eq!(runs[1].style.color.as_deref(), Some("red"));
        assert_eq!(runs[2].text, "DE");
        assert_eq!(runs[2].style, Style::default());
    }

    #[test]
    fn apply_style_readback_matches_for_every_index() {
        let mut content = Content::plain("ABCDE", Style::default());
        content.apply_style(1, 3, &colored("red"));

        for index in 0..content.char_len() {
            let style = content.style_at(index).unwrap();
            if (1..3).contains(&index) {
                assert_eq!(style.color.as_deref(), Some("red"), "index {index}");
            } else {
                assert_eq!(style.color, None, "index {index}");
            }
        }
    }

    #[test]
    fn applying_the_same_style_merges_back_to_one_run() {
        let mut content = Content::plain("ABCDE", Style::default());
        content.apply_style(1, 3, &colored("red"));
        content.apply_style(0, 5, &colored("red"));
        // The whole string now carries color:red on a default base, so the
        // pieces coalesce again.
        assert_eq!(content.runs().len(), 1);
        assert_eq!(content.text(), "ABCDE");
    }

    #[test]
    fn apply_style_clamps_and_ignores_empty_ranges() {
        let mut content = Content::plain("abc", Style::default());
        let before = content.clone();
        content.apply_style(2, 2, &colored("red"));
        content.apply_style(5, 9, &colored("red"));
        assert_eq!(content, before);

        // Clamped overlap still applies.
        content.apply_style(2, 99, &colored("red"));
        assert_eq!(content.runs().len(), 2);
        assert_eq!(content.runs()[1].text, "c");
    }

    #[test]
    fn char_offsets_are_not_byte_offsets() {
        let mut content = Content::plain("一二三四五", Style::default());
        content.apply_style(1, 3, &colored("red"));
        let runs = content.runs();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].text, "一");
        assert_eq!(runs[1].text, "二三");
        assert_eq!(runs[2].text, "四五");
    }

    #[test]
    fn style_at_end_inherits_the_last_run() {
        let mut content = Content::plain("ab", Style::default());
        content.apply_style(1, 2, &colored("red"));
        let at_end = content.style_at(2).unwrap();
        assert_eq!(at_end.color.as_deref(), Some("red"));
        assert_eq!(content.style_at(3), None);
        assert_eq!(Content::new().style_at(0), None);
    }

    #[test]
    fn common_style_keeps_agreement_and_drops_conflicts() {
        let mut content = Content::plain("ABCDE", Style::default());
        let mut red_big = colored("red");
        red_big.font_size = Some(28.0);
        content.apply_style(0, 5, &red_big);
        let mut blue = colored("blue");
        blue.font_size = Some(28.0);
        content.apply_style(2, 4, &blue);

        let common = content.common_style(0, 5, &Style::default()).unwrap();
        assert_eq!(common.font_size, Some(28.0));
        assert_eq!(common.color, None);

        let only_blue = content.common_style(2, 4, &Style::default()).unwrap();
        assert_eq!(only_blue.color.as_deref(), Some("blue"));

        assert_eq!(content.common_style(3, 3, &Style::default()), None);
    }

    #[test]
    fn common_style_compares_effective_values_against_the_base() {
        // "AB" explicitly 28px, "CDE" inheriting 28px from the base:
        // effectively uniform, not mixed.
        let mut content = Content::plain("ABCDE", Style::default());
        let mut explicit = Style::default();
        explicit.font_size = Some(28.0);
        content.apply_style(0, 2, &explicit);

        let mut base = Style::default();
        base.font_size = Some(28.0);
        base.font_family = Some("serif".to_owned());

        let common = content.common_style(0, 5, &base).unwrap();
        assert_eq!(common.font_size, Some(28.0));
        assert_eq!(common.font_family.as_deref(), Some("serif"));

        // A run overriding the base still reads as mixed.
        let mut bigger = Style::default();
        bigger.font_size = Some(56.0);
        content.apply_style(3, 5, &bigger);
        let mixed = content.common_style(0, 5, &base).unwrap();
        assert_eq!(mixed.font_size, None);
    }

    #[test]
    fn replace_with_plain_discards_styling() {
        let mut content = Content::plain("styled", Style::default());
        content.apply_style(0, 3, &colored("red"));
        content.replace_with_plain("retyped", Style::default());
        assert_eq!(content.runs().len(), 1);
        assert_eq!(content.style_at(0).unwrap().color, None);
    }

    #[test]
    fn from_runs_reestablishes_invariants() {
        let content = Content::from_runs(vec![
            StyledRun::new("a", Style::default()),
            StyledRun::new("", colored("red")),
            StyledRun::new("b", Style::default()),
            StyledRun::new("c", colored("red")),
        ]);
        let runs = content.runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text, "ab");
        assert_eq!(runs[1].text, "c");
    }
}
