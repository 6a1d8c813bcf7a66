use unicode_segmentation::UnicodeSegmentation;

/// Grapheme-aware suffix removal. Conjugation endings can span several code
/// points, so this never slices on raw byte offsets it did not get from the
/// segmenter.
pub trait StripEnding {
    fn strip_ending(&self, ending: &str) -> Option<&str>;
}

impl StripEnding for str {
    fn strip_ending(&self, ending: &str) -> Option<&str> {
        let ending_graphemes: Vec<&str> = ending.graphemes(true).collect();
        let word_graphemes: Vec<(usize, &str)> = self.grapheme_indices(true).collect();

        if ending_graphemes.len() > word_graphemes.len() {
            return None;
        }

        let split = word_graphemes.len() - ending_graphemes.len();
        let tail = word_graphemes[split..].iter().map(|(_, g)| *g);
        if !tail.eq(ending_graphemes.iter().copied()) {
            return None;
        }

        let cut = word_graphemes.get(split).map(|(idx, _)| *idx).unwrap_or(self.len());
        Some(&self[..cut])
    }
}

/// Forward to `str` so owned strings work directly
impl StripEnding for String {
    fn strip_ending(&self, ending: &str) -> Option<&str> {
        self.as_str().strip_ending(ending)
    }
}
