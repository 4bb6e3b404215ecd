use crate::foundation::core::Rgb8;

/// Which face of the resolved font pair a run of text uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceKind {
    Bold,
    Regular,
}

/// Horizontal text measurement, in canvas pixels.
///
/// Widths include trailing whitespace, so `advance("word ")` is the cursor step after drawing
/// `"word "`.
pub trait TextMeasure {
    fn advance(&mut self, face: FaceKind, size_px: f32, text: &str) -> f32;
}

/// Font, size and base color of a text run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub face: FaceKind,
    pub size_px: f32,
    pub color: Rgb8,
}

/// Keywords rendered in an accent color.
#[derive(Clone, Copy, Debug)]
pub struct Highlight<'a> {
    pub keywords: &'a [String],
    pub color: Rgb8,
}

/// Geometry for one wrapped block.
#[derive(Clone, Copy, Debug)]
pub struct WrapBox {
    /// Width lines are centered in.
    pub canvas_width: f32,
    /// Widest allowed line.
    pub max_width: f32,
    /// Line advance as a multiple of the font size.
    pub line_height: f32,
}

/// One word (with its trailing space) at its final position.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub color: Rgb8,
    pub highlighted: bool,
}

/// Result of [`wrap_centered`].
#[derive(Clone, Debug, PartialEq)]
pub struct WrappedBlock {
    /// Words of each line, in order. Always holds at least one (possibly empty) line.
    pub lines: Vec<Vec<String>>,
    pub words: Vec<PlacedWord>,
    /// First free y below the block.
    pub next_y: f32,
}

const TRIM_CHARS: &[char] = &['.', ',', '!', '?', ':', '"'];

/// Greedy line breaking over whitespace-separated words.
///
/// A word is appended while the space-joined line still fits in `max_width`; otherwise the current
/// line is closed and the word starts the next one. A word wider than `max_width` still gets a line
/// of its own, so one that opens the text is preceded by an empty line.
pub fn break_lines<'t>(
    text: &'t str,
    style: TextStyle,
    max_width: f32,
    measure: &mut dyn TextMeasure,
) -> Vec<Vec<&'t str>> {
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        let mut candidate = current.join(" ");
        if !candidate.is_empty() {
            candidate.push(' ');
        }
        candidate.push_str(word);

        if measure.advance(style.face, style.size_px, &candidate) <= max_width {
            current.push(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push(word);
        }
    }
    lines.push(current);
    lines
}

/// Uppercased keywords with empty entries dropped.
pub fn normalize_keywords(keywords: &[String]) -> Vec<String> {
    keywords
        .iter()
        .map(|k| k.trim().to_uppercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Whether `word` contains any of the (already normalized) keywords, ignoring case and the
/// punctuation in `.,!?:"` at either end of the word.
pub fn is_highlighted(word: &str, normalized_keywords: &[String]) -> bool {
    let cleaned = word.trim_matches(TRIM_CHARS).to_uppercase();
    normalized_keywords
        .iter()
        .any(|k| cleaned.contains(k.as_str()))
}

/// Wrap `text` into centered lines starting at `y_start`.
pub fn wrap_centered(
    text: &str,
    y_start: f32,
    style: TextStyle,
    wrap: WrapBox,
    highlight: Option<Highlight<'_>>,
    measure: &mut dyn TextMeasure,
) -> WrappedBlock {
    let keywords = highlight
        .map(|h| normalize_keywords(h.keywords))
        .unwrap_or_default();
    let lines = break_lines(text, style, wrap.max_width, measure);
    let step = style.size_px * wrap.line_height;

    let mut words = Vec::new();
    let mut y = y_start;
    for line in &lines {
        let line_str = line.join(" ");
        let line_width = measure.advance(style.face, style.size_px, &line_str);
        let mut x = (wrap.canvas_width - line_width) / 2.0;

        for word in line {
            let highlighted = highlight.is_some() && is_highlighted(word, &keywords);
            let color = match highlight {
                Some(h) if highlighted => h.color,
                _ => style.color,
            };
            let run = format!("{word} ");
            let advance = measure.advance(style.face, style.size_px, &run);
            words.push(PlacedWord {
                text: run,
                x,
                y,
                color,
                highlighted,
            });
            x += advance;
        }

        y += step;
    }

    tracing::trace!(lines = lines.len(), next_y = y, "wrapped text block");

    WrappedBlock {
        lines: lines
            .into_iter()
            .map(|l| l.into_iter().map(str::to_owned).collect())
            .collect(),
        words,
        next_y: y,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
