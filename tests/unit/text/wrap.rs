use super::*;

/// Every char advances `size_px / 2`; bold is one pixel wider per char.
struct Mono;

impl TextMeasure for Mono {
    fn advance(&mut self, face: FaceKind, size_px: f32, text: &str) -> f32 {
        let per_char = size_px / 2.0
            + match face {
                FaceKind::Bold => 1.0,
                FaceKind::Regular => 0.0,
            };
        text.chars().count() as f32 * per_char
    }
}

const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
const ORANGE: Rgb8 = Rgb8::new(255, 140, 0);

fn style(size_px: f32) -> TextStyle {
    TextStyle {
        face: FaceKind::Regular,
        size_px,
        color: WHITE,
    }
}

fn wrap_box(max_width: f32) -> WrapBox {
    WrapBox {
        canvas_width: 1080.0,
        max_width,
        line_height: 1.3,
    }
}

#[test]
fn short_text_stays_on_one_line() {
    let lines = break_lines("Boost Your Growth", style(20.0), 900.0, &mut Mono);
    assert_eq!(lines, vec![vec!["Boost", "Your", "Growth"]]);
}

#[test]
fn breaks_greedily_at_max_width() {
    // 10px per char: "aaa bbb" = 70px fits in 75, "aaa bbb ccc" = 110px does not.
    let lines = break_lines("aaa bbb ccc ddd", style(20.0), 75.0, &mut Mono);
    assert_eq!(lines, vec![vec!["aaa", "bbb"], vec!["ccc", "ddd"]]);
}

#[test]
fn width_equal_to_max_still_fits() {
    let lines = break_lines("aaa bbb", style(20.0), 70.0, &mut Mono);
    assert_eq!(lines, vec![vec!["aaa", "bbb"]]);
}

#[test]
fn overlong_first_word_is_preceded_by_an_empty_line() {
    let lines = break_lines("abcdefghij xy", style(20.0), 50.0, &mut Mono);
    assert_eq!(lines, vec![vec![], vec!["abcdefghij"], vec!["xy"]]);

    let block = wrap_centered(
        "abcdefghij xy",
        500.0,
        style(20.0),
        wrap_box(50.0),
        None,
        &mut Mono,
    );
    assert_eq!(block.lines.len(), 3);
    assert!(block.lines[0].is_empty());
    assert_eq!(block.words.len(), 2);
    assert!((block.next_y - (500.0 + 3.0 * 20.0 * 1.3)).abs() < 1e-3);
}

#[test]
fn overlong_word_after_the_first_closes_the_current_line() {
    let lines = break_lines("xy abcdefghij", style(20.0), 50.0, &mut Mono);
    assert_eq!(lines, vec![vec!["xy"], vec!["abcdefghij"]]);
}

#[test]
fn wrapping_is_deterministic() {
    let title = "Five habits that quietly compound your business growth every single week";
    let a = break_lines(title, style(70.0), 900.0, &mut Mono);
    let b = break_lines(title, style(70.0), 900.0, &mut Mono);
    assert_eq!(a, b);
    assert!(a.len() > 1);
}

#[test]
fn empty_text_produces_one_empty_line() {
    let block = wrap_centered("", 500.0, style(70.0), wrap_box(900.0), None, &mut Mono);
    assert_eq!(block.lines, vec![Vec::<String>::new()]);
    assert!(block.words.is_empty());
    assert!((block.next_y - (500.0 + 70.0 * 1.3)).abs() < 1e-3);
}

#[test]
fn next_y_advances_one_step_per_line() {
    let block = wrap_centered(
        "aaa bbb ccc ddd",
        100.0,
        style(20.0),
        wrap_box(75.0),
        None,
        &mut Mono,
    );
    assert_eq!(block.lines.len(), 2);
    assert!((block.next_y - (100.0 + 2.0 * 26.0)).abs() < 1e-3);
}

#[test]
fn lines_are_centered_and_cursor_advances_with_trailing_space() {
    let block = wrap_centered("ab cd", 0.0, style(20.0), wrap_box(900.0), None, &mut Mono);
    // "ab cd" is 50px wide, so the line starts at (1080 - 50) / 2.
    assert_eq!(block.words.len(), 2);
    assert!((block.words[0].x - 515.0).abs() < 1e-3);
    assert_eq!(block.words[0].text, "ab ");
    // "ab " advances 30px.
    assert!((block.words[1].x - 545.0).abs() < 1e-3);
    assert_eq!(block.words[1].text, "cd ");
}

#[test]
fn highlight_ignores_case_and_punctuation() {
    let keywords = normalize_keywords(&["growth".to_owned()]);
    assert!(is_highlighted("Growth,", &keywords));
    assert!(is_highlighted("\"GROWTH!\"", &keywords));
    assert!(is_highlighted("hypergrowth.", &keywords));
    assert!(!is_highlighted("Grow", &keywords));
}

#[test]
fn empty_keywords_never_match() {
    let keywords = normalize_keywords(&["".to_owned(), "  ".to_owned()]);
    assert!(keywords.is_empty());
    assert!(!is_highlighted("anything", &keywords));
}

#[test]
fn highlighted_words_take_the_accent_color() {
    let keywords = vec!["growth".to_owned()];
    let block = wrap_centered(
        "Boost Your Growth,",
        500.0,
        TextStyle {
            face: FaceKind::Bold,
            size_px: 70.0,
            color: WHITE,
        },
        wrap_box(900.0),
        Some(Highlight {
            keywords: &keywords,
            color: ORANGE,
        }),
        &mut Mono,
    );
    let colors: Vec<Rgb8> = block.words.iter().map(|w| w.color).collect();
    assert_eq!(colors, vec![WHITE, WHITE, ORANGE]);
    assert!(block.words[2].highlighted);
}

#[test]
fn without_highlight_every_word_uses_base_color() {
    let block = wrap_centered(
        "growth growth",
        0.0,
        style(40.0),
        wrap_box(850.0),
        None,
        &mut Mono,
    );
    assert!(block.words.iter().all(|w| w.color == WHITE && !w.highlighted));
}
