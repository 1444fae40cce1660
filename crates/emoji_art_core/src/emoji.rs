use unicode_properties::UnicodeEmoji;
use unicode_segmentation::UnicodeSegmentation;

/// First scalar of the "Miscellaneous Symbols and Pictographs" block.
const PICTOGRAPHS_START: char = '\u{1F300}';

/// Heuristic emoji check for a single grapheme cluster. Input holding more
/// than one grapheme is never an emoji.
///
/// The first scalar must carry the Unicode `Emoji` property, and either sit at
/// or above U+1F300 or be followed by further scalars (keycaps, modifier and
/// variation sequences). Plain digits and `#` carry the property too, which is
/// why single low scalars are rejected.
pub fn is_emoji_grapheme(grapheme: &str) -> bool {
    let mut scalars = grapheme.chars();
    let Some(first) = scalars.next() else {
        return false;
    };
    if !first.is_emoji_char() || grapheme.graphemes(true).nth(1).is_some() {
        return false;
    }
    first >= PICTOGRAPHS_START || scalars.next().is_some()
}

/// Emoji graphemes of `text`, in order.
pub fn emoji_graphemes(text: &str) -> impl Iterator<Item = &str> {
    text.graphemes(true).filter(|grapheme| is_emoji_grapheme(grapheme))
}
