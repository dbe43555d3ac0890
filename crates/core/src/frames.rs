//! Kaomoji frame cycles.
//!
//! Every cycle is left-padded with spaces to one shared display width (at least
//! [`MIN_FRAME_WIDTH`] columns), so a dancer's bounding box does not change while
//! it animates. Widths are measured in terminal columns: fullwidth glyphs such as
//! `っ` or `／` count twice.

use unicode_width::UnicodeWidthStr;

use crate::types::{Variant, MIN_FRAME_WIDTH};

const CAT: [&str; 6] = [
    "(=^･ω･^=)",
    "(=^･ｪ･^=)",
    "(=^◕ᴥ◕^=)",
    "(=^‥^=)",
    "(=^..^=)",
    "(=^● ⋏ ●^=)",
];

const BEAR: [&str; 6] = [
    "ʕ•ᴥ•ʔ",
    "ʕ·ᴥ·ʔ",
    "ʕ º ᴥ ºʔ",
    "ʕっ•ᴥ•ʔっ",
    "ʕ•ﻌ•ʔ",
    "ʕ≧ᴥ≦ʔ",
];

const RABBIT: [&str; 6] = [
    "／(≧ x ≦)＼",
    "／(･ × ･)＼",
    "／(^ x ^)＼",
    "／(° × °)＼",
    "／(˘･ᴗ･˘)＼",
    "／(◕ ⋏ ◕)＼",
];

const STAR: [&str; 6] = [
    "☆*:.｡.o(≧▽≦)o.｡.:*☆",
    "★~(◠‿◕✿)",
    "✧*。ヾ(｡>ω<｡)ﾉﾞ✧*。",
    "♪♪＼(^ω^＼)( /^ω^)/♪♪",
    "꒰ᵕ༚ᵕ꒱˖♡",
    "٩(◕‿◕｡)۶",
];

/// Raw (unpadded) frames for a variant.
pub fn raw_frames(variant: Variant) -> &'static [&'static str] {
    match variant {
        Variant::Cat => &CAT,
        Variant::Bear => &BEAR,
        Variant::Rabbit => &RABBIT,
        Variant::Star => &STAR,
    }
}

/// Padded frame cycle for a variant.
pub fn frames_for(variant: Variant) -> Vec<String> {
    pad_frames(raw_frames(variant).iter().copied())
}

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Left-pad every frame to the widest frame (or [`MIN_FRAME_WIDTH`]).
pub fn pad_frames<'a>(frames: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let frames: Vec<&str> = frames.into_iter().collect();
    let target = frames
        .iter()
        .map(|f| display_width(f))
        .max()
        .unwrap_or(0)
        .max(MIN_FRAME_WIDTH);

    frames
        .into_iter()
        .map(|f| {
            let pad = target - display_width(f);
            let mut out = String::with_capacity(f.len() + pad);
            out.extend(std::iter::repeat(' ').take(pad));
            out.push_str(f);
            out
        })
        .collect()
}
