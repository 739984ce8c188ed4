//! Pre-computed text styles and resolution-dependent font sets.
//!
//! Alignment styles are `const` so widgets share them without per-frame
//! construction. Colors vary per lamp state, so widgets build
//! `MonoTextStyle::new(font, color)` from a [`FontSet`] entry instead of
//! holding one const style per color.
//!
//! # Font Sets
//!
//! The cluster scales with the window, but mono fonts come in fixed sizes.
//! [`FontSet::for_width`] picks one of two ladders so labels stay readable
//! on a 640px window and do not look lost on a 1280px one.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_5X8, FONT_6X10, FONT_7X13, FONT_9X15, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::WHITE;

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered horizontally and vertically on the anchor point.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Left edge and vertical middle on the anchor point.
pub const LEFT_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Middle)
    .build();

/// Top-left corner on the anchor point. Status words are placed this way.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Horizontally centered, bottom of the text on the anchor point.
pub const BOTTOM_CENTER: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Bottom)
    .build();

/// Left edge and bottom of the text on the anchor point.
pub const BOTTOM_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Bottom)
    .build();

// =============================================================================
// Fixed Styles
// =============================================================================

/// Popup message text.
pub const POPUP_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

// =============================================================================
// Font Sets
// =============================================================================

/// Windows at least this wide use the large font ladder.
pub const LARGE_FONT_MIN_WIDTH: u32 = 960;

/// Fonts for every text role on the cluster, sized for one window width.
#[derive(Clone, Copy)]
pub struct FontSet {
    /// Minor dial labels.
    pub tick_minor: &'static MonoFont<'static>,
    /// Major dial labels and battery percentages.
    pub tick_major: &'static MonoFont<'static>,
    /// Status words (CHARGING, BRAKE, ACCELERATE) and dial captions.
    pub status: &'static MonoFont<'static>,
    /// Speed and battery readouts.
    pub readout: &'static MonoFont<'static>,
    /// Header clock.
    pub clock: &'static MonoFont<'static>,
    /// Boot screen titles and button captions.
    pub title: &'static MonoFont<'static>,
    /// Body text on the boot screens.
    pub body: &'static MonoFont<'static>,
}

impl FontSet {
    /// Ladder for windows narrower than [`LARGE_FONT_MIN_WIDTH`].
    pub const COMPACT: Self = Self {
        tick_minor: &FONT_5X8,
        tick_major: &FONT_6X10,
        status: &FONT_6X10,
        readout: &PROFONT_12_POINT,
        clock: &FONT_7X13,
        title: &PROFONT_14_POINT,
        body: &FONT_6X10,
    };

    /// Ladder for large windows.
    pub const LARGE: Self = Self {
        tick_minor: &FONT_6X10,
        tick_major: &FONT_7X13,
        status: &FONT_9X15,
        readout: &PROFONT_18_POINT,
        clock: &FONT_10X20,
        title: &PROFONT_24_POINT,
        body: &FONT_9X15,
    };

    /// Pick the ladder for a window `width` pixels wide.
    #[inline]
    pub const fn for_width(width: u32) -> Self {
        if width >= LARGE_FONT_MIN_WIDTH { Self::LARGE } else { Self::COMPACT }
    }
}
