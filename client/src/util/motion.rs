//! Entrance animation metadata.
//!
//! Motion is presentation only: each element gets an inline CSS `animation`
//! declaration naming a keyframe preset from `style/portfolio.css`. Nothing
//! here reads or writes page state. Hover and tap effects are plain CSS
//! classes.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Keyframe preset. Offsets mirror the stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Opacity 0 to 1.
    FadeIn,
    /// Slides down 100px into place (nav bar).
    SlideDown,
    /// Rises 50px while fading in.
    RiseIn,
    /// Drops 30px while fading in (section headings).
    DropIn,
    /// Slides in 50px from the left while fading in.
    SlideInLeft,
    /// Scales up from zero.
    PopIn,
    /// Scales up from 0.8 while fading in.
    GrowIn,
}

impl Motion {
    #[must_use]
    pub fn keyframes(self) -> &'static str {
        match self {
            Self::FadeIn => "motion-fade-in",
            Self::SlideDown => "motion-slide-down",
            Self::RiseIn => "motion-rise-in",
            Self::DropIn => "motion-drop-in",
            Self::SlideInLeft => "motion-slide-in-left",
            Self::PopIn => "motion-pop-in",
            Self::GrowIn => "motion-grow-in",
        }
    }
}

/// A motion preset with its timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entrance {
    pub motion: Motion,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl Entrance {
    #[must_use]
    pub const fn new(motion: Motion, duration_ms: u32) -> Self {
        Self { motion, delay_ms: 0, duration_ms }
    }

    #[must_use]
    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// Inline style value. `both` keeps the start frame during the delay.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "animation: {} {}ms ease-out {}ms both;",
            self.motion.keyframes(),
            self.duration_ms,
            self.delay_ms
        )
    }
}

/// Delay for the `index`-th item of a staggered list.
#[must_use]
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(step_ms))
}

// Timings for page elements.
pub const NAV: Entrance = Entrance::new(Motion::SlideDown, 800);
pub const HERO: Entrance = Entrance::new(Motion::FadeIn, 1000);
pub const HERO_TITLE: Entrance = Entrance::new(Motion::RiseIn, 800).delayed(200);
pub const HERO_SUBTITLE: Entrance = Entrance::new(Motion::RiseIn, 800).delayed(400);
pub const HERO_CTA: Entrance = Entrance::new(Motion::PopIn, 500).delayed(600);
pub const PANEL: Entrance = Entrance::new(Motion::FadeIn, 500);
pub const ABOUT_HEADING: Entrance = Entrance::new(Motion::SlideInLeft, 600);
pub const ABOUT_BODY: Entrance = Entrance::new(Motion::SlideInLeft, 600).delayed(200);
pub const ABOUT_SKILLS: Entrance = Entrance::new(Motion::SlideInLeft, 600).delayed(400);
pub const PORTRAIT: Entrance = Entrance::new(Motion::GrowIn, 800);
pub const SECTION_HEADING: Entrance = Entrance::new(Motion::DropIn, 600);
pub const DIRECT_CONTACT: Entrance = Entrance::new(Motion::FadeIn, 600).delayed(500);
pub const FOOTER: Entrance = Entrance::new(Motion::FadeIn, 800).delayed(1000);

pub const PRODUCT_CARD_STAGGER_MS: u32 = 100;

/// Entrance for the `index`-th product card.
#[must_use]
pub fn product_card(index: usize) -> Entrance {
    Entrance::new(Motion::RiseIn, 600).delayed(stagger_delay(index, PRODUCT_CARD_STAGGER_MS))
}
