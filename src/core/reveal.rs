//! Staggered reveal of the feature cards.
//!
//! A timer calls [`RevealSchedule::tick`] at a fixed interval; each tick makes
//! the next card visible until every card is shown.

/// Milliseconds between two reveals
pub const FEATURE_REVEAL_INTERVAL_MS: u32 = 200;

/// Entrance animation delay step per card
pub const CARD_ANIMATION_STEP_MS: u32 = 100;

/// Extra delay before a card's progress bar starts filling
pub const PROGRESS_BAR_OFFSET_MS: u32 = 200;

/// Result of one timer tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTick {
    /// This index just became visible
    Revealed(usize),
    /// Everything is already visible; nothing changed
    Complete,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSchedule {
    total: usize,
    visible: Vec<usize>,
}

impl RevealSchedule {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            visible: Vec::with_capacity(total),
        }
    }

    pub fn tick(&mut self) -> RevealTick {
        if self.is_complete() {
            return RevealTick::Complete;
        }

        let next = self.visible.len();
        self.visible.push(next);
        RevealTick::Revealed(next)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_complete(&self) -> bool {
        self.visible.len() >= self.total
    }
}

/// CSS `animation-delay` for the card at `index`
pub fn card_animation_delay_ms(index: usize) -> u32 {
    index as u32 * CARD_ANIMATION_STEP_MS
}

/// CSS `transition-delay` for the progress bar of the card at `index`
pub fn progress_bar_delay_ms(index: usize) -> u32 {
    card_animation_delay_ms(index) + PROGRESS_BAR_OFFSET_MS
}
