use std::rc::Rc;

use yew::Reducible;

/// Hero slideshow position. The timer itself lives in the hero component and is only
/// scheduled while [`HeroCarousel::should_schedule`] holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroCarousel {
    index: usize,
    len: usize,
    autoplay: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Tick,
    Select(usize),
    PointerEnter,
    PointerLeave,
}

impl HeroCarousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len, autoplay: true }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn should_schedule(&self) -> bool {
        self.autoplay && self.len > 0
    }

    pub fn apply(&self, action: CarouselAction) -> Self {
        let mut next = self.clone();
        match action {
            CarouselAction::Tick => {
                if self.len > 0 {
                    next.index = (self.index + 1) % self.len;
                }
            }
            CarouselAction::Select(index) => {
                if index < self.len {
                    next.index = index;
                }
            }
            CarouselAction::PointerEnter => next.autoplay = false,
            CarouselAction::PointerLeave => next.autoplay = true,
        }
        next
    }
}

impl Reducible for HeroCarousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ticks(mut carousel: HeroCarousel, k: usize) -> HeroCarousel {
        for _ in 0..k {
            carousel = carousel.apply(CarouselAction::Tick);
        }
        carousel
    }

    #[test]
    fn three_slides_wrap_after_three_ticks() {
        let carousel = HeroCarousel::new(3);
        assert_eq!(ticks(carousel.clone(), 1).index(), 1);
        assert_eq!(ticks(carousel.clone(), 2).index(), 2);
        assert_eq!(ticks(carousel, 3).index(), 0);
    }

    #[test]
    fn empty_carousel_never_schedules() {
        let carousel = HeroCarousel::new(0);
        assert!(!carousel.should_schedule());
        let carousel = ticks(carousel, 5).apply(CarouselAction::Select(0));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn hover_pauses_and_resumes() {
        let carousel = HeroCarousel::new(4).apply(CarouselAction::PointerEnter);
        assert!(!carousel.should_schedule());
        let carousel = carousel.apply(CarouselAction::PointerLeave);
        assert!(carousel.should_schedule());
    }

    #[test]
    fn select_keeps_autoplay_flag() {
        let paused = HeroCarousel::new(4).apply(CarouselAction::PointerEnter);
        let selected = paused.apply(CarouselAction::Select(2));
        assert_eq!(selected.index(), 2);
        assert!(!selected.autoplay);

        let playing = HeroCarousel::new(4).apply(CarouselAction::Select(3));
        assert!(playing.autoplay);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let carousel = HeroCarousel::new(3).apply(CarouselAction::Select(1));
        assert_eq!(carousel.apply(CarouselAction::Select(3)).index(), 1);
    }

    proptest! {
        #[test]
        fn index_after_k_ticks_is_k_mod_n(n in 1usize..20, k in 0usize..200) {
            prop_assert_eq!(ticks(HeroCarousel::new(n), k).index(), k % n);
        }
    }
}
