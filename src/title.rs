//! Title reveal collaborator.
//!
//! The word-by-word reveal is an external effect. The engine only mounts a
//! title, asks for a forward or backward reveal with fixed timing, and
//! releases it once the backward reveal has played out. It needs the unit
//! (word) count to know when a staggered reveal is finished.

use web_time::Duration;

use crate::error::RondoError;
use crate::options::TitleOptions;
use crate::util::easing::EasingFunction;

/// Which way the title animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealDirection {
    /// Words slide in from below.
    Forward,
    /// Words slide out upward.
    Backward,
}

/// Timing of a staggered reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTiming {
    /// Wait before the first unit starts.
    pub delay: Duration,
    /// Running time of each unit.
    pub unit_duration: Duration,
    /// Start offset between successive units.
    pub stagger: Duration,
    /// Per-unit easing.
    pub easing: EasingFunction,
    /// Travel distance in percent of unit height.
    pub offset_percent: f32,
}

impl RevealTiming {
    /// Timing for a reveal in `direction`.
    #[must_use]
    pub fn from_options(options: &TitleOptions, direction: RevealDirection) -> Self {
        let delay = match direction {
            RevealDirection::Forward => options.reveal_delay(),
            RevealDirection::Backward => options.hide_delay(),
        };
        Self {
            delay,
            unit_duration: Duration::try_from_secs_f32(options.unit_secs)
                .unwrap_or(Duration::ZERO),
            stagger: Duration::try_from_secs_f32(options.stagger_secs)
                .unwrap_or(Duration::ZERO),
            easing: options.easing,
            offset_percent: options.offset_percent,
        }
    }

    /// Start offset of unit `i`, including the initial delay.
    #[must_use]
    pub fn unit_start(&self, i: usize) -> Duration {
        let steps = u32::try_from(i).unwrap_or(u32::MAX);
        let offset = self.stagger.checked_mul(steps).unwrap_or(Duration::MAX);
        self.delay.saturating_add(offset)
    }

    /// Time from the call until the last of `units` finishes.
    #[must_use]
    pub fn total(&self, units: usize) -> Duration {
        self.unit_start(units.saturating_sub(1))
            .saturating_add(self.unit_duration)
    }
}

/// The external title effect.
pub trait TitleRevealer {
    /// Owned handle to mounted title content.
    type Handle;

    /// Clear the title area and mount `text`, hidden and ready to reveal.
    fn mount(&mut self, text: &str) -> Result<Self::Handle, RondoError>;

    /// Number of independently animated units in the mounted title.
    fn unit_count(&self, handle: &Self::Handle) -> usize;

    /// Start a reveal now; the first unit moves after `timing.delay`.
    fn reveal(
        &mut self,
        handle: &Self::Handle,
        direction: RevealDirection,
        timing: &RevealTiming,
    );

    /// Destroy the mounted content.
    fn release(&mut self, handle: Self::Handle);
}

/// Content titles indexed by content index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TitleCatalog {
    titles: Vec<String>,
}

impl TitleCatalog {
    /// Catalogue over `titles`.
    #[must_use]
    pub fn new(titles: Vec<String>) -> Self {
        Self { titles }
    }

    /// Title of content `index`.
    #[must_use]
    pub fn title(&self, index: usize) -> Option<&str> {
        self.titles.get(index).map(String::as_str)
    }

    /// Number of titles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Whether the catalogue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Fail unless every content index below `content_count` has a title.
    pub fn ensure_covers(&self, content_count: usize) -> Result<(), RondoError> {
        if self.titles.len() < content_count {
            return Err(RondoError::Catalog(format!(
                "{} titles for {content_count} contents",
                self.titles.len()
            )));
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for TitleCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Something that happened to a [`LogTitles`] title.
#[derive(Debug, Clone, PartialEq)]
pub enum TitleEvent {
    /// A title was mounted.
    Mounted {
        /// Handle id.
        id: u64,
        /// Title text.
        text: String,
    },
    /// A reveal was started.
    Revealed {
        /// Handle id.
        id: u64,
        /// Direction of the reveal.
        direction: RevealDirection,
        /// Timing handed over.
        timing: RevealTiming,
    },
    /// A title was released.
    Released {
        /// Handle id.
        id: u64,
    },
}

/// Handle issued by [`LogTitles`].
#[derive(Debug, PartialEq, Eq)]
pub struct LogTitleHandle {
    id: u64,
    words: usize,
}

impl LogTitleHandle {
    /// Handle id.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Headless revealer that logs and records every directive.
#[derive(Debug, Default)]
pub struct LogTitles {
    next_id: u64,
    mounted: Option<u64>,
    events: Vec<TitleEvent>,
}

impl LogTitles {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every directive received, oldest first.
    #[must_use]
    pub fn events(&self) -> &[TitleEvent] {
        &self.events
    }

    /// Id of the currently mounted title.
    #[must_use]
    pub fn mounted(&self) -> Option<u64> {
        self.mounted
    }
}

impl TitleRevealer for LogTitles {
    type Handle = LogTitleHandle;

    fn mount(&mut self, text: &str) -> Result<Self::Handle, RondoError> {
        let id = self.next_id;
        self.next_id += 1;
        self.mounted = Some(id);
        log::info!("title #{id} mounted: {text:?}");
        self.events.push(TitleEvent::Mounted {
            id,
            text: text.to_owned(),
        });
        Ok(LogTitleHandle {
            id,
            words: text.split_whitespace().count(),
        })
    }

    fn unit_count(&self, handle: &Self::Handle) -> usize {
        handle.words
    }

    fn reveal(
        &mut self,
        handle: &Self::Handle,
        direction: RevealDirection,
        timing: &RevealTiming,
    ) {
        log::debug!(
            "title #{} reveal {direction:?} after {:?}",
            handle.id,
            timing.delay
        );
        self.events.push(TitleEvent::Revealed {
            id: handle.id,
            direction,
            timing: *timing,
        });
    }

    fn release(&mut self, handle: Self::Handle) {
        if self.mounted == Some(handle.id) {
            self.mounted = None;
        }
        log::info!("title #{} released", handle.id);
        self.events.push(TitleEvent::Released { id: handle.id });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staggered_total_duration() {
        let opts = TitleOptions::default();
        let forward = RevealTiming::from_options(&opts, RevealDirection::Forward);
        assert_eq!(forward.delay, Duration::from_millis(1250));
        // 1.25 + 0.1 * 2 + 0.75
        let total = forward.total(3).as_secs_f32();
        assert!((total - 2.2).abs() < 1e-4, "total = {total}");

        let backward = RevealTiming::from_options(&opts, RevealDirection::Backward);
        assert_eq!(backward.delay, Duration::from_millis(500));
        let single = backward.total(1).as_secs_f32();
        assert!((single - 1.25).abs() < 1e-4);
        // Zero units behaves like one
        assert_eq!(backward.total(0), backward.total(1));
    }

    #[test]
    fn oversized_timing_saturates() {
        let timing = RevealTiming {
            delay: Duration::MAX,
            unit_duration: Duration::from_secs(1),
            stagger: Duration::from_secs(u64::MAX / 2),
            easing: EasingFunction::Linear,
            offset_percent: 100.0,
        };
        assert_eq!(timing.unit_start(3), Duration::MAX);
        assert_eq!(timing.total(usize::MAX), Duration::MAX);
    }

    #[test]
    fn catalog_lookup_and_coverage() {
        let catalog: TitleCatalog = ["Amber Field", "Blue Hour"].into_iter().collect();
        assert_eq!(catalog.title(1), Some("Blue Hour"));
        assert_eq!(catalog.title(2), None);
        assert!(catalog.ensure_covers(2).is_ok());
        assert!(matches!(catalog.ensure_covers(3), Err(RondoError::Catalog(_))));
    }

    #[test]
    fn log_titles_records_lifecycle() {
        let mut titles = LogTitles::new();
        let handle = titles.mount("Salt and Stone").unwrap();
        assert_eq!(titles.unit_count(&handle), 3);
        assert_eq!(titles.mounted(), Some(handle.id()));

        let timing = RevealTiming::from_options(&TitleOptions::default(), RevealDirection::Forward);
        titles.reveal(&handle, RevealDirection::Forward, &timing);
        titles.release(handle);

        assert_eq!(titles.mounted(), None);
        assert_eq!(titles.events().len(), 3);
        assert!(matches!(titles.events()[2], TitleEvent::Released { id: 0 }));
    }
}
