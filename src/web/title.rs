//! Word-by-word DOM title reveal.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::host_error;
use crate::error::RondoError;
use crate::title::{RevealDirection, RevealTiming, TitleRevealer};

/// Class given to each word span.
pub const WORD_CLASS: &str = "word";

/// Mounted title: a paragraph of word spans.
#[derive(Debug)]
pub struct DomTitleHandle {
    paragraph: HtmlElement,
    words: Vec<HtmlElement>,
}

/// [`TitleRevealer`] that splits titles into words and lets CSS
/// transitions stagger them.
#[derive(Debug, Clone)]
pub struct DomTitles {
    document: Document,
    container: HtmlElement,
}

impl DomTitles {
    /// Revealer rendering into `container`.
    #[must_use]
    pub fn new(document: Document, container: HtmlElement) -> Self {
        Self {
            document,
            container,
        }
    }

    fn element(&self, tag: &str) -> Result<HtmlElement, RondoError> {
        self.document
            .create_element(tag)
            .map_err(host_error)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| RondoError::Host(format!("<{tag}> is not an HtmlElement")))
    }
}

fn style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::warn!("failed to set {property}: {e:?}");
    }
}

fn offset(percent: f32) -> String {
    format!("translateY({percent}%)")
}

impl TitleRevealer for DomTitles {
    type Handle = DomTitleHandle;

    fn mount(&mut self, text: &str) -> Result<Self::Handle, RondoError> {
        self.container.set_inner_html("");
        let paragraph = self.element("p")?;
        let mut words = Vec::new();
        for word in text.split_whitespace() {
            let span = self.element("span")?;
            span.set_class_name(WORD_CLASS);
            span.set_text_content(Some(word));
            style(&span, "display", "inline-block");
            style(&span, "margin-right", "0.25em");
            let _ = paragraph.append_child(&span).map_err(host_error)?;
            words.push(span);
        }
        let _ = self.container.append_child(&paragraph).map_err(host_error)?;
        Ok(DomTitleHandle { paragraph, words })
    }

    fn unit_count(&self, handle: &Self::Handle) -> usize {
        handle.words.len()
    }

    fn reveal(&mut self, handle: &Self::Handle, direction: RevealDirection, timing: &RevealTiming) {
        let (from, to) = match direction {
            RevealDirection::Forward => (Some(timing.offset_percent), 0.0),
            RevealDirection::Backward => (None, -timing.offset_percent),
        };
        let easing = timing.easing.css_timing();
        for (i, word) in handle.words.iter().enumerate() {
            if let Some(from) = from {
                style(word, "transition", "none");
                style(word, "transform", &offset(from));
                // Flush so the start position is committed before the transition
                let _ = word.offset_height();
            }
            let transition = format!(
                "transform {}s {easing} {}s",
                timing.unit_duration.as_secs_f32(),
                timing.unit_start(i).as_secs_f32()
            );
            style(word, "transition", &transition);
            style(word, "transform", &offset(to));
        }
    }

    fn release(&mut self, handle: Self::Handle) {
        handle.paragraph.remove();
    }
}
