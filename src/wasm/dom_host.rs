//! DOM-backed feed host
//!
//! Discovers the slots inside a feed container, tags each with its stable
//! index and carries out the navigator's play/pause/scroll commands on the
//! real elements.

use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, HtmlMediaElement, ScrollIntoViewOptions};

use super::event_adapter::SLOT_INDEX_ATTR;
use crate::config::NavigatorConfig;
use crate::error::NavigatorError;
use crate::host::{FeedHost, ScrollBehavior};

pub(crate) fn dom_error(err: JsValue) -> NavigatorError {
    NavigatorError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// A slot container and the media element inside it
#[derive(Debug, Clone)]
pub struct DomSlot {
    pub container: HtmlElement,
    pub media: HtmlMediaElement,
}

/// Feed host over real DOM elements
#[derive(Debug)]
pub struct DomHost {
    slots: Vec<DomSlot>,
}

impl DomHost {
    /// Find the feed's slots under `container`, in document order
    pub fn discover(
        container: &HtmlElement,
        config: &NavigatorConfig,
    ) -> Result<Self, NavigatorError> {
        let nodes = container
            .query_selector_all(&config.slot_selector)
            .map_err(dom_error)?;

        let mut slots = Vec::with_capacity(nodes.length() as usize);
        for position in 0..nodes.length() {
            let Some(node) = nodes.get(position) else {
                continue;
            };
            let index = slots.len();
            let slot_container: HtmlElement = node.dyn_into().map_err(|_| {
                NavigatorError::Dom(format!("slot {} is not an HTML element", index))
            })?;
            let media = slot_container
                .query_selector(&config.media_selector)
                .map_err(dom_error)?
                .and_then(|element| element.dyn_into::<HtmlMediaElement>().ok())
                .ok_or(NavigatorError::MissingMedia { index })?;

            slot_container
                .set_attribute(SLOT_INDEX_ATTR, &index.to_string())
                .map_err(dom_error)?;
            slots.push(DomSlot {
                container: slot_container,
                media,
            });
        }

        debug!(slot_count = slots.len(), "discovered feed slots");
        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[DomSlot] {
        &self.slots
    }

    fn slot(&self, index: usize) -> Option<&DomSlot> {
        let slot = self.slots.get(index);
        if slot.is_none() {
            warn!(index, "command for slot outside the feed");
        }
        slot
    }
}

impl FeedHost for DomHost {
    fn play(&mut self, index: usize) {
        let Some(slot) = self.slot(index) else {
            return;
        };
        match slot.media.play() {
            // The promise settles after the handler returns; a rejection
            // (autoplay policy, detached source) is only reported
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    warn!(index, ?err, "media refused to play");
                }
            }),
            Err(err) => warn!(index, ?err, "media play() threw"),
        }
    }

    fn pause(&mut self, index: usize) {
        let Some(slot) = self.slot(index) else {
            return;
        };
        if let Err(err) = slot.media.pause() {
            warn!(index, ?err, "media pause() threw");
        }
    }

    fn scroll_into_view(&mut self, index: usize, behavior: ScrollBehavior) {
        let Some(slot) = self.slot(index) else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        slot.container
            .scroll_into_view_with_scroll_into_view_options(&options);
    }
}
