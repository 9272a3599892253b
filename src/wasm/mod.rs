//! WASM browser build module for the feed navigator
//!
//! Wires a [`FeedNavigator`] to a feed container on the page: one
//! intersection observer over every slot, plus wheel, touch and (optionally)
//! keyboard listeners attached once to the container. Every listener shares
//! the navigator through `Rc<RefCell<..>>`. Handlers run to completion on the
//! UI thread, so a borrow conflict is dropped with a warning, never a panic.

pub mod dom_host;
pub mod event_adapter;
pub mod logging;

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, TouchEvent, WheelEvent,
};

use crate::config::NavigatorConfig;
use crate::error::NavigatorError;
use crate::input::NavigationRequest;
use crate::navigator::FeedNavigator;
use crate::shared::with_navigator;
use dom_host::{dom_error, DomHost};

type SharedNavigator = crate::shared::SharedNavigator<DomHost>;

fn to_js_error(err: NavigatorError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// DOM listener closures; they must outlive their registration
struct Listeners {
    visibility: Closure<dyn FnMut(js_sys::Array)>,
    wheel: Closure<dyn FnMut(WheelEvent)>,
    touch_start: Closure<dyn FnMut(TouchEvent)>,
    touch_end: Closure<dyn FnMut(TouchEvent)>,
    touch_cancel: Closure<dyn FnMut(TouchEvent)>,
    key: Option<Closure<dyn FnMut(KeyboardEvent)>>,
}

impl Listeners {
    fn new(state: &SharedNavigator, config: &NavigatorConfig) -> Self {
        let threshold = config.visibility_threshold;
        let visibility_state = Rc::clone(state);
        let visibility = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let Some(event) = event_adapter::convert_intersection_entry(&entry, threshold)
                else {
                    warn!("intersection entry for an untagged element");
                    continue;
                };
                with_navigator(&visibility_state, |nav| nav.handle_visibility(event));
            }
        });

        let suppress_native_wheel = config.suppress_native_wheel;
        let wheel_state = Rc::clone(state);
        let wheel = Closure::<dyn FnMut(WheelEvent)>::new(move |event: WheelEvent| {
            if suppress_native_wheel {
                event.prevent_default();
            }
            let delta_y = event_adapter::wheel_delta_y(&event);
            with_navigator(&wheel_state, |nav| nav.handle_wheel(delta_y));
        });

        let start_state = Rc::clone(state);
        let touch_start = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            if let Some(y) = event_adapter::touch_start_y(&event) {
                with_navigator(&start_state, |nav| nav.handle_touch_start(y));
            }
        });

        let end_state = Rc::clone(state);
        let touch_end = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            if let Some(y) = event_adapter::touch_end_y(&event) {
                with_navigator(&end_state, |nav| nav.handle_touch_end(y));
            }
        });

        let cancel_state = Rc::clone(state);
        let touch_cancel = Closure::<dyn FnMut(TouchEvent)>::new(move |_event: TouchEvent| {
            with_navigator(&cancel_state, |nav| nav.handle_touch_cancel());
        });

        let key = config.keyboard_navigation.then(|| {
            let key_state = Rc::clone(state);
            Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                let Some(key) = event_adapter::navigation_key(&event) else {
                    return;
                };
                let handled = with_navigator(&key_state, |nav| nav.handle_key(&key)).flatten();
                if handled.is_some() {
                    // Keep the browser from scrolling the page as well
                    event.prevent_default();
                }
            })
        });

        Self {
            visibility,
            wheel,
            touch_start,
            touch_end,
            touch_cancel,
            key,
        }
    }

    fn gesture_listeners(&self) -> Vec<(&'static str, &js_sys::Function, bool)> {
        let mut listeners: Vec<(&'static str, &js_sys::Function, bool)> = vec![
            // Wheel must be non-passive for preventDefault to take effect
            ("wheel", self.wheel.as_ref().unchecked_ref(), false),
            ("touchstart", self.touch_start.as_ref().unchecked_ref(), true),
            ("touchend", self.touch_end.as_ref().unchecked_ref(), true),
            ("touchcancel", self.touch_cancel.as_ref().unchecked_ref(), true),
        ];
        if let Some(key) = &self.key {
            listeners.push(("keydown", key.as_ref().unchecked_ref(), false));
        }
        listeners
    }

    fn register(&self, container: &HtmlElement) -> Result<(), NavigatorError> {
        for (event_type, callback, passive) in self.gesture_listeners() {
            let options = AddEventListenerOptions::new();
            options.set_passive(passive);
            container
                .add_event_listener_with_callback_and_add_event_listener_options(
                    event_type, callback, &options,
                )
                .map_err(dom_error)?;
        }
        Ok(())
    }

    fn unregister(&self, container: &HtmlElement) {
        for (event_type, callback, _) in self.gesture_listeners() {
            if let Err(err) = container.remove_event_listener_with_callback(event_type, callback) {
                warn!(event_type, ?err, "failed to remove feed listener");
            }
        }
    }
}

/// WASM-exported feed handle
#[wasm_bindgen]
pub struct WasmFeed {
    container: HtmlElement,
    state: SharedNavigator,
    observer: Option<IntersectionObserver>,
    listeners: Option<Listeners>,
}

#[wasm_bindgen]
impl WasmFeed {
    /// Attach a navigator to a feed container
    ///
    /// `config_json` is an optional JSON object overriding any
    /// `NavigatorConfig` field.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, config_json: Option<String>) -> Result<WasmFeed, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) => NavigatorConfig::from_json(json).map_err(to_js_error)?,
            None => NavigatorConfig::default(),
        };
        logging::init_console_tracing(config.console_log_level.as_level());
        Self::attach(container, config).map_err(to_js_error)
    }

    /// Attach to the first element matching `selector` (e.g. `.video-feed`)
    pub fn from_selector(selector: &str, config_json: Option<String>) -> Result<WasmFeed, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let container = document
            .query_selector(selector)?
            .ok_or_else(|| JsValue::from_str(&format!("no element matches `{}`", selector)))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str("feed container is not an HTML element"))?;
        Self::new(container, config_json)
    }

    /// Index of the current slot (`None` once destroyed)
    pub fn current_index(&self) -> Option<usize> {
        self.state.borrow().as_ref().map(|nav| nav.current_index())
    }

    pub fn slot_count(&self) -> usize {
        self.state
            .borrow()
            .as_ref()
            .map(|nav| nav.slot_count())
            .unwrap_or(0)
    }

    /// Step to the next slot; returns whether the index moved
    pub fn next(&self) -> bool {
        with_navigator(&self.state, |nav| {
            nav.handle_navigation_request(NavigationRequest::next()).is_moved()
        })
        .unwrap_or(false)
    }

    /// Step to the previous slot; returns whether the index moved
    pub fn previous(&self) -> bool {
        with_navigator(&self.state, |nav| {
            nav.handle_navigation_request(NavigationRequest::previous()).is_moved()
        })
        .unwrap_or(false)
    }

    pub fn is_destroyed(&self) -> bool {
        self.state.borrow().is_none()
    }

    /// Disconnect the observer, remove every listener and pause playback
    pub fn destroy(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        if let Some(listeners) = self.listeners.take() {
            listeners.unregister(&self.container);
        }
        let navigator = match self.state.try_borrow_mut() {
            Ok(mut state) => state.take(),
            Err(_) => {
                warn!("feed navigator busy during destroy");
                None
            }
        };
        if let Some(navigator) = navigator {
            drop(navigator.teardown());
            debug!("feed destroyed");
        }
    }
}

impl WasmFeed {
    fn attach(container: HtmlElement, config: NavigatorConfig) -> Result<Self, NavigatorError> {
        let host = DomHost::discover(&container, &config)?;

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.visibility_threshold));

        let navigator = FeedNavigator::new(host.len(), config, host)?;
        let state: SharedNavigator = Rc::new(RefCell::new(None));
        let listeners = Listeners::new(&state, navigator.config());

        let observer = IntersectionObserver::new_with_options(
            listeners.visibility.as_ref().unchecked_ref(),
            &init,
        )
        .map_err(dom_error)?;
        for slot in navigator.host().slots() {
            observer.observe(&slot.container);
        }

        if navigator.config().keyboard_navigation && container.tab_index() < 0 {
            container.set_tab_index(0);
        }
        if let Err(err) = listeners.register(&container) {
            observer.disconnect();
            listeners.unregister(&container);
            return Err(err);
        }

        debug!(slot_count = navigator.slot_count(), "feed attached");
        *state.borrow_mut() = Some(navigator);

        Ok(Self {
            container,
            state,
            observer: Some(observer),
            listeners: Some(listeners),
        })
    }
}

impl Drop for WasmFeed {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Main entry point for WASM
#[wasm_bindgen(start)]
pub fn wasm_main() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    web_sys::console::log_1(&"feed navigator WASM module loaded".into());
}
