//! Google Maps Places integration for the destination field.
//!
//! [`use_maps_script`] injects the Maps JavaScript API once per mount and reports its
//! [`MapsStatus`]; [`use_places_autocomplete`] binds a Places `Autocomplete` to an
//! input once the script is ready. Both clean up after themselves on unmount: the
//! global `initGoogleMaps` callback is deleted, the `<script>` tag detached and the
//! autocomplete listeners cleared.
//!
//! Outside the browser (server rendering, tests) the status is always
//! [`MapsStatus::Unavailable`] and the destination field works as a plain input.

use dioxus::prelude::*;

/// Global function name the Maps script calls once it has loaded.
pub const CALLBACK_NAME: &str = "initGoogleMaps";

/// Key baked in at build time, e.g. `GOOGLE_MAPS_API_KEY=... dx build`.
pub fn api_key() -> Option<String> {
    option_env!("GOOGLE_MAPS_API_KEY")
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapsStatus {
    Loading,
    Ready,
    /// No API key, not running in a browser, or the script failed to load.
    Unavailable,
}

impl MapsStatus {
    /// Input stays disabled until we know whether autocomplete will be available.
    pub fn input_disabled(self) -> bool {
        self == MapsStatus::Loading
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            MapsStatus::Loading => "Loading Google Maps...",
            MapsStatus::Ready | MapsStatus::Unavailable => "Enter destination",
        }
    }
}

pub fn script_url(api_key: &str) -> String {
    format!(
        "https://maps.googleapis.com/maps/api/js?key={api_key}&libraries=places&callback={CALLBACK_NAME}"
    )
}

/// Status once the script has either called back or failed.
pub fn status_after_load<E: std::fmt::Debug>(outcome: Result<(), E>) -> MapsStatus {
    match outcome {
        Ok(()) => MapsStatus::Ready,
        Err(e) => {
            tracing::error!("Google Maps script failed to load: {:?}", e);
            MapsStatus::Unavailable
        }
    }
}

/// Status a freshly mounted field starts in.
pub fn initial_status(api_key: Option<&str>, already_loaded: bool) -> MapsStatus {
    match (already_loaded, api_key) {
        (true, _) => MapsStatus::Ready,
        (false, Some(_)) => MapsStatus::Loading,
        (false, None) => MapsStatus::Unavailable,
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use futures::channel::mpsc::UnboundedSender;
    use js_sys::{Array, Object, Promise, Reflect};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlElement, HtmlInputElement};

    use super::{script_url, CALLBACK_NAME};

    #[wasm_bindgen(js_namespace = ["google", "maps", "places"])]
    extern "C" {
        #[derive(Clone)]
        pub type Autocomplete;

        #[wasm_bindgen(constructor, catch)]
        pub fn new(input: &HtmlInputElement, options: &JsValue) -> Result<Autocomplete, JsValue>;

        #[wasm_bindgen(method, js_name = addListener)]
        pub fn add_listener(this: &Autocomplete, event: &str, handler: &js_sys::Function) -> JsValue;

        #[wasm_bindgen(method, js_name = getPlace)]
        pub fn get_place(this: &Autocomplete) -> JsValue;
    }

    #[wasm_bindgen(js_namespace = ["google", "maps", "event"])]
    extern "C" {
        #[wasm_bindgen(js_name = clearInstanceListeners)]
        pub fn clear_instance_listeners(instance: &JsValue);
    }

    fn get(target: &JsValue, key: &str) -> Option<JsValue> {
        Reflect::get(target, &JsValue::from_str(key))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    }

    pub fn maps_loaded() -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        get(&window, "google")
            .and_then(|google| get(&google, "maps"))
            .is_some()
    }

    /// The injected `<script>` tag. Dropping it detaches the tag and the callback.
    pub struct ScriptTag {
        element: Element,
    }

    impl Drop for ScriptTag {
        fn drop(&mut self) {
            if let Some(window) = web_sys::window() {
                let _ = Reflect::delete_property(&window, &JsValue::from_str(CALLBACK_NAME));
            }
            self.element.remove();
        }
    }

    /// Append the Maps script to `<head>`. The returned promise resolves when the
    /// script calls back and rejects if the tag fails to load.
    pub fn inject_script(api_key: &str) -> Result<(ScriptTag, Promise), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let head = document
            .head()
            .ok_or_else(|| JsValue::from_str("no <head>"))?;

        let element = document.create_element("script")?;
        element.set_attribute("src", &script_url(api_key))?;
        element.set_attribute("async", "")?;
        element.set_attribute("defer", "")?;

        // The executor runs synchronously, so `installed` is settled once `Promise::new` returns.
        let mut installed = Ok(());
        let mut install = |resolve: js_sys::Function, reject: js_sys::Function| {
            installed = match Reflect::set(&window, &JsValue::from_str(CALLBACK_NAME), &resolve) {
                Ok(true) => Ok(()),
                Ok(false) => Err(JsValue::from_str("window rejected the Maps callback")),
                Err(e) => Err(e),
            };
            if let Some(html) = element.dyn_ref::<HtmlElement>() {
                html.set_onerror(Some(&reject));
            }
        };
        let promise = Promise::new(&mut install);
        installed?;

        head.append_child(&element)?;
        Ok((ScriptTag { element }, promise))
    }

    /// A live `Autocomplete` bound to an input. Dropping it clears its listeners.
    pub struct AttachedAutocomplete {
        autocomplete: Autocomplete,
        _listener: Closure<dyn FnMut()>,
    }

    impl Drop for AttachedAutocomplete {
        fn drop(&mut self) {
            clear_instance_listeners(&self.autocomplete);
        }
    }

    pub fn attach(
        input_id: &str,
        places: UnboundedSender<String>,
    ) -> Result<AttachedAutocomplete, JsValue> {
        let input = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(input_id))
            .ok_or_else(|| JsValue::from_str("destination input not mounted"))?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| JsValue::from_str("destination element is not an input"))?;

        let options = Object::new();
        let types = Array::of1(&JsValue::from_str("(cities)"));
        Reflect::set(&options, &JsValue::from_str("types"), &types)?;

        let autocomplete = Autocomplete::new(&input, &options)?;
        let source = autocomplete.clone();
        let listener = Closure::<dyn FnMut()>::new(move || {
            let place = source.get_place();
            if let Some(address) = get(&place, "formatted_address").and_then(|a| a.as_string()) {
                let _ = places.unbounded_send(address);
            }
        });
        autocomplete.add_listener("place_changed", listener.as_ref().unchecked_ref());

        Ok(AttachedAutocomplete {
            autocomplete,
            _listener: listener,
        })
    }
}

/// Load the Maps script for this mount and track its status.
pub fn use_maps_script(api_key: Option<String>) -> Signal<MapsStatus> {
    #[cfg(target_arch = "wasm32")]
    let initial = initial_status(api_key.as_deref(), browser::maps_loaded());
    #[cfg(not(target_arch = "wasm32"))]
    let initial = MapsStatus::Unavailable;

    let status = use_signal(move || initial);

    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut status = status;
        let tag = use_hook(move || {
            let slot: Rc<RefCell<Option<browser::ScriptTag>>> = Rc::new(RefCell::new(None));
            let (Some(key), MapsStatus::Loading) = (api_key, *status.peek()) else {
                return slot;
            };

            match browser::inject_script(&key) {
                Ok((script, promise)) => {
                    tracing::debug!("Injected Google Maps script");
                    slot.borrow_mut().replace(script);
                    spawn(async move {
                        let outcome = wasm_bindgen_futures::JsFuture::from(promise).await.map(|_| ());
                        status.set(status_after_load(outcome));
                    });
                }
                Err(e) => {
                    tracing::error!("Failed to inject Google Maps script: {:?}", e);
                    spawn(async move { status.set(MapsStatus::Unavailable) });
                }
            }
            slot
        });

        use_drop(move || {
            tag.borrow_mut().take();
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = api_key;

    status
}

/// Bind Places autocomplete to the input with id `input_id` once `status` is
/// [`MapsStatus::Ready`]; each picked place's formatted address goes to `on_place`.
pub fn use_places_autocomplete(
    status: Signal<MapsStatus>,
    input_id: &'static str,
    on_place: EventHandler<String>,
) {
    #[cfg(target_arch = "wasm32")]
    {
        use futures::StreamExt;
        use std::cell::RefCell;
        use std::rc::Rc;

        let attached = use_hook(|| Rc::new(RefCell::new(None::<browser::AttachedAutocomplete>)));

        let places = use_hook(|| {
            let (tx, mut rx) = futures::channel::mpsc::unbounded::<String>();
            spawn(async move {
                while let Some(address) = rx.next().await {
                    on_place.call(address);
                }
            });
            tx
        });

        let slot = attached.clone();
        use_effect(move || {
            if status() != MapsStatus::Ready || slot.borrow().is_some() {
                return;
            }
            match browser::attach(input_id, places.clone()) {
                Ok(autocomplete) => {
                    slot.borrow_mut().replace(autocomplete);
                }
                Err(e) => tracing::warn!("Places autocomplete unavailable: {:?}", e),
            }
        });

        use_drop(move || {
            attached.borrow_mut().take();
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (status, input_id, on_place);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_url() {
        assert_eq!(
            script_url("abc123"),
            "https://maps.googleapis.com/maps/api/js?key=abc123&libraries=places&callback=initGoogleMaps"
        );
    }

    #[test]
    fn test_initial_status() {
        assert_eq!(initial_status(Some("k"), true), MapsStatus::Ready);
        assert_eq!(initial_status(None, true), MapsStatus::Ready);
        assert_eq!(initial_status(Some("k"), false), MapsStatus::Loading);
        assert_eq!(initial_status(None, false), MapsStatus::Unavailable);
    }

    #[test]
    fn test_failed_load_leaves_plain_input() {
        assert_eq!(status_after_load::<String>(Ok(())), MapsStatus::Ready);
        let failed = status_after_load(Err("callback not installed"));
        assert_eq!(failed, MapsStatus::Unavailable);
        assert!(!failed.input_disabled());
    }

    #[test]
    fn test_input_state_follows_status() {
        assert!(MapsStatus::Loading.input_disabled());
        assert_eq!(MapsStatus::Loading.placeholder(), "Loading Google Maps...");
        assert!(!MapsStatus::Ready.input_disabled());
        assert!(!MapsStatus::Unavailable.input_disabled());
        assert_eq!(MapsStatus::Unavailable.placeholder(), "Enter destination");
    }
}
