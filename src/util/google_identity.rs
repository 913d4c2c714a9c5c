//! Google Identity Services button for the login screen.
//!
//! Injects the GIS script once, waits for its global API to appear, then
//! initializes the credential flow and renders the sign-in button into a
//! container element. The raw credential JWT is handed to the caller for the
//! `/auth/google` exchange. Requires a browser environment.

#[cfg(feature = "csr")]
const GSI_SRC: &str = "https://accounts.google.com/gsi/client";
#[cfg(feature = "csr")]
const SCRIPT_ID: &str = "gsi-client";
#[cfg(feature = "csr")]
const CLIENT_ID: &str = "542135659829-lokuuh6bdejhk6sass3bvglk355s65i8.apps.googleusercontent.com";

/// Mount the Google sign-in button into the element with `container_id`.
///
/// `on_credential` receives the credential JWT after a successful sign-in.
pub fn mount_button(container_id: &'static str, on_credential: impl Fn(String) + 'static) {
    #[cfg(feature = "csr")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        ensure_script(&document);

        let handler = std::rc::Rc::new(on_credential);
        leptos::task::spawn_local(async move {
            // The script loads async; poll until its global API appears.
            for _ in 0..50 {
                if render_into(container_id, handler.clone()) {
                    return;
                }
                gloo_timers::future::sleep(std::time::Duration::from_millis(200)).await;
            }
            leptos::logging::warn!("google identity script did not load");
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (container_id, &on_credential);
    }
}

/// Append the GIS script tag once. Dynamically inserted scripts load async.
#[cfg(feature = "csr")]
fn ensure_script(document: &web_sys::Document) {
    use wasm_bindgen::JsCast;

    if document.get_element_by_id(SCRIPT_ID).is_some() {
        return;
    }
    let Ok(element) = document.create_element("script") else {
        return;
    };
    let _ = element.set_attribute("id", SCRIPT_ID);
    let Ok(script) = element.dyn_into::<web_sys::HtmlScriptElement>() else {
        return;
    };
    script.set_src(GSI_SRC);
    if let Some(body) = document.body() {
        let _ = body.append_child(&script);
    }
}

/// Initialize the credential flow and render the button.
///
/// Returns `false` while the GIS global is not available yet.
#[cfg(feature = "csr")]
fn render_into(container_id: &str, on_credential: std::rc::Rc<dyn Fn(String)>) -> bool {
    use js_sys::{Function, Object, Reflect};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(container) = window
        .document()
        .and_then(|document| document.get_element_by_id(container_id))
    else {
        return false;
    };

    let Ok(google) = Reflect::get(&window, &JsValue::from_str("google")) else {
        return false;
    };
    if google.is_undefined() {
        return false;
    }
    let Ok(accounts) = Reflect::get(&google, &JsValue::from_str("accounts")) else {
        return false;
    };
    let Ok(id) = Reflect::get(&accounts, &JsValue::from_str("id")) else {
        return false;
    };
    if id.is_undefined() {
        return false;
    }

    let callback = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
        let credential = Reflect::get(&response, &JsValue::from_str("credential"))
            .ok()
            .and_then(|value| value.as_string());
        if let Some(credential) = credential {
            on_credential(credential);
        }
    });

    let config = Object::new();
    let _ = Reflect::set(&config, &JsValue::from_str("client_id"), &JsValue::from_str(CLIENT_ID));
    let _ = Reflect::set(&config, &JsValue::from_str("callback"), callback.as_ref());
    // GIS keeps the callback for the page lifetime.
    callback.forget();

    let Some(initialize) = Reflect::get(&id, &JsValue::from_str("initialize"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
    else {
        return false;
    };
    if initialize.call1(&id, &config).is_err() {
        return false;
    }

    let options = Object::new();
    let _ = Reflect::set(&options, &JsValue::from_str("theme"), &JsValue::from_str("outline"));
    let _ = Reflect::set(&options, &JsValue::from_str("size"), &JsValue::from_str("large"));
    let Some(render) = Reflect::get(&id, &JsValue::from_str("renderButton"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
    else {
        return false;
    };
    render.call2(&id, &container, &options).is_ok()
}
