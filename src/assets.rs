//! Image preloading and the splash gate.
//!
//! [`AssetGate`] is a one-shot barrier: every slot must settle (loaded or
//! failed, whichever signal arrives first), then a fixed delay runs out, then
//! `loading` flips to false and stays there. [`preload`] starts the browser
//! loads and reports each outcome through a callback.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

/// Minimum time the splash stays up after the last load settles.
pub const SPLASH_DELAY_MS: f64 = 500.0;

/// A static image asset, addressed by URL relative to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceRef {
    pub path: &'static str,
}

impl ResourceRef {
    pub const fn new(path: &'static str) -> Self {
        Self { path }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

pub struct AssetGate {
    resources: Vec<ResourceRef>,
    outcomes: Vec<Option<LoadOutcome>>,
    delay_ms: f64,
    /// When the last slot settled.
    settled_at: Option<f64>,
    loading: bool,
}

impl AssetGate {
    pub fn new(resources: &[ResourceRef], delay_ms: f64) -> Self {
        Self {
            resources: resources.to_vec(),
            outcomes: vec![None; resources.len()],
            delay_ms,
            settled_at: None,
            loading: true,
        }
    }

    pub fn resources(&self) -> &[ResourceRef] {
        &self.resources
    }

    /// Record the outcome for slot `index`. The first outcome per slot wins.
    pub fn settle(&mut self, index: usize, outcome: LoadOutcome, now_ms: f64) {
        let Some(slot) = self.outcomes.get_mut(index) else {
            return;
        };
        if slot.is_some() {
            return;
        }
        *slot = Some(outcome);
        if self.all_settled() {
            self.settled_at = Some(now_ms);
        }
    }

    /// Advance the gate. Returns true on the one call that opens it.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        if !self.loading {
            return false;
        }
        // An empty manifest has nothing to wait for.
        if self.settled_at.is_none() && self.all_settled() {
            self.settled_at = Some(now_ms);
        }
        match self.settled_at {
            Some(at) if now_ms - at >= self.delay_ms => {
                self.loading = false;
                true
            }
            _ => false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// `(settled, total)`
    pub fn progress(&self) -> (usize, usize) {
        let settled = self.outcomes.iter().filter(|o| o.is_some()).count();
        (settled, self.outcomes.len())
    }

    pub fn failed(&self) -> impl Iterator<Item = &ResourceRef> + '_ {
        self.resources
            .iter()
            .zip(&self.outcomes)
            .filter(|(_, o)| **o == Some(LoadOutcome::Failed))
            .map(|(r, _)| r)
    }

    fn all_settled(&self) -> bool {
        self.outcomes.iter().all(Option::is_some)
    }
}

/// Start loading every resource as an `<img>`; `on_settle(index, outcome)`
/// fires once per resource from the image's load/error callback.
///
/// An image element that cannot be created settles as `Failed` right away.
pub fn preload(resources: &[ResourceRef], on_settle: Rc<dyn Fn(usize, LoadOutcome)>) {
    for (index, resource) in resources.iter().enumerate() {
        let img = match HtmlImageElement::new() {
            Ok(img) => img,
            Err(_) => {
                on_settle(index, LoadOutcome::Failed);
                continue;
            }
        };

        let onload = {
            let on_settle = on_settle.clone();
            Closure::wrap(Box::new(move || on_settle(index, LoadOutcome::Loaded)) as Box<dyn FnMut()>)
        };
        let onerror = {
            let on_settle = on_settle.clone();
            Closure::wrap(Box::new(move || on_settle(index, LoadOutcome::Failed)) as Box<dyn FnMut()>)
        };
        img.set_onload(Some(onload.as_ref().unchecked_ref()));
        img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        img.set_src(resource.path);

        // The callbacks live as long as the page.
        onload.forget();
        onerror.forget();
    }
}
