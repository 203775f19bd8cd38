//! Screen-reader announcements through a reused `role="status"` live
//! region. The region is created lazily, kept for the page lifetime, and
//! cleared shortly after each message so rapid updates never leave stale
//! text behind.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::use_context;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;

/// Handle to one live region. Cheap to clone; clones share the region and
/// the clear schedule.
#[derive(Clone)]
pub struct Announcer {
    region_id: &'static str,
    clear_delay_ms: u32,
    // Each announcement takes a ticket; a deferred clear only fires while
    // its ticket is still the latest, so an old timer cannot wipe a newer
    // message.
    generation: Arc<AtomicU64>,
}

impl Announcer {
    pub fn new(region_id: &'static str, clear_delay_ms: u32) -> Self {
        Self {
            region_id,
            clear_delay_ms,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Set the live region text and schedule its clear.
    pub fn announce(&self, message: &str) {
        let Some(region) = self.region() else {
            return;
        };
        region.set_text_content(Some(message));

        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let region_id = self.region_id;
        let delay = self.clear_delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if generation.load(Ordering::SeqCst) != ticket {
                return;
            }
            let region = window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(region_id));
            if let Some(region) = region {
                region.set_text_content(None);
            }
        });
    }

    /// Find or lazily create the live region node.
    fn region(&self) -> Option<web_sys::Element> {
        let document = window()?.document()?;
        if let Some(existing) = document.get_element_by_id(self.region_id) {
            return Some(existing);
        }
        let region = document.create_element("div").ok()?;
        region.set_id(self.region_id);
        let _ = region.set_attribute("role", "status");
        let _ = region.set_attribute("aria-live", "polite");
        let _ = region.set_attribute("aria-atomic", "true");
        let _ = region.set_attribute("class", "sr-only");
        document.body()?.append_child(&region).ok()?;
        Some(region)
    }
}

/// Hook to the page-wide announcer provided by `App`.
pub fn use_announcer() -> Announcer {
    use_context::<Announcer>().expect("Announcer not found. Provide one in App.")
}
