use api::{FirestoreStore, StoreConfig};
use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;
use ui::{LeadStoreHandle, Site};

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger init failed: {err}");
    }
    info!(version = env!("CARGO_PKG_VERSION"), "starting iHerd web");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let store = FirestoreStore::new(StoreConfig::default());
        info!(project = %store.config().project_id, "lead store configured");
        LeadStoreHandle::new(store)
    });

    rsx! {
        Site {}
    }
}
