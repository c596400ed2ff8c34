use dataspace_core::{Catalog, ProtocolCatalog, Record, Resource};

use super::{BuildContext, Builder};

// Never elided; an empty resource list is a valid catalog.
impl Builder for Catalog {
    type Output = ProtocolCatalog;

    fn build_full(&self, remaining: u32, cx: &mut BuildContext<'_>) -> Option<ProtocolCatalog> {
        let offered_resources = cx.children::<Resource>(&self.resources, remaining);
        Some(ProtocolCatalog {
            id: cx.self_link(&self.reference()),
            title: cx.literal(&self.desc.title),
            description: cx.literal(&self.desc.description),
            offered_resources,
        })
    }
}
