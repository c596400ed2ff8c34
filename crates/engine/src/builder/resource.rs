use url::Url;

use dataspace_core::{
    ConnectorEndpoint, Contract, EntityKind, EntityLookup, ProtocolResource, Record,
    Representation, Resource, SelfLink, TypedLiteral,
};

use super::{build, BuildContext, Builder};
use crate::mapping;

/// Budget for judging a sample: Resource → Representation → App → Endpoint
/// with no required child left as a stub
const SAMPLE_CHECK_DEPTH: u32 = 4;

// Valid with at least one surviving representation and at least one contract.
impl Builder for Resource {
    type Output = ProtocolResource;

    fn build_full(&self, remaining: u32, cx: &mut BuildContext<'_>) -> Option<ProtocolResource> {
        let representations = cx.children::<Representation>(&self.representations, remaining);
        let contract_offers = cx.children::<Contract>(&self.contracts, remaining);
        if !cx.require(
            self.reference(),
            &[
                (EntityKind::Representation, representations.len()),
                (EntityKind::Contract, contract_offers.len()),
            ],
        ) {
            return None;
        }

        let desc = &self.desc;
        let language = cx.language(&desc.language);
        let id = cx.self_link(&self.reference());
        Some(ProtocolResource {
            title: TypedLiteral::new(desc.title.as_str(), language),
            description: TypedLiteral::new(desc.description.as_str(), language),
            keywords: mapping::keywords(&desc.keywords, language),
            language,
            publisher: desc.publisher.clone(),
            sovereign: desc.sovereign.clone(),
            standard_license: desc.license.clone(),
            payment_modality: mapping::payment_modality(desc.payment_method),
            version: self.meta.version.to_string(),
            created: self.meta.created.to_datetime(),
            modified: self.meta.modified.to_datetime(),
            resource_endpoint: ConnectorEndpoint {
                access_url: id.clone(),
                endpoint_documentation: desc.endpoint_documentation.iter().cloned().collect(),
            },
            samples: if cx.resolves_samples() {
                samples(self, cx)
            } else {
                Vec::new()
            },
            representations,
            contract_offers,
            id,
        })
    }
}

/// Canonical links of the publishable sample resources
///
/// A sample must resolve to another live resource that passes its own
/// validity rule. Anything else is dropped, including duplicates.
fn samples(resource: &Resource, cx: &BuildContext<'_>) -> Vec<SelfLink> {
    let mut samples: Vec<SelfLink> = Vec::with_capacity(resource.desc.samples.len());
    for url in &resource.desc.samples {
        let Some(link) = resolve_sample(url, resource, cx) else {
            continue;
        };
        if !samples.contains(&link) {
            samples.push(link);
        }
    }
    samples
}

fn resolve_sample(url: &Url, owner: &Resource, cx: &BuildContext<'_>) -> Option<SelfLink> {
    let target = cx.links().resolve(url).ok()?;
    if target.kind != EntityKind::Resource || target.id == owner.meta.id {
        return None;
    }
    let sample = cx.lookup().resource(&target.id)?;
    build(sample.as_ref(), SAMPLE_CHECK_DEPTH, &mut cx.without_samples())?;
    Some(cx.self_link(&target))
}
