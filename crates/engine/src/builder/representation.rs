use dataspace_core::{
    App, Artifact, EntityKind, ProtocolRepresentation, Record, Representation, TypedLiteral,
};

use super::{BuildContext, Builder};

// Valid with at least one artifact and at least one surviving app.
impl Builder for Representation {
    type Output = ProtocolRepresentation;

    fn build_full(
        &self,
        remaining: u32,
        cx: &mut BuildContext<'_>,
    ) -> Option<ProtocolRepresentation> {
        let instances = cx.children::<Artifact>(&self.artifacts, remaining);
        let apps = cx.children::<App>(&self.apps, remaining);
        if !cx.require(
            self.reference(),
            &[
                (EntityKind::Artifact, instances.len()),
                (EntityKind::App, apps.len()),
            ],
        ) {
            return None;
        }

        let desc = &self.desc;
        let language = cx.language(&desc.language);
        Some(ProtocolRepresentation {
            id: cx.self_link(&self.reference()),
            title: TypedLiteral::new(desc.title.as_str(), language),
            language,
            media_type: desc.media_type.clone(),
            standard: desc.standard.clone(),
            runtime_environment: desc.runtime_environment.clone(),
            distribution_service: desc.distribution_service.clone(),
            created: self.meta.created.to_datetime(),
            modified: self.meta.modified.to_datetime(),
            instances,
            apps,
        })
    }
}
