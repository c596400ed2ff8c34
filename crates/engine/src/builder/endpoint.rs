use dataspace_core::{Endpoint, ProtocolEndpoint, Record, TypedLiteral};

use super::{BuildContext, Builder};
use crate::mapping;

impl Builder for Endpoint {
    type Output = ProtocolEndpoint;

    fn build_full(&self, _remaining: u32, cx: &mut BuildContext<'_>) -> Option<ProtocolEndpoint> {
        let desc = &self.desc;
        let language = cx.language(&desc.language);
        Some(ProtocolEndpoint {
            id: cx.self_link(&self.reference()),
            access_url: mapping::access_url(&desc.location, &cx.settings().fallback_access_url),
            path: desc.path.clone(),
            media_type: desc.media_type.clone(),
            port: desc.port,
            protocol: desc.protocol.clone(),
            endpoint_type: mapping::endpoint_type(desc.endpoint_type),
            documentation: desc.docs.clone(),
            information: TypedLiteral::new(desc.info.as_str(), language),
        })
    }
}
