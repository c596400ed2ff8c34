use dataspace_core::{Artifact, ProtocolArtifact, Record};

use super::{BuildContext, Builder};
use crate::mapping;

impl Builder for Artifact {
    type Output = ProtocolArtifact;

    fn build_full(&self, _remaining: u32, cx: &mut BuildContext<'_>) -> Option<ProtocolArtifact> {
        Some(ProtocolArtifact {
            id: cx.self_link(&self.reference()),
            file_name: self.desc.title.clone(),
            byte_size: self.byte_size,
            checksum: mapping::checksum_hex(self.checksum),
            created: self.meta.created.to_datetime(),
        })
    }
}
