use dataspace_core::{ProtocolRule, Record, Rule};

use super::{BuildContext, Builder};

impl Builder for Rule {
    type Output = ProtocolRule;

    fn build_full(&self, _remaining: u32, cx: &mut BuildContext<'_>) -> Option<ProtocolRule> {
        Some(ProtocolRule {
            id: cx.self_link(&self.reference()),
            title: cx.literal(&self.desc.title),
            value: self.desc.value.clone(),
        })
    }
}
