use dataspace_core::{Contract, ProtocolContract, Record, Rule, Timestamp};

use super::{BuildContext, Builder};

// Contracts are published with whatever rules survive, even none.
impl Builder for Contract {
    type Output = ProtocolContract;

    fn build_full(&self, remaining: u32, cx: &mut BuildContext<'_>) -> Option<ProtocolContract> {
        let rules = cx.children::<Rule>(&self.rules, remaining);
        let desc = &self.desc;
        Some(ProtocolContract {
            id: cx.self_link(&self.reference()),
            title: cx.literal(&desc.title),
            provider: desc.provider.clone(),
            consumer: desc.consumer.clone(),
            start: desc.start.as_ref().map(Timestamp::to_datetime),
            end: desc.end.as_ref().map(Timestamp::to_datetime),
            rules,
        })
    }
}
