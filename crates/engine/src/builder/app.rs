use dataspace_core::{App, Endpoint, EntityKind, ProtocolApp, Record};

use super::{BuildContext, Builder};
use crate::config::EndpointSelection;
use crate::mapping;

impl Builder for App {
    type Output = ProtocolApp;

    fn build_full(&self, remaining: u32, cx: &mut BuildContext<'_>) -> Option<ProtocolApp> {
        let mut endpoints = cx.children::<Endpoint>(&self.endpoints, remaining);
        if !cx.require(self.reference(), &[(EntityKind::Endpoint, endpoints.len())]) {
            return None;
        }
        if cx.settings().endpoint_selection == EndpointSelection::First {
            endpoints.truncate(1);
        }

        let desc = &self.desc;
        Some(ProtocolApp {
            id: cx.self_link(&self.reference()),
            title: cx.literal(&desc.title),
            documentation: desc.docs.clone(),
            environment_variables: desc.environment_variables.clone(),
            storage_configuration: desc.storage_config.clone(),
            supported_usage_policies: mapping::usage_policy_classes(&desc.supported_policies),
            endpoints,
        })
    }
}
