use cellwatch_core::{
    CorsPolicy, EndpointType, Graph, HttpMethod, Relation, Resource, ResourceId, RestApiSpec,
};

pub const INFERENCE_ROUTE: &str = "/inference";

/// Routed HTTP endpoint: `POST /inference` forwards to the api trigger
/// function. CORS is open to all origins and methods.
pub fn add_api(graph: &mut Graph, api_trigger: &ResourceId) -> anyhow::Result<ResourceId> {
    let api = graph.add(
        "api-router",
        Resource::RestApi(RestApiSpec {
            api_name: "battery-consistency-bias-alarm-prediction-api-router".to_owned(),
            endpoint_type: EndpointType::Regional,
            cors: CorsPolicy::open(),
        }),
    )?;

    graph.relate(
        &api,
        Relation::Routes {
            method: HttpMethod::Post,
            path: INFERENCE_ROUTE.to_owned(),
        },
        api_trigger,
    );

    Ok(api)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use cellwatch_core::FunctionSpec;

    use super::*;

    #[test]
    fn test_single_post_inference_route() {
        let mut graph = Graph::new();

        let api_trigger = graph
            .add(
                "api-trigger",
                Resource::Function(FunctionSpec {
                    function_name: "api-trigger".to_owned(),
                    code_location: "lambda/api_trigger/".to_owned(),
                    handler: "main.handler".to_owned(),
                    runtime: "python3.8".to_owned(),
                    environment: BTreeMap::new(),
                    required_env: vec![],
                    memory_mib: 512,
                    timeout_seconds: 30,
                }),
            )
            .unwrap();

        let api = add_api(&mut graph, &api_trigger).unwrap();

        let routes: Vec<_> = graph
            .edges()
            .iter()
            .filter(|edge| matches!(edge.relation, Relation::Routes { .. }))
            .collect();

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].from, api);
        assert_eq!(routes[0].to, api_trigger);

        let Relation::Routes { method, ref path } = routes[0].relation else {
            unreachable!();
        };

        assert_eq!(method, HttpMethod::Post);
        assert_eq!(path, INFERENCE_ROUTE);
    }
}
