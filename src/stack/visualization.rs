use cellwatch_core::{ClusterSpec, ContainerServiceSpec, Graph, Relation, Resource, ResourceId};

use crate::environment::Environment;

/// Load-balanced superset host for browsing prediction events. The
/// container image is pre-built per partition; the service only references
/// it. Catalog and storage query access comes from provider-managed
/// policies on the task role.
pub fn add_visualization(
    graph: &mut Graph,
    environment: &Environment,
) -> anyhow::Result<ResourceId> {
    let cluster = graph.add(
        "superset-cluster",
        Resource::Cluster(ClusterSpec {
            cluster_name: "superset-cluster".to_owned(),
            max_azs: 3,
        }),
    )?;

    let service = graph.add(
        "superset-service",
        Resource::ContainerService(ContainerServiceSpec {
            service_name: "battery-consistency-bias-alarm-prediction-superset-host".to_owned(),
            cluster: cluster.clone(),
            image: environment.visualization_image().to_owned(),
            cpu: 1024,
            memory_mib: 4096,
            desired_count: 1,
            assign_public_ip: true,
            health_check_path: "/login/".to_owned(),
            managed_policies: vec![
                "AmazonAthenaFullAccess".to_owned(),
                "AmazonS3FullAccess".to_owned(),
            ],
        }),
    )?;

    graph.relate(&service, Relation::DependsOn, &cluster);

    Ok(service)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_spec(partition: &str) -> ContainerServiceSpec {
        let environment = Environment::new("111111111111", "us-west-2", partition);
        let mut graph = Graph::new();

        let service = add_visualization(&mut graph, &environment).unwrap();

        match graph.get(&service).unwrap() {
            Resource::ContainerService(spec) => spec.clone(),
            other => panic!("expected container service, got {}", other.kind()),
        }
    }

    #[test]
    fn test_image_follows_partition() {
        assert!(service_spec("aws-cn").image.starts_with("arn:aws-cn:"));
        assert!(service_spec("aws").image.starts_with("arn:aws:"));
        assert!(service_spec("aws-us-gov").image.starts_with("arn:aws:"));
    }

    #[test]
    fn test_service_shape() {
        let spec = service_spec("aws");

        assert_eq!(spec.cpu, 1024);
        assert_eq!(spec.memory_mib, 4096);
        assert_eq!(spec.desired_count, 1);
        assert!(spec.assign_public_ip);
        assert_eq!(spec.health_check_path, "/login/");
        assert_eq!(spec.managed_policies.len(), 2);
    }
}
