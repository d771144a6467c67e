use std::fs;

use anyhow::Context;
use cellwatch_core::{
    Graph, LifecycleConfigSpec, NotebookInstanceSpec, Relation, Resource, ResourceId, RoleSpec,
};

use crate::environment::StackParams;

/// Example environment: a managed notebook whose on-create lifecycle script
/// downloads the example training material. The script is the one local
/// file the builder reads; an unreadable file aborts the whole construction.
pub fn add_notebook(graph: &mut Graph, params: &StackParams) -> anyhow::Result<ResourceId> {
    let script = fs::read_to_string(&params.lifecycle_script_path).with_context(|| {
        format!(
            "failed to read lifecycle script '{}'",
            params.lifecycle_script_path.display()
        )
    })?;

    let role = graph.add(
        "notebook-role",
        Resource::Role(RoleSpec {
            role_name: "battery-consistency-bias-alarm-prediction-notebook-role".to_owned(),
            assumed_by: "sagemaker.amazonaws.com".to_owned(),
            managed_policies: vec![
                "AmazonSageMakerFullAccess".to_owned(),
                "AmazonS3FullAccess".to_owned(),
            ],
        }),
    )?;

    let lifecycle_config = graph.add(
        "lifecycle-config",
        Resource::LifecycleConfig(LifecycleConfigSpec {
            config_name: "battery-consistency-bias-alarm-prediction-lifecycle-conf".to_owned(),
            on_create_base64: base64::encode(script),
        }),
    )?;

    let instance = graph.add(
        "notebook-instance",
        Resource::NotebookInstance(NotebookInstanceSpec {
            instance_name: "battery-consistency-bias-alarm-prediction-example".to_owned(),
            lifecycle_config: lifecycle_config.clone(),
            role: role.clone(),
            instance_type: "ml.t2.medium".to_owned(),
            volume_gib: 128,
        }),
    )?;

    graph.relate(&instance, Relation::DependsOn, &lifecycle_config);
    graph.relate(&instance, Relation::DependsOn, &role);

    Ok(instance)
}
