//! Maps kube-rs / k8s-openapi types to API DTOs

use k8s_openapi::api::core::v1::Pod;

use crate::api::dto::workload_dto::WorkloadSummary;

/// Projects a pod down to the two fields the API exposes.
///
/// Metadata fields absent on the source object become empty strings.
pub fn map_pod_to_summary(pod: &Pod) -> WorkloadSummary {
    WorkloadSummary {
        name: pod.metadata.name.clone().unwrap_or_default(),
        namespace: pod.metadata.namespace.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    use super::*;

    #[test]
    fn maps_name_and_namespace() {
        let pod = Pod {
            metadata: ObjectMeta {
                name: Some("web-7c5d".to_string()),
                namespace: Some("default".to_string()),
                ..ObjectMeta::default()
            },
            ..Pod::default()
        };

        let summary = map_pod_to_summary(&pod);
        assert_eq!(summary.name, "web-7c5d");
        assert_eq!(summary.namespace, "default");
    }

    #[test]
    fn missing_metadata_fields_become_empty_strings() {
        let summary = map_pod_to_summary(&Pod::default());
        assert_eq!(summary.name, "");
        assert_eq!(summary.namespace, "");
    }
}
