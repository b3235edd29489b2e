// Kube-rs based Kubernetes client
pub mod kube_client;
pub mod mappers;
pub mod pods;
