//! One [`GeneratedFile`](svcforge_core::GeneratedFile) per emitted file.

mod app_go;
mod config_go;
mod config_yaml;
mod context_go;
mod database_go;
mod docker_compose;
mod dockerfile;
mod dockerignore;
mod gitignore;
mod go_mod;
mod grpc_client_go;
mod grpc_server_go;
mod handler_go;
mod health_go;
mod interface_go;
mod logger_go;
mod main_go;
mod makefile;
mod middleware_go;
mod models_go;
mod proto;
mod proto_mk;
mod repository_go;

pub use app_go::AppGo;
pub use config_go::ConfigGo;
pub use config_yaml::ConfigYaml;
pub use context_go::ContextGo;
pub use database_go::DatabaseGo;
pub use docker_compose::DockerCompose;
pub use dockerfile::Dockerfile;
pub use dockerignore::DockerIgnore;
pub use gitignore::GitIgnore;
pub use go_mod::GoMod;
pub use grpc_client_go::GrpcClientGo;
pub use grpc_server_go::GrpcServerGo;
pub use handler_go::HandlerGo;
pub use health_go::HealthGo;
pub use interface_go::InterfaceGo;
pub use logger_go::LoggerGo;
pub use main_go::MainGo;
pub use makefile::Makefile;
pub use middleware_go::MiddlewareGo;
pub use models_go::ModelsGo;
pub use proto::{Operation, ProtoField, ProtoFile, OPERATIONS, USER_FIELDS};
pub use proto_mk::ProtoMk;
pub use repository_go::RepositoryGo;
