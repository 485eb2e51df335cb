use std::path::PathBuf;

use svcforge_codegen::{RenderContext, Renderer, Result};
use svcforge_core::{Artifact, GeneratedFile};

use crate::files::{GrpcClientGo, GrpcServerGo, ProtoFile, ProtoMk};

/// gRPC service definition, server, client and regeneration targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct RpcRenderer;

impl Renderer for RpcRenderer {
    fn name(&self) -> &'static str {
        "rpc"
    }

    fn applies(&self, ctx: &RenderContext) -> bool {
        ctx.rpc_enabled()
    }

    fn directories(&self, _ctx: &RenderContext) -> Vec<PathBuf> {
        ["api/proto", "internal/grpc", "internal/grpc/pb", "scripts"]
            .into_iter()
            .map(PathBuf::from)
            .collect()
    }

    fn render(&self, ctx: &RenderContext) -> Result<Vec<Artifact>> {
        Ok(vec![
            ProtoFile::new(ctx).to_artifact(),
            GrpcServerGo::new(ctx).to_artifact(),
            GrpcClientGo::new(ctx).to_artifact(),
            ProtoMk.to_artifact(),
        ])
    }
}
