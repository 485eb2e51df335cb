use std::path::PathBuf;

use svcforge_codegen::{
    RenderContext,
    builder::{CodeBuilder, Indent},
    published_ports,
};
use svcforge_core::GeneratedFile;

use crate::{adapters::DatabaseAdapter, versions::GO_IMAGE};

/// Multi-stage `Dockerfile`.
///
/// The builder stage compiles with CGO only when the database driver needs
/// it; the runtime stage exposes every published port.
pub struct Dockerfile<'a> {
    ctx: &'a RenderContext,
    database: Option<&'a dyn DatabaseAdapter>,
}

impl<'a> Dockerfile<'a> {
    pub fn new(ctx: &'a RenderContext, database: Option<&'a dyn DatabaseAdapter>) -> Self {
        Self { ctx, database }
    }

    fn requires_cgo(&self) -> bool {
        self.database.is_some_and(|adapter| adapter.requires_cgo())
    }
}

impl GeneratedFile for Dockerfile<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("Dockerfile")
    }

    fn render(&self) -> String {
        let cgo = self.requires_cgo();
        let (packages, cgo_enabled) = if cgo {
            ("git build-base", 1)
        } else {
            ("git", 0)
        };
        let runtime_packages = if cgo {
            "ca-certificates tzdata libc6-compat"
        } else {
            "ca-certificates tzdata"
        };

        CodeBuilder::new(Indent::Spaces(4))
            .line("# Build stage")
            .line(&format!("FROM {} AS builder", GO_IMAGE))
            .blank()
            .line(&format!("RUN apk add --no-cache {}", packages))
            .blank()
            .line("WORKDIR /app")
            .blank()
            .line("COPY go.mod go.sum* ./")
            .line("RUN go mod download")
            .blank()
            .line("COPY . .")
            .line(&format!(
                "RUN CGO_ENABLED={} GOOS=linux go build -ldflags=\"-w -s\" -o main ./cmd",
                cgo_enabled
            ))
            .blank()
            .line("# Runtime stage")
            .line("FROM alpine:latest")
            .blank()
            .line(&format!("RUN apk add --no-cache {}", runtime_packages))
            .line("RUN addgroup -g 1001 -S app && \\")
            .indent()
            .line("adduser -S app -u 1001 -G app")
            .dedent()
            .blank()
            .line("WORKDIR /app")
            .blank()
            .line("COPY --from=builder /app/main .")
            .line("COPY --from=builder /app/config.yaml .")
            .line("RUN chown -R app:app /app")
            .blank()
            .line("USER app")
            .blank()
            .each(published_ports(self.ctx), |b, port| {
                b.line(&format!("EXPOSE {}", port.port))
            })
            .blank()
            .line("CMD [\"./main\"]")
            .build()
    }
}
