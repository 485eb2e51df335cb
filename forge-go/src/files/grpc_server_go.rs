use std::path::PathBuf;

use svcforge_codegen::{RenderContext, builder::CodeBuilder};
use svcforge_core::GeneratedFile;

use super::proto::{OPERATIONS, Operation};
use crate::{GoFile, Import};

/// `internal/grpc/server.go`: server stubs for every RPC.
pub struct GrpcServerGo<'a> {
    ctx: &'a RenderContext,
}

impl<'a> GrpcServerGo<'a> {
    pub fn new(ctx: &'a RenderContext) -> Self {
        Self { ctx }
    }

    fn server(&self) -> String {
        SERVER.replace("{service}", self.ctx.service_name())
    }

    fn method(&self, op: &Operation) -> String {
        let log = match op.request.first() {
            Some(field) => format!(
                "s.logger.Debug(\"gRPC {} called\", \"{}\", req.{})",
                op.name,
                field.name,
                field.go_name()
            ),
            None => format!("s.logger.Debug(\"gRPC {} called\")", op.name),
        };

        CodeBuilder::go()
            .comment(&format!(
                "{} implements {}ServiceServer.",
                op.name,
                self.ctx.service_name()
            ))
            .block_with_close(
                &format!(
                    "func (s *Server) {}(ctx context.Context, req *pb.{}) (*pb.{}, error) {{",
                    op.name,
                    op.request_message(),
                    op.response_message()
                ),
                "}",
                |b| b.line(&log).blank().text(op.server_body),
            )
            .build()
    }
}

impl GeneratedFile for GrpcServerGo<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("internal/grpc/server.go")
    }

    fn render(&self) -> String {
        let ctx = self.ctx;
        OPERATIONS
            .iter()
            .fold(
                GoFile::new("grpc")
                    .in_module(ctx.module_path())
                    .imports(["context", "fmt", "net", "time"].map(Import::new))
                    .import(Import::new("google.golang.org/grpc"))
                    .import(Import::new("google.golang.org/grpc/codes"))
                    .import(Import::new("google.golang.org/grpc/keepalive"))
                    .import(Import::new("google.golang.org/grpc/reflection"))
                    .import(Import::new("google.golang.org/grpc/status"))
                    .import(Import::new(ctx.import("internal/config")))
                    .import(Import::new(ctx.import("internal/grpc/pb")))
                    .import(Import::new(ctx.import("pkg/logger")))
                    .section(&self.server()),
                |file, op| file.section(&self.method(op)),
            )
            .render()
    }
}

const SERVER: &str = r#"// Server serves the {service}Service API.
type Server struct {
	pb.Unimplemented{service}ServiceServer

	cfg    *config.Config
	logger logger.Logger
	server *grpc.Server
}

// New creates the gRPC server and registers the service on it.
func New(cfg *config.Config, log logger.Logger) *Server {
	s := &Server{
		cfg:    cfg,
		logger: log,
	}
	s.server = grpc.NewServer(
		grpc.KeepaliveParams(keepalive.ServerParameters{
			MaxConnectionAge:  time.Duration(cfg.Grpc.MaxConnectionAge) * time.Second,
			MaxConnectionIdle: time.Duration(cfg.Grpc.MaxConnectionIdle) * time.Second,
		}),
	)
	pb.Register{service}ServiceServer(s.server, s)
	reflection.Register(s.server)
	return s
}

// Start listens on the configured port and serves until Stop.
func (s *Server) Start() error {
	lis, err := net.Listen("tcp", fmt.Sprintf(":%d", s.cfg.Grpc.Port))
	if err != nil {
		return fmt.Errorf("failed to listen on gRPC port: %w", err)
	}

	s.logger.Info("gRPC server started", "port", s.cfg.Grpc.Port)
	return s.server.Serve(lis)
}

// Stop waits for in-flight calls and stops the server.
func (s *Server) Stop() {
	s.server.GracefulStop()
}"#;

#[cfg(test)]
mod tests {
    use std::path::Path;

    use svcforge_config::ProjectConfig;

    use super::*;

    fn render() -> String {
        let config = ProjectConfig::builder("orders")
            .with_module_path("example.org/orders")
            .with_rpc(true)
            .resolve_in(Path::new("/work"))
            .unwrap();
        GrpcServerGo::new(&RenderContext::new(&config)).render()
    }

    #[test]
    fn test_registers_service() {
        let code = render();
        assert!(code.contains("pb.UnimplementedOrdersServiceServer\n"));
        assert!(code.contains("pb.RegisterOrdersServiceServer(s.server, s)"));
        assert!(code.contains("s.cfg.Grpc.Port"));
    }

    #[test]
    fn test_stubs_every_operation() {
        let code = render();
        for op in OPERATIONS {
            let signature = format!("func (s *Server) {}(ctx context.Context", op.name);
            assert_eq!(code.matches(&signature).count(), 1, "{}", op.name);
        }
        assert!(code.contains("s.logger.Debug(\"gRPC GetUser called\", \"id\", req.Id)"));
        assert!(code.contains("s.logger.Debug(\"gRPC Ping called\")\n"));
    }

    #[test]
    fn test_bodies_are_indented() {
        let code = render();
        assert!(code.contains("\treturn &pb.DeleteUserResponse{\n\t\tSuccess: true,\n\t}, nil\n}"));
    }
}
