use std::path::PathBuf;

use svcforge_codegen::{RenderContext, builder::CodeBuilder};
use svcforge_core::GeneratedFile;

use super::proto::{OPERATIONS, Operation};
use crate::{GoFile, Import};

/// `internal/grpc/client.go`: a typed client with one method per RPC.
pub struct GrpcClientGo<'a> {
    ctx: &'a RenderContext,
}

impl<'a> GrpcClientGo<'a> {
    pub fn new(ctx: &'a RenderContext) -> Self {
        Self { ctx }
    }

    fn method(&self, op: &Operation) -> String {
        let params: String = op
            .request
            .iter()
            .map(|field| format!(", {} {}", field.name, field.go_type()))
            .collect();
        let header = format!(
            "func (c *Client) {}(ctx context.Context{}) (*pb.{}, error) {{",
            op.name,
            params,
            op.response_message()
        );
        let doc = format!("{} calls {}Service.{}.", op.name, self.ctx.service_name(), op.name);

        let builder = CodeBuilder::go().comment(&doc);
        if op.request.is_empty() {
            return builder
                .block_with_close(&header, "}", |b| {
                    b.line(&format!(
                        "return c.client.{}(ctx, &pb.{}{{}})",
                        op.name,
                        op.request_message()
                    ))
                })
                .build();
        }

        let width = op
            .request
            .iter()
            .map(|field| field.go_name().len())
            .max()
            .unwrap_or_default();
        builder
            .block_with_close(&header, "}", |b| {
                b.block_with_close(
                    &format!(
                        "return c.client.{}(ctx, &pb.{}{{",
                        op.name,
                        op.request_message()
                    ),
                    "})",
                    |b| {
                        b.each(op.request, |b, field| {
                            let key = format!("{}:", field.go_name());
                            b.line(&format!("{:<w$} {},", key, field.name, w = width + 1))
                        })
                    },
                )
            })
            .build()
    }
}

impl GeneratedFile for GrpcClientGo<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("internal/grpc/client.go")
    }

    fn render(&self) -> String {
        let ctx = self.ctx;
        let client = CLIENT.replace("{service}", ctx.service_name());
        OPERATIONS
            .iter()
            .fold(
                GoFile::new("grpc")
                    .in_module(ctx.module_path())
                    .import(Import::new("context"))
                    .import(Import::new("fmt"))
                    .import(Import::new("google.golang.org/grpc"))
                    .import(Import::new("google.golang.org/grpc/credentials/insecure"))
                    .import(Import::new(ctx.import("internal/grpc/pb")))
                    .section(&client),
                |file, op| file.section(&self.method(op)),
            )
            .render()
    }
}

const CLIENT: &str = r#"// Client calls a remote {service}Service.
type Client struct {
	conn   *grpc.ClientConn
	client pb.{service}ServiceClient
}

// NewClient dials address without transport security.
func NewClient(address string) (*Client, error) {
	conn, err := grpc.Dial(address, grpc.WithTransportCredentials(insecure.NewCredentials()))
	if err != nil {
		return nil, fmt.Errorf("failed to dial %s: %w", address, err)
	}

	return &Client{
		conn:   conn,
		client: pb.New{service}ServiceClient(conn),
	}, nil
}

// Close closes the connection.
func (c *Client) Close() error {
	return c.conn.Close()
}"#;
