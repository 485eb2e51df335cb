use std::path::PathBuf;

use svcforge_codegen::{RenderContext, builder::CodeBuilder};
use svcforge_core::{GeneratedFile, to_go_camel_case};

/// A protobuf message field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtoField {
    pub name: &'static str,
    pub ty: &'static str,
}

impl ProtoField {
    const fn new(name: &'static str, ty: &'static str) -> Self {
        Self { name, ty }
    }

    /// Field name in the code `protoc-gen-go` generates.
    pub fn go_name(&self) -> String {
        to_go_camel_case(self.name)
    }

    /// Go type of the field, with message types referenced through `pb`.
    pub fn go_type(&self) -> String {
        match self.ty {
            "int64" | "int32" | "string" | "bool" => self.ty.to_string(),
            message => format!("*pb.{}", message),
        }
    }
}

/// One RPC of the generated service.
///
/// The proto definition, the server and the client are all rendered from
/// [`OPERATIONS`], so the three always declare the same calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub request: &'static [ProtoField],
    pub response: &'static [ProtoField],
    /// Server stub body, after the debug log line.
    pub server_body: &'static str,
}

impl Operation {
    pub fn request_message(&self) -> String {
        format!("{}Request", self.name)
    }

    pub fn response_message(&self) -> String {
        format!("{}Response", self.name)
    }
}

pub const USER_FIELDS: &[ProtoField] = &[
    ProtoField::new("id", "int64"),
    ProtoField::new("email", "string"),
    ProtoField::new("name", "string"),
    ProtoField::new("created_at", "int64"),
    ProtoField::new("updated_at", "int64"),
];

const ID: ProtoField = ProtoField::new("id", "int64");
const EMAIL: ProtoField = ProtoField::new("email", "string");
const NAME: ProtoField = ProtoField::new("name", "string");
const USER: ProtoField = ProtoField::new("user", "User");

pub const OPERATIONS: &[Operation] = &[
    Operation {
        name: "HealthCheck",
        request: &[],
        response: &[
            ProtoField::new("status", "string"),
            ProtoField::new("service", "string"),
            ProtoField::new("version", "string"),
            ProtoField::new("timestamp", "int64"),
        ],
        server_body: r#"return &pb.HealthCheckResponse{
	Status:    "ok",
	Service:   s.cfg.App.Name,
	Version:   s.cfg.App.Version,
	Timestamp: time.Now().Unix(),
}, nil"#,
    },
    Operation {
        name: "Ping",
        request: &[],
        response: &[
            ProtoField::new("message", "string"),
            ProtoField::new("service", "string"),
            ProtoField::new("version", "string"),
        ],
        server_body: r#"return &pb.PingResponse{
	Message: "pong",
	Service: s.cfg.App.Name,
	Version: s.cfg.App.Version,
}, nil"#,
    },
    Operation {
        name: "CreateUser",
        request: &[EMAIL, NAME],
        response: &[USER],
        server_body: r#"now := time.Now().Unix()
return &pb.CreateUserResponse{
	User: &pb.User{
		Email:     req.Email,
		Name:      req.Name,
		CreatedAt: now,
		UpdatedAt: now,
	},
}, nil"#,
    },
    Operation {
        name: "GetUser",
        request: &[ID],
        response: &[USER],
        server_body: r#"return nil, status.Errorf(codes.NotFound, "user %d not found", req.Id)"#,
    },
    Operation {
        name: "UpdateUser",
        request: &[ID, EMAIL, NAME],
        response: &[USER],
        server_body: r#"return &pb.UpdateUserResponse{
	User: &pb.User{
		Id:        req.Id,
		Email:     req.Email,
		Name:      req.Name,
		UpdatedAt: time.Now().Unix(),
	},
}, nil"#,
    },
    Operation {
        name: "DeleteUser",
        request: &[ID],
        response: &[ProtoField::new("success", "bool")],
        server_body: r#"return &pb.DeleteUserResponse{
	Success: true,
}, nil"#,
    },
];

/// `api/proto/<name>.proto`: the service definition.
pub struct ProtoFile<'a> {
    ctx: &'a RenderContext,
}

impl<'a> ProtoFile<'a> {
    pub fn new(ctx: &'a RenderContext) -> Self {
        Self { ctx }
    }

    fn message(builder: CodeBuilder, name: &str, fields: &[ProtoField]) -> CodeBuilder {
        if fields.is_empty() {
            return builder.blank().line(&format!("message {} {{}}", name));
        }
        builder
            .blank()
            .block_with_close(&format!("message {} {{", name), "}", |b| {
                b.each(fields.iter().enumerate(), |b, (i, field)| {
                    b.line(&format!("{} {} = {};", field.ty, field.name, i + 1))
                })
            })
    }
}

impl GeneratedFile for ProtoFile<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from(format!("api/proto/{}.proto", self.ctx.name()))
    }

    fn render(&self) -> String {
        let ctx = self.ctx;
        let builder = CodeBuilder::proto()
            .line("syntax = \"proto3\";")
            .blank()
            .line(&format!("package {};", ctx.proto_package()))
            .blank()
            .line(&format!(
                "option go_package = \"{}\";",
                ctx.import("internal/grpc/pb")
            ))
            .blank()
            .comment(&format!("{}Service is the RPC API of {}.", ctx.service_name(), ctx.name()))
            .block_with_close(&format!("service {}Service {{", ctx.service_name()), "}", |b| {
                b.each(OPERATIONS, |b, op| {
                    b.line(&format!(
                        "rpc {}({}) returns ({});",
                        op.name,
                        op.request_message(),
                        op.response_message()
                    ))
                })
            });

        let builder = Self::message(builder, "User", USER_FIELDS);
        OPERATIONS
            .iter()
            .fold(builder, |b, op| {
                let b = Self::message(b, &op.request_message(), op.request);
                Self::message(b, &op.response_message(), op.response)
            })
            .build()
    }
}
